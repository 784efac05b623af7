use serde::{Deserialize, Serialize};
use std::fmt;

use crate::preferences::constants::MAX_CUISINES;

/// Cuisine tags offered by the wizard, matching the meal database's area
/// filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cuisine {
    American,
    British,
    French,
    Italian,
    Chinese,
    Indian,
    Japanese,
}

pub const ALL_CUISINES: &[Cuisine] = &[
    Cuisine::American,
    Cuisine::British,
    Cuisine::French,
    Cuisine::Italian,
    Cuisine::Chinese,
    Cuisine::Indian,
    Cuisine::Japanese,
];

impl Cuisine {
    /// The tag as sent to the listing lookup.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::American => "American",
            Cuisine::British => "British",
            Cuisine::French => "French",
            Cuisine::Italian => "Italian",
            Cuisine::Chinese => "Chinese",
            Cuisine::Indian => "Indian",
            Cuisine::Japanese => "Japanese",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Toggle-set of at most [`MAX_CUISINES`] distinct cuisines. Selecting a
/// present member removes it; selecting a new one while full is a no-op.
#[derive(Debug, Clone, Default)]
pub struct CuisineSelection {
    selected: Vec<Cuisine>,
}

impl CuisineSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, cuisine: Cuisine) {
        if let Some(position) = self.selected.iter().position(|c| *c == cuisine) {
            self.selected.remove(position);
        } else if self.selected.len() < MAX_CUISINES {
            self.selected.push(cuisine);
        }
    }

    pub fn contains(&self, cuisine: Cuisine) -> bool {
        self.selected.contains(&cuisine)
    }

    pub fn selected(&self) -> &[Cuisine] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The wizard only advances past stage 1 on a full selection.
    pub fn is_complete(&self) -> bool {
        self.selected.len() == MAX_CUISINES
    }
}
