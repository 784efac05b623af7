use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A meal uploaded by a user. Both fields are optional in stored documents;
/// the gallery substitutes placeholders when they are absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MealRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Document-style profile store keyed by user id. Each user's document holds
/// a preference id list (overwritten wholesale on save) and a nested meal
/// sub-collection.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// All known user ids.
    async fn user_ids(&self) -> Result<Vec<String>>;

    /// The user's saved preference list; empty for an unknown user.
    async fn preferences(&self, user_id: &str) -> Result<Vec<String>>;

    /// Replace the user's preference list with `meal_ids`.
    async fn save_preferences(&self, user_id: &str, meal_ids: &[String]) -> Result<()>;

    /// The user's uploaded meals; empty for an unknown user.
    async fn user_meals(&self, user_id: &str) -> Result<Vec<MealRecord>>;
}
