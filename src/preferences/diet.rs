use serde::{Deserialize, Serialize};
use std::fmt;

use crate::preferences::constants::{CARBS_HIGH_G, CARBS_LOW_G, PROTEIN_HIGH_G, SUGAR_LOW_G};
use crate::preferences::pipeline::NutritionTotals;

/// Diet preferences offered by the wizard. Each maps to a static rule slice
/// evaluated against a meal's aggregated nutrition totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietPlan {
    HighProteinHighCarbs,
    HighProteinLowCarbs,
    HighProteinLowSugar,
    HighCarbsLowSugar,
    LowCarbsLowSugar,
    HighProteinHighCarbsLowSugar,
    HighProteinLowCarbsLowSugar,
}

pub const ALL_DIET_PLANS: &[DietPlan] = &[
    DietPlan::HighProteinHighCarbs,
    DietPlan::HighProteinLowCarbs,
    DietPlan::HighProteinLowSugar,
    DietPlan::HighCarbsLowSugar,
    DietPlan::LowCarbsLowSugar,
    DietPlan::HighProteinHighCarbsLowSugar,
    DietPlan::HighProteinLowCarbsLowSugar,
];

/// Nutrient field a rule reads from the aggregated totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutrientField {
    Protein,
    Carbohydrates,
    Sugar,
}

impl NutrientField {
    pub fn value_in(&self, totals: &NutritionTotals) -> f64 {
        match self {
            NutrientField::Protein => totals.protein_g,
            NutrientField::Carbohydrates => totals.carbohydrates_total_g,
            NutrientField::Sugar => totals.sugar_g,
        }
    }
}

/// Strict-inequality threshold on a nutrient field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    MoreThan(f64),
    LessThan(f64),
}

impl Bound {
    pub fn allows(&self, value: f64) -> bool {
        match self {
            Bound::MoreThan(threshold) => value > *threshold,
            Bound::LessThan(threshold) => value < *threshold,
        }
    }
}

/// One field comparator of a diet plan's rule set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientRule {
    pub field: NutrientField,
    pub bound: Bound,
}

const HIGH_PROTEIN: NutrientRule = NutrientRule {
    field: NutrientField::Protein,
    bound: Bound::MoreThan(PROTEIN_HIGH_G),
};
const HIGH_CARBS: NutrientRule = NutrientRule {
    field: NutrientField::Carbohydrates,
    bound: Bound::MoreThan(CARBS_HIGH_G),
};
const LOW_CARBS: NutrientRule = NutrientRule {
    field: NutrientField::Carbohydrates,
    bound: Bound::LessThan(CARBS_LOW_G),
};
const LOW_SUGAR: NutrientRule = NutrientRule {
    field: NutrientField::Sugar,
    bound: Bound::LessThan(SUGAR_LOW_G),
};

impl DietPlan {
    /// Display label, as shown in the picker.
    pub fn label(&self) -> &'static str {
        match self {
            DietPlan::HighProteinHighCarbs => "High protein-high carbs",
            DietPlan::HighProteinLowCarbs => "High protein-low carbs",
            DietPlan::HighProteinLowSugar => "High protein-low sugar",
            DietPlan::HighCarbsLowSugar => "High carbs-low sugar",
            DietPlan::LowCarbsLowSugar => "Low carbs-low sugar",
            DietPlan::HighProteinHighCarbsLowSugar => "High protein-high carbs-low sugar",
            DietPlan::HighProteinLowCarbsLowSugar => "High protein-low carbs-low sugar",
        }
    }

    pub fn rules(&self) -> &'static [NutrientRule] {
        match self {
            DietPlan::HighProteinHighCarbs => &[HIGH_PROTEIN, HIGH_CARBS],
            DietPlan::HighProteinLowCarbs => &[HIGH_PROTEIN, LOW_CARBS],
            DietPlan::HighProteinLowSugar => &[HIGH_PROTEIN, LOW_SUGAR],
            DietPlan::HighCarbsLowSugar => &[HIGH_CARBS, LOW_SUGAR],
            DietPlan::LowCarbsLowSugar => &[LOW_CARBS, LOW_SUGAR],
            DietPlan::HighProteinHighCarbsLowSugar => &[HIGH_PROTEIN, HIGH_CARBS, LOW_SUGAR],
            DietPlan::HighProteinLowCarbsLowSugar => &[HIGH_PROTEIN, LOW_CARBS, LOW_SUGAR],
        }
    }

    /// True when the totals satisfy every rule. Short-circuits on the first
    /// failing field.
    pub fn matches(&self, totals: &NutritionTotals) -> bool {
        self.rules()
            .iter()
            .all(|rule| rule.bound.allows(rule.field.value_in(totals)))
    }
}

impl fmt::Display for DietPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(protein: f64, carbs: f64, sugar: f64) -> NutritionTotals {
        NutritionTotals {
            protein_g: protein,
            carbohydrates_total_g: carbs,
            sugar_g: sugar,
            fat_g: 0.0,
        }
    }

    #[test]
    fn test_high_protein_low_carbs_boundaries() {
        let plan = DietPlan::HighProteinLowCarbs;
        assert!(plan.matches(&totals(101.0, 299.0, 0.0)));
        assert!(!plan.matches(&totals(99.0, 299.0, 0.0)));
        // Strict inequalities: exactly-at-threshold fails.
        assert!(!plan.matches(&totals(100.0, 299.0, 0.0)));
        assert!(!plan.matches(&totals(101.0, 300.0, 0.0)));
    }

    #[test]
    fn test_three_rule_plan_requires_all() {
        let plan = DietPlan::HighProteinHighCarbsLowSugar;
        assert!(plan.matches(&totals(120.0, 400.0, 50.0)));
        assert!(!plan.matches(&totals(120.0, 400.0, 80.0)));
        assert!(!plan.matches(&totals(120.0, 300.0, 50.0)));
    }

    #[test]
    fn test_low_only_plan_ignores_protein() {
        let plan = DietPlan::LowCarbsLowSugar;
        assert!(plan.matches(&totals(0.0, 100.0, 10.0)));
        assert!(!plan.matches(&totals(0.0, 100.0, 75.0)));
    }

    #[test]
    fn test_every_plan_has_a_distinct_label() {
        let mut labels: Vec<&str> = ALL_DIET_PLANS.iter().map(|p| p.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), ALL_DIET_PLANS.len());
    }
}
