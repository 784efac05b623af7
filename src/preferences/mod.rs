pub mod constants;
pub mod cuisine;
pub mod diet;
pub mod metrics;
pub mod pipeline;

pub use cuisine::{Cuisine, CuisineSelection, ALL_CUISINES};
pub use diet::{DietPlan, NutrientRule, ALL_DIET_PLANS};
pub use metrics::{BmiCategory, BodyMetrics, Height, WeightUnit};
pub use pipeline::{
    apply_fat_bracket, combined_listings, filter_by_diet, FilteredMeal, MealSource,
    NutritionSource, NutritionTotals,
};
