pub mod connection;
pub mod endpoints;

pub use connection::{ApiConnectionError, MealDbClient, NutritionClient};
pub use endpoints::{MealDetail, NutritionItem, RawMeal, INGREDIENT_SLOTS};
