pub mod json_store;
pub mod store;

pub use json_store::JsonProfileStore;
pub use store::{MealRecord, ProfileStore};
