use tracing::warn;

use crate::error::Result;
use crate::profile::{MealRecord, ProfileStore};

pub const UNNAMED_MEAL: &str = "Unnamed Meal";

/// One gallery row: a meal some user uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub user_id: String,
    pub name: String,
    pub photo: Option<String>,
}

impl GalleryEntry {
    fn from_record(user_id: &str, record: MealRecord) -> Self {
        let name = record
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| UNNAMED_MEAL.to_string());
        GalleryEntry {
            user_id: user_id.to_string(),
            name,
            photo: record.photo,
        }
    }
}

/// Meals uploaded by all users, flattened into one list. A user whose meal
/// sub-collection cannot be read contributes nothing; the failure is logged
/// and the remaining users are still listed.
pub async fn all_user_meals<S: ProfileStore + ?Sized>(store: &S) -> Result<Vec<GalleryEntry>> {
    let mut entries = Vec::new();

    for user_id in store.user_ids().await? {
        let meals = match store.user_meals(&user_id).await {
            Ok(meals) => meals,
            Err(err) => {
                warn!("skipping meals for user {}: {}", user_id, err);
                continue;
            }
        };
        entries.extend(
            meals
                .into_iter()
                .map(|record| GalleryEntry::from_record(&user_id, record)),
        );
    }

    Ok(entries)
}
