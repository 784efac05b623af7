use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::Result;
use crate::profile::store::{MealRecord, ProfileStore};

/// One user's document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default)]
    pub meals: Vec<MealRecord>,
}

type Documents = HashMap<String, UserDocument>;

/// Profile store backed by a single pretty-printed JSON file mapping user id
/// to document. The whole file is re-read per operation and rewritten on
/// save, which is plenty for a per-user preference list.
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn load(&self) -> Result<Documents> {
        if !self.path.exists() {
            return Ok(Documents::new());
        }
        let content = fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(Documents::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    async fn save(&self, documents: &Documents) -> Result<()> {
        let json = serde_json::to_string_pretty(documents)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for JsonProfileStore {
    async fn user_ids(&self) -> Result<Vec<String>> {
        let documents = self.load().await?;
        let mut ids: Vec<String> = documents.into_keys().collect();
        ids.sort();
        Ok(ids)
    }

    async fn preferences(&self, user_id: &str) -> Result<Vec<String>> {
        let documents = self.load().await?;
        Ok(documents
            .get(user_id)
            .map(|doc| doc.preferences.clone())
            .unwrap_or_default())
    }

    async fn save_preferences(&self, user_id: &str, meal_ids: &[String]) -> Result<()> {
        let mut documents = self.load().await?;
        documents.entry(user_id.to_string()).or_default().preferences = meal_ids.to_vec();
        self.save(&documents).await
    }

    async fn user_meals(&self, user_id: &str) -> Result<Vec<MealRecord>> {
        let documents = self.load().await?;
        Ok(documents
            .get(user_id)
            .map(|doc| doc.meals.clone())
            .unwrap_or_default())
    }
}
