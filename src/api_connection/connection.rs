use dotenv::dotenv;
use reqwest::Client;
use std::env;
use std::error::Error;
use std::fmt;

use super::endpoints::{
    MealDetail, MealDetailResponse, MealListingResponse, NutritionItem, NutritionResponse,
    RawMeal, MEAL_DB_BASE_URL, NUTRITION_API_URL,
};

#[derive(Debug)]
pub enum ApiConnectionError {
    MissingApiKey(String),
    NetworkError(reqwest::Error),
    SerializationError(serde_json::Error),
    ApiError {
        status: reqwest::StatusCode,
        error_body: String,
    },
}

impl fmt::Display for ApiConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiConnectionError::MissingApiKey(key_name) => {
                write!(f, "API key not found in environment: {}", key_name)
            }
            ApiConnectionError::NetworkError(err) => write!(f, "Network error: {}", err),
            ApiConnectionError::SerializationError(err) => {
                write!(f, "Serialization error: {}", err)
            }
            ApiConnectionError::ApiError { status, error_body } => {
                write!(f, "API error {}: {}", status, error_body)
            }
        }
    }
}

impl Error for ApiConnectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiConnectionError::NetworkError(err) => Some(err),
            ApiConnectionError::SerializationError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiConnectionError {
    fn from(err: reqwest::Error) -> Self {
        ApiConnectionError::NetworkError(err)
    }
}

impl From<serde_json::Error> for ApiConnectionError {
    fn from(err: serde_json::Error) -> Self {
        ApiConnectionError::SerializationError(err)
    }
}

/// Client for the public meal database (listing by cuisine, detail by id).
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MealDbClient {
    pub fn new() -> Self {
        Self::with_base_url(MEAL_DB_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn meals_by_cuisine(
        &self,
        cuisine: &str,
    ) -> Result<Vec<RawMeal>, ApiConnectionError> {
        let url = format!("{}/filter.php", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("a", cuisine)])
            .send()
            .await?;

        if response.status().is_success() {
            let listing = response.json::<MealListingResponse>().await?;
            Ok(listing.meals.unwrap_or_default())
        } else {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            Err(ApiConnectionError::ApiError { status, error_body })
        }
    }

    pub async fn meal_detail(
        &self,
        meal_id: &str,
    ) -> Result<Option<MealDetail>, ApiConnectionError> {
        let url = format!("{}/lookup.php", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("i", meal_id)])
            .send()
            .await?;

        if response.status().is_success() {
            let detail = response.json::<MealDetailResponse>().await?;
            // An unknown id comes back as { "meals": null }.
            Ok(detail
                .meals
                .and_then(|mut meals| (!meals.is_empty()).then(|| meals.remove(0))))
        } else {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            Err(ApiConnectionError::ApiError { status, error_body })
        }
    }
}

/// Client for the nutrition-analysis service. The API credential is read from
/// the named environment variable on every call.
pub struct NutritionClient {
    client: Client,
    base_url: String,
    api_key_env_var: String,
}

impl NutritionClient {
    pub fn new(api_key_env_var: &str) -> Self {
        dotenv().ok();
        Self::with_base_url(NUTRITION_API_URL, api_key_env_var)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key_env_var: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key_env_var: api_key_env_var.to_string(),
        }
    }

    pub async fn analyze(
        &self,
        ingredient_query: &str,
    ) -> Result<Vec<NutritionItem>, ApiConnectionError> {
        let api_key = env::var(&self.api_key_env_var)
            .map_err(|_| ApiConnectionError::MissingApiKey(self.api_key_env_var.clone()))?;

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("query", ingredient_query)])
            .header("X-Api-Key", api_key)
            .send()
            .await?;

        if response.status().is_success() {
            let nutrition = response.json::<NutritionResponse>().await?;
            Ok(nutrition.items)
        } else {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            Err(ApiConnectionError::ApiError { status, error_body })
        }
    }
}
