use thiserror::Error;

use crate::api_connection::connection::ApiConnectionError;

#[derive(Debug, Error)]
pub enum MealMatchError {
    #[error("Height cannot be zero or invalid")]
    InvalidHeight,

    #[error("Not signed in: pass --user or set MEAL_MATCH_USER")]
    NotSignedIn,

    #[error("API error: {0}")]
    Api(#[from] ApiConnectionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MealMatchError>;
