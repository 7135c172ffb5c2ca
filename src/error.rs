use thiserror::Error;

use crate::models::Weekday;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No replacement found for meal {index} on {day}")]
    NoReplacementFound { day: Weekday, index: usize },

    #[error("All meals for this diet are already planned on {0}")]
    AllMealsUsed(Weekday),

    #[error("Meal index {index} out of range for {day} ({len} meals)")]
    MealIndexOutOfRange {
        day: Weekday,
        index: usize,
        len: usize,
    },

    #[error("Meal not found: {0}")]
    MealNotFound(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
