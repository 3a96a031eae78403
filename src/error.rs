use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Recipe list not found: {0}")]
    ListNotFound(String),

    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;

/// Why the cached recipe set could not be used.
///
/// Every variant is recoverable: the caller falls back to the example recipes.
#[derive(Debug, Error)]
pub enum RecipeSourceError {
    #[error("no cached recipes")]
    Missing,

    #[error("cached recipes are malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("cached recipe list is empty")]
    Empty,
}
