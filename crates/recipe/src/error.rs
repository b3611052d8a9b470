use thiserror::Error;

pub type RecipeResult<T> = Result<T, RecipeError>;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Recipe not found: {0}")]
    NotFound(String),

    #[error("Search source unavailable: {0}")]
    SourceUnavailable(String),
}
