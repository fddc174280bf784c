use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid request")]
    Invalid,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("A recipe with the same name and ingredients is already saved")]
    DuplicateRecipe,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error")]
    InternalServerError,
}
