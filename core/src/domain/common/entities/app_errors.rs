use thiserror::Error;

/// Failure to resolve a single ingredient from every available source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("lookup failed for '{ingredient}': {cause}")]
pub struct LookupError {
    pub ingredient: String,
    pub cause: String,
}

impl LookupError {
    pub fn new(ingredient: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            cause: cause.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("All {attempted} ingredient lookups failed (first failure: {first_cause})")]
    AllLookupsFailed {
        attempted: usize,
        first_cause: LookupError,
    },

    #[error("Cannot aggregate an empty ingredient set")]
    EmptyIngredientSet,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}
