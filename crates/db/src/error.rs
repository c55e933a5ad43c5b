use blog_core::error::CoreError;
use blog_core::validation::ValidationError;

/// Failure of a command or query `execute`.
#[derive(Debug, thiserror::Error)]
pub enum ExecuteError {
    /// A domain-level error (validation, not found).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store could not be read or written.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for ExecuteError {
    fn from(err: ValidationError) -> Self {
        Self::Core(CoreError::Validation(err))
    }
}
