/// Core error types for Homefy
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Homefy
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Catalog payload could not be parsed
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
