/// Core error types for Devroster
use thiserror::Error;

/// Result type alias using `DevError`
pub type Result<T> = std::result::Result<T, DevError>;

/// Core error type for Devroster
#[derive(Error, Debug)]
pub enum DevError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Gender token outside the enumerated set
    #[error("Unknown gender: {0}")]
    InvalidGender(String),
}

impl DevError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
