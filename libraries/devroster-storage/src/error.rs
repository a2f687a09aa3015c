/// Storage-specific errors
use thiserror::Error;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Stored value that does not map back onto the domain type
    #[error("Corrupt dev row {id}: {reason}")]
    CorruptRow { id: i64, reason: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Migration error
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StorageError {
    /// Create a corrupt row error
    pub fn corrupt(id: i64, reason: impl Into<String>) -> Self {
        Self::CorruptRow {
            id,
            reason: reason.into(),
        }
    }
}

impl From<StorageError> for devroster_core::DevError {
    fn from(err: StorageError) -> Self {
        devroster_core::DevError::storage(err.to_string())
    }
}
