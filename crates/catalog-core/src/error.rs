//! Error Types

use thiserror::Error;

/// Failure to obtain the item collection.
///
/// Every variant is the same user-facing "load failure"; the split only
/// keeps the cause visible in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Failed to load data: {0}")]
    Request(String),

    #[error("Failed to load data (status {0})")]
    Status(u16),

    #[error("Failed to load data: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Malformed(err.to_string())
    }
}

/// Key-value store failure. Never shown to the user.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
