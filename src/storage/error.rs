use std::io;

use thiserror::Error;

/// Failures a storage backend or the persistence adapter can hit.
///
/// None of these escape [`crate::storage::Persistence`]; they are logged and the
/// session keeps running on its in-memory state.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] io::Error),

    #[error("quota exceeded writing '{key}' ({needed} bytes needed, quota {quota} bytes)")]
    QuotaExceeded { key: String, needed: usize, quota: usize },

    #[error("failed to serialize value for '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("corrupt value stored under '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;
