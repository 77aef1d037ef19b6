//! Storage error types.

use thiserror::Error;

/// Errors that can occur when reading or writing the store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read or write the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode or decode stored data.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A lock guarding the store was poisoned.
    #[error("Store lock poisoned: {0}")]
    Lock(String),
}
