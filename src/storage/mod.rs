//! Durable key-value storage and the persistence adapter that mirrors
//! store slices into it.

mod file;
mod memory;
mod persist;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use persist::{keys, Persistence};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access storage key '{key}' at '{path}': {source}")]
    Io {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to lock storage directory '{path}': {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored value for '{key}' is not valid: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value storage, shaped like browser local storage.
pub trait KeyValueStorage: Send + Sync {
    /// Returns `None` when the key was never written or has been removed.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
