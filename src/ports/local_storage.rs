//! Local Storage Port - Client-local string key/value persistence.
//!
//! Synchronous on purpose: session restore runs before anything else and
//! reads two small values.

/// Errors from a local storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize storage: {0}")]
    Serialization(String),

    #[error("Write rejected for key: {0}")]
    WriteRejected(String),
}

/// Port for a persistent string map.
pub trait LocalStorage: Send + Sync {
    /// Returns the stored value, or `None` when absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
