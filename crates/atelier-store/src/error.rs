use atelier_core::FailureKind;
use thiserror::Error;

/// Errors raised by a [`crate::KeyValueStore`] or the favorites store on top
/// of it.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure while reading or writing a key.
    #[error("I/O error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The favorites collection could not be encoded.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Any other backend failure (poisoned lock, rejected key).
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StorageError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        FailureKind::Storage
    }
}
