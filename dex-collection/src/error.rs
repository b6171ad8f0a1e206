/// Errors from a key-value storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage quota exceeded ({needed} bytes needed, {quota} allowed)")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// The stored bytes for a key are not a readable string.
    #[error("Stored value for '{key}' is unreadable: {reason}")]
    Malformed { key: String, reason: String },
}

impl StorageError {
    pub fn malformed(key: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Persistence failures inside the collection store.
///
/// These never reach store callers: corruption resets the collection and
/// write failures are logged while the in-memory set stays authoritative.
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("Stored collection is corrupted: {0}")]
    Corrupted(String),

    #[error("Failed to read stored collection: {0}")]
    Read(#[source] StorageError),

    #[error("Failed to persist collection: {0}")]
    Write(#[source] StorageError),

    #[error("Failed to serialize collection: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl CollectionError {
    pub fn corrupted(msg: impl Into<String>) -> Self {
        Self::Corrupted(msg.into())
    }
}
