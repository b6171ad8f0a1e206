/// Errors that can occur while talking to the upstream catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Network failure or timeout. Retryable.
    #[error("Catalog service unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// Upstream answered with an error status other than 404. Retryable.
    #[error("Server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("No entry named '{0}' in the catalog")]
    EntryNotFound(String),

    #[error("No category named '{0}' in the catalog")]
    CategoryNotFound(String),

    /// A resource URL whose trailing segment is not a numeric id.
    #[error("Malformed resource reference: {0}")]
    MalformedReference(String),

    /// The response body did not match the expected shape.
    #[error("Unexpected response from catalog: {0}")]
    Decode(String),

    #[error("Page limit must be at least 1")]
    InvalidLimit,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    pub fn malformed_reference(msg: impl Into<String>) -> Self {
        Self::MalformedReference(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the caller may reasonably retry the same request later.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Unavailable(_) => true,
            Self::ServerError { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Whether this error means the requested entry or category does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EntryNotFound(_) | Self::CategoryNotFound(_))
    }
}
