use thiserror::Error;

use dex_api::CatalogError;
use dex_core::SettingsError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Upstream catalog error
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Settings file could not be read or written
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Could not serialize output
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    /// Process exit status: 2 for "no such entry", 1 for everything else.
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            Self::Catalog(e) if e.is_not_found() => 2,
            _ => 1,
        }
    }

    /// Whether retrying the same command later might succeed.
    pub(crate) fn is_retryable(&self) -> bool {
        matches!(self, Self::Catalog(e) if e.is_retryable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_dir_is_a_settings_error() {
        let err: CliError = SettingsError::NoConfigDir.into();
        assert!(matches!(err, CliError::Settings(SettingsError::NoConfigDir)));
        assert_eq!(err.exit_code(), 1);
        assert!(!err.is_retryable());
        assert_eq!(
            err.to_string(),
            "Settings error: Could not determine config directory"
        );
    }
}
