use std::time::Duration;

use dex_core::Settings;
use dex_core::settings::{Resolved, resolve_env};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// How many names a search scans. Entries beyond this are unreachable by
/// search, matching the catalog's historical behavior.
pub const DEFAULT_SEARCH_CORPUS_LIMIT: usize = 1000;

/// Connection and query settings for the catalog client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    pub search_corpus_limit: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            search_corpus_limit: DEFAULT_SEARCH_CORPUS_LIMIT,
        }
    }
}

impl ApiConfig {
    /// Default settings pointed at a different server (used by tests and
    /// self-hosted mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn search_corpus_limit(mut self, limit: usize) -> Self {
        self.search_corpus_limit = limit;
        self
    }

    /// Load from environment variables and the settings file.
    ///
    /// Priority: env vars > settings file > defaults.
    pub fn load(settings: &Settings) -> Self {
        ResolvedApiConfig::resolve(settings).into_config()
    }
}

/// Each API setting with the source it was resolved from.
#[derive(Debug, Clone)]
pub struct ResolvedApiConfig {
    pub base_url: Resolved<String>,
    pub timeout_secs: Resolved<u64>,
    pub search_corpus_limit: Resolved<usize>,
}

impl ResolvedApiConfig {
    pub fn resolve(settings: &Settings) -> Self {
        Self {
            base_url: resolve_env(
                "DEX_API_BASE_URL",
                settings.api.base_url.clone(),
                DEFAULT_BASE_URL.to_string(),
            ),
            timeout_secs: resolve_env(
                "DEX_API_TIMEOUT_SECS",
                settings.api.timeout_secs,
                DEFAULT_TIMEOUT_SECS,
            ),
            search_corpus_limit: resolve_env(
                "DEX_SEARCH_CORPUS_LIMIT",
                settings.api.search_corpus_limit,
                DEFAULT_SEARCH_CORPUS_LIMIT,
            ),
        }
    }

    pub fn into_config(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.value.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(self.timeout_secs.value.max(1)),
            search_corpus_limit: self.search_corpus_limit.value,
        }
    }
}
