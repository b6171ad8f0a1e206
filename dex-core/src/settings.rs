//! Shared settings file (`~/.config/dex/settings.toml`).
//!
//! Every configurable value resolves through the same priority chain:
//! environment variable, then settings file, then built-in default. The
//! [`ConfigSource`] of each resolved value is kept so front ends can show
//! where a setting came from.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Contents of `settings.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub collection: CollectionSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_corpus_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

/// Canonical path to the settings file: `~/.config/dex/settings.toml`.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dex").join("settings.toml"))
}

impl Settings {
    /// Load the settings file, treating a missing or broken file as empty.
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            log::debug!("No config directory, using default settings");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::debug!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Write settings to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = toml::to_string_pretty(self)?;
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, serialized)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}

/// Where a configuration value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed on the command line.
    CommandLine,
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the settings file.
    SettingsFile,
    /// Built-in default.
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandLine => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::SettingsFile => write!(f, "settings file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A configuration value together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: ConfigSource,
}

/// Resolve a value from an already-read environment value, the settings file
/// and a default, in that order.
///
/// An environment value that fails to parse is skipped with a warning.
pub fn resolve<T: FromStr>(
    var: &'static str,
    env_value: Option<String>,
    file_value: Option<T>,
    default: T,
) -> Resolved<T> {
    if let Some(raw) = env_value {
        match raw.trim().parse::<T>() {
            Ok(value) => {
                return Resolved {
                    value,
                    source: ConfigSource::EnvVar(var),
                };
            }
            Err(_) => log::warn!("Ignoring invalid value for ${}: {:?}", var, raw),
        }
    }
    match file_value {
        Some(value) => Resolved {
            value,
            source: ConfigSource::SettingsFile,
        },
        None => Resolved {
            value: default,
            source: ConfigSource::Default,
        },
    }
}

/// [`resolve`] reading the environment variable `var` from the process.
pub fn resolve_env<T: FromStr>(var: &'static str, file_value: Option<T>, default: T) -> Resolved<T> {
    resolve(var, std::env::var(var).ok(), file_value, default)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
