use std::path::PathBuf;

use dex_api::{ApiConfig, CatalogService};
use dex_collection::{CollectionStore, FileStorage, default_data_dir};
use dex_core::settings::{Resolved, resolve_env};
use dex_core::{ConfigSource, Settings};

use crate::error::CliError;

pub(crate) const DEFAULT_PAGE_SIZE: usize = 20;

/// Everything a command needs from the global flags and the settings file.
pub(crate) struct AppContext {
    pub settings: Settings,
    pub quiet: bool,
    pub json: bool,
    data_dir_flag: Option<PathBuf>,
}

impl AppContext {
    pub(crate) fn new(settings: Settings, quiet: bool, json: bool, data_dir: Option<PathBuf>) -> Self {
        Self {
            settings,
            quiet,
            json,
            data_dir_flag: data_dir,
        }
    }

    /// Spinners are pointless when output is machine-readable.
    pub(crate) fn hide_progress(&self) -> bool {
        self.quiet || self.json
    }

    pub(crate) fn service(&self) -> Result<CatalogService, CliError> {
        Ok(CatalogService::from_config(&ApiConfig::load(&self.settings))?)
    }

    /// Single-threaded runtime: every request of a command runs on one thread.
    pub(crate) fn runtime(&self) -> Result<tokio::runtime::Runtime, CliError> {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| CliError::runtime(e.to_string()))
    }

    /// Priority: `--data-dir` > `$DEX_DATA_DIR` > settings file > platform default.
    pub(crate) fn data_dir(&self) -> Result<Resolved<PathBuf>, CliError> {
        if let Some(dir) = &self.data_dir_flag {
            return Ok(Resolved {
                value: dir.clone(),
                source: ConfigSource::CommandLine,
            });
        }
        let resolved = resolve_env(
            "DEX_DATA_DIR",
            self.settings.collection.data_dir.clone(),
            default_data_dir().unwrap_or_default(),
        );
        if resolved.value.as_os_str().is_empty() {
            return Err(CliError::config(
                "Could not determine data directory; pass --data-dir or set $DEX_DATA_DIR",
            ));
        }
        Ok(resolved)
    }

    pub(crate) fn page_size(&self) -> Resolved<usize> {
        resolve_env(
            "DEX_PAGE_SIZE",
            self.settings.display.page_size,
            DEFAULT_PAGE_SIZE,
        )
    }

    pub(crate) fn open_store(&self) -> Result<CollectionStore<FileStorage>, CliError> {
        let dir = self.data_dir()?;
        log::debug!("Collection directory: {} ({})", dir.value.display(), dir.source);
        Ok(CollectionStore::open(FileStorage::new(dir.value)))
    }
}
