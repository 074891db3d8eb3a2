use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::favorites::{FavoritesStore, SqliteStore};

/// Directory name under the platform data dir
pub const APP_DIR_NAME: &str = "dockref";
/// Database file holding the key-value store
pub const DB_FILE_NAME: &str = "dockref.db";
/// Log filter used when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "dockref=info,warn";

pub const ENV_DATA_DIR: &str = "DOCKREF_DATA_DIR";
pub const ENV_NO_PERSIST: &str = "DOCKREF_NO_PERSIST";

/// Runtime settings: defaults, then environment, then command-line overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Where the favorites database lives; `None` when no data dir could be found
    pub data_dir: Option<PathBuf>,
    /// When false, favorites live only for the current process
    pub persist: bool,
    /// Explicit log filter, overriding `RUST_LOG`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir().map(|d| d.join(APP_DIR_NAME)),
            persist: true,
            log_filter: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from defaults plus whatever `lookup` returns for the `DOCKREF_*` keys
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|d| !d.trim().is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(value) = lookup(ENV_NO_PERSIST) {
            if parse_flag(&value) {
                config.persist = false;
            }
        }

        config
    }

    /// Apply command-line overrides on top of the current values
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        no_persist: bool,
        log_level: Option<String>,
    ) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = Some(dir);
        }
        if no_persist {
            self.persist = false;
        }
        if log_level.is_some() {
            self.log_filter = log_level;
        }
        self
    }

    pub fn db_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|d| d.join(DB_FILE_NAME))
    }

    pub fn effective_log_filter(&self) -> Option<&str> {
        self.log_filter.as_deref()
    }

    /// Open the favorites store this configuration describes.
    ///
    /// A database that cannot be opened degrades to a store without
    /// persistence instead of failing.
    pub fn open_favorites_store(&self) -> FavoritesStore {
        if !self.persist {
            tracing::info!("Persistence disabled; favorites are kept in memory only");
            return FavoritesStore::in_memory();
        }

        let Some(db_path) = self.db_path() else {
            tracing::warn!("No data directory available; favorites will not be saved");
            return FavoritesStore::unavailable();
        };

        match SqliteStore::open(&db_path) {
            Ok(store) => {
                tracing::info!("Database path: {:?}", db_path);
                FavoritesStore::new(Some(Box::new(store)))
            }
            Err(e) => {
                tracing::warn!("Failed to open favorites database {:?}: {}", db_path, e);
                FavoritesStore::unavailable()
            }
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
