//! TOML configuration
//!
//! ```toml
//! [storage]
//! scope = "folio"            # optional key prefix
//! locale_key = "language"
//! theme_key = "theme"
//! path = "prefs.json"        # omit for in-memory storage
//!
//! [log]
//! filter = "info,folio_i18n=debug"
//!
//! [route]
//! canonicalize_on_mount = false
//! ```
//!
//! Every section and field is optional.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use folio_i18n::LOCALE_STORAGE_KEY;
use folio_store::{FileStorage, MemoryStorage, Preferences, Storage};
use folio_theme::THEME_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ConfigError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    pub storage: StorageConfig,
    pub log: LogConfig,
    pub route: RouteConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Namespace prefix for stored keys.
    pub scope: Option<String>,
    pub locale_key: String,
    pub theme_key: String,
    /// JSON file backing the preferences. `None` keeps them in memory.
    pub path: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            scope: None,
            locale_key: LOCALE_STORAGE_KEY.to_string(),
            theme_key: THEME_STORAGE_KEY.to_string(),
            path: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directives. `RUST_LOG` takes priority.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouteConfig {
    /// Rewrite a missing or unknown locale segment right after mount.
    pub canonicalize_on_mount: bool,
}

impl FolioConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&src)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: FolioConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let storage = &self.storage;
        if storage.locale_key.is_empty() || storage.theme_key.is_empty() {
            return Err(ConfigError::Invalid(
                "storage keys must not be empty".to_string(),
            ));
        }
        if storage.locale_key == storage.theme_key {
            return Err(ConfigError::Invalid(format!(
                "locale and theme share the storage key `{}`",
                storage.locale_key
            )));
        }
        Ok(())
    }

    /// The storage medium named by `[storage] path`.
    pub fn open_storage(&self) -> Arc<dyn Storage> {
        match &self.storage.path {
            Some(path) => Arc::new(FileStorage::new(path)),
            None => Arc::new(MemoryStorage::new()),
        }
    }

    /// Preferences over [`FolioConfig::open_storage`], with the configured scope.
    pub fn preferences(&self) -> Preferences {
        let prefs = Preferences::new(self.open_storage());
        match &self.storage.scope {
            Some(scope) => prefs.with_scope(scope.clone()),
            None => prefs,
        }
    }
}
