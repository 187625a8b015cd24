//! Global configuration file (`~/.catalog/config.toml`).
//!
//! ```toml
//! [sources]
//! products = "https://example.com/api/products.json"
//! customers = "https://example.com/api/customers.json"
//!
//! [http]
//! timeout_secs = 30
//! user_agent = "catalog/0.1.0"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::config::HttpSettings;
use crate::core::CatalogError;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "CATALOG_CONFIG";

/// Settings shared by every catalog invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Named source URLs, so `catalog list products` works without the URL.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sources: BTreeMap<String, String>,

    /// HTTP client settings used for every fetch.
    #[serde(default)]
    pub http: HttpSettings,
}

impl GlobalConfig {
    /// Load from `path`, or from [`GlobalConfig::default_path`] when `None`.
    ///
    /// A missing file yields the default configuration.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };

        if path.exists() {
            Self::load_from(&path).await
        } else {
            debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load and parse the file at `path`.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = toml::from_str(&content).map_err(|e: toml::de::Error| {
            CatalogError::ConfigError {
                message: format!("{}: {}", path.display(), e.message()),
            }
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the config to `path` as TOML, creating parent directories.
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }

    /// Config file location: `$CATALOG_CONFIG` if set, else
    /// `~/.catalog/config.toml` (`%LOCALAPPDATA%\catalog\config.toml` on Windows).
    pub fn default_path() -> Result<PathBuf> {
        Self::default_path_from(std::env::var_os(CONFIG_PATH_ENV))
    }

    fn default_path_from(env_override: Option<OsString>) -> Result<PathBuf> {
        if let Some(path) = env_override.filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("catalog")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".catalog")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Add or replace a named source. Returns the previous URL, if any.
    pub fn add_source(&mut self, name: String, url: String) -> Option<String> {
        self.sources.insert(name, url)
    }

    /// Remove a named source. Returns whether it existed.
    pub fn remove_source(&mut self, name: &str) -> bool {
        self.sources.remove(name).is_some()
    }

    #[must_use]
    pub fn get_source(&self, name: &str) -> Option<&str> {
        self.sources.get(name).map(String::as_str)
    }

    /// Turn a command-line `SOURCE` argument into a URL.
    ///
    /// Configured names win; anything else containing `://` is taken as a URL.
    pub fn resolve_source(&self, source: &str) -> Result<String, CatalogError> {
        if let Some(url) = self.get_source(source) {
            return Ok(url.to_string());
        }
        if source.contains("://") {
            return Ok(source.to_string());
        }
        Err(CatalogError::SourceNotFound {
            name: source.to_string(),
        })
    }

    /// Starter configuration written by `catalog config init`.
    #[must_use]
    pub fn init_example() -> Self {
        let mut sources = BTreeMap::new();
        sources.insert(
            "products".to_string(),
            "https://example.com/api/products.json".to_string(),
        );
        sources.insert(
            "customers".to_string(),
            "https://example.com/api/customers.json".to_string(),
        );

        Self {
            sources,
            http: HttpSettings::default(),
        }
    }
}
