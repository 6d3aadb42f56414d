//! Configuration for tagpath
//!
//! Configuration lives in `tagpath.toml`. Lookup order:
//! 1. an explicit `--config` path
//! 2. `tagpath.toml` in the working directory
//! 3. `<config dir>/tagpath/config.toml` (`TAGPATH_CONFIG_DIR` overrides the directory)
//!
//! Missing files fall back to defaults; only an explicit path must exist.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::IngestOptions;
use crate::error::{Result, TagpathError};

pub use types::{
    CatalogConfig, GraphConfig, LinksConfig, StatsConfig, TagpathConfig, CONFIG_FORMAT_VERSION,
};

pub const LOCAL_CONFIG_FILE: &str = "tagpath.toml";
const CONFIG_DIR: &str = "tagpath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "TAGPATH_CONFIG_DIR";

impl TagpathConfig {
    /// Ingestion options derived from this configuration
    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            policy: self.catalog.ingest_policy,
            tag_aliases: self.tag_aliases.clone(),
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TagpathConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            return Err(TagpathError::invalid_value(
                "config version",
                format!(
                    "{} in {} (newest supported: {})",
                    config.version,
                    path.display(),
                    CONFIG_FORMAT_VERSION
                ),
            ));
        }
        if config.graph.default_tag_threshold == 0 {
            return Err(TagpathError::InvalidThreshold { value: 0 });
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TagpathError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Find and load configuration following the lookup order
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(TagpathError::invalid_value(
                    "config path",
                    format!("{} does not exist", path.display()),
                ));
            }
            debug!(path = %path.display(), "config_explicit");
            return Self::load(path);
        }

        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.exists() {
            debug!(path = %local.display(), "config_local");
            return Self::load(&local);
        }

        if let Some(global) = global_config_path() {
            if global.exists() {
                debug!(path = %global.display(), "config_global");
                return Self::load(&global);
            }
        }

        debug!("config_default");
        Ok(Self::default())
    }
}

/// Location of the per-user configuration file, if a config directory is known
pub fn global_config_path() -> Option<PathBuf> {
    let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        PathBuf::from(env_dir)
    } else {
        dirs::config_dir()?.join(CONFIG_DIR)
    };
    Some(config_dir.join(CONFIG_FILE))
}
