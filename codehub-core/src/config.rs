//! Hub configuration (config.yaml)
//!
//! Resolution order for each setting: command-line override, then the config
//! file, then the built-in default. The config file itself is looked up at
//! `$CODEHUB_CONFIG` or in the platform config directory.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{HubError, Result};

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "CODEHUB_CONFIG";

const CONFIG_FILE: &str = "config.yaml";
const STATE_FILE: &str = "state.json";

/// Settings read from config.yaml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubConfig {
    /// Catalog file replacing the built-in catalog
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Where the current page is remembered
    #[serde(default)]
    pub state_file: Option<PathBuf>,
}

impl HubConfig {
    /// Load from `$CODEHUB_CONFIG` or the default location
    pub fn load() -> Result<Self> {
        let path = match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => PathBuf::from(path),
            None => Self::default_config_path()?,
        };
        Self::load_from_path(&path)
    }

    /// Load from a specific path; a missing file yields the defaults
    ///
    /// Relative paths inside the file are taken relative to the file's own
    /// directory.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| HubError::io(path, e))?;
        let mut config: HubConfig = serde_yaml_ng::from_str(&content).map_err(|e| {
            HubError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        if let Some(base) = path.parent() {
            config.catalog_path = config.catalog_path.map(|p| base.join(p));
            config.state_file = config.state_file.map(|p| base.join(p));
        }

        debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    /// Platform config directory for the hub
    pub fn config_dir() -> Result<PathBuf> {
        directories::ProjectDirs::from("dev", "codehub", "codehub")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| dirs::config_dir().map(|d| d.join("codehub")))
            .ok_or_else(|| HubError::Config("Could not determine config directory".to_string()))
    }

    fn default_config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Apply command-line overrides on top of the file values
    pub fn with_overrides(
        mut self,
        catalog_path: Option<PathBuf>,
        state_file: Option<PathBuf>,
    ) -> Self {
        if catalog_path.is_some() {
            self.catalog_path = catalog_path;
        }
        if state_file.is_some() {
            self.state_file = state_file;
        }
        self
    }

    /// Location of the current-page state file
    pub fn state_file_path(&self) -> Result<PathBuf> {
        match &self.state_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join(STATE_FILE)),
        }
    }

    /// The configured catalog, or the built-in one
    pub fn catalog(&self) -> Result<Cow<'static, Catalog>> {
        match &self.catalog_path {
            Some(path) => Ok(Cow::Owned(Catalog::load(path)?)),
            None => Ok(Cow::Borrowed(Catalog::builtin())),
        }
    }
}
