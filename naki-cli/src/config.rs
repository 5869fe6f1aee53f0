use std::fs;
use std::path::{Path, PathBuf};

use mirai_event::DecoderConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, Result};

const CONFIG_DIR: &str = "naki";
const CONFIG_FILE: &str = "config.toml";

/// Persistent settings for the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Decoder tunables.
    pub decoder: DecoderConfig,

    /// Log filter used when neither `RUST_LOG` nor `--verbose`/`--quiet` is set.
    pub log_filter: Option<String>,

    /// Whether pretty output is colored.
    pub colored: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            decoder: DecoderConfig::default(),
            log_filter: None,
            colored: true,
        }
    }
}

impl AppConfig {
    /// Default location: `<config_dir>/naki/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
            .ok_or(AppError::NoConfigDir)
    }

    fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load the configuration. A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.decoder.validate().map_err(AppError::InvalidConfig)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.show()?)?;
        Ok(())
    }

    /// Overwrite the configuration file with the defaults.
    pub fn reset(path: Option<&Path>) -> Result<PathBuf> {
        let path = Self::resolve_path(path)?;
        Self::default().save(&path)?;
        Ok(path)
    }

    /// The configuration rendered as TOML.
    pub fn show(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
