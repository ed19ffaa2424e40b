//! Configuration management for valet.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory name under the platform config dir.
const CONFIG_DIR_NAME: &str = "valet";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `VALET_`, `__` between keys)
/// 2. TOML config file at `~/.config/valet/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Demo data configuration.
    pub demo: DemoConfig,
    /// Store configuration.
    pub store: StoreConfig,
    /// Display configuration.
    pub display: DisplayConfig,
}

/// Demo data configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Seed the store with demo data at startup.
    pub enabled: bool,
    /// Fixed seed for reproducible demo data.
    /// Unset means a fresh OS-provided seed on every run.
    pub seed: Option<u64>,
}

/// Store configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Validate link integrity right after the store is built.
    pub strict_assignments: bool,
}

/// Display configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// `strftime`-style format for arrival and departure times.
    pub time_format: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            seed: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_format: "%H:%M".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `VALET_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);
        Self::from_figment(Self::figment(&config_file))
    }

    /// The layered figment for a given config file.
    fn figment(config_file: &std::path::Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed("VALET_").split("__"))
    }

    /// Extract and validate a configuration from a figment.
    fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let format = &self.display.time_format;
        if format.trim().is_empty() {
            return Err(Error::config_validation("time_format must not be empty"));
        }
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::config_validation(format!(
                "invalid time_format: {format}"
            )));
        }
        Ok(())
    }
}
