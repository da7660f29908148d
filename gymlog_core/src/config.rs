//! Configuration file support for Gymlog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/gymlog/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the daily log files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Extension for daily log files; the payload is comma-delimited either way
    #[serde(default)]
    pub file_extension: FileExtension,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            file_extension: FileExtension::default(),
        }
    }
}

/// Extension used for daily log files
///
/// `xls` exists for spreadsheet apps that only open files by extension; the
/// contents are plain CSV regardless.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileExtension {
    #[default]
    Csv,
    Xls,
}

impl FileExtension {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileExtension::Csv => "csv",
            FileExtension::Xls => "xls",
        }
    }
}

impl FromStr for FileExtension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(FileExtension::Csv),
            "xls" => Ok(FileExtension::Xls),
            other => Err(Error::Config(format!(
                "Unknown file extension '{}' (expected 'csv' or 'xls')",
                other
            ))),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let documents = dirs::document_dir().unwrap_or_else(|| {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join("Documents")
    });
    documents.join("Gym Progress")
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".config")
        });
        base.join("gymlog").join("config.toml")
    }
}
