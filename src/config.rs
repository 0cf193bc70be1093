use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Dataset file; the built-in fruit list is used when unset.
    #[serde(default)]
    pub data_path: Option<String>,
    /// Log destination while the terminal UI owns the screen.
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = get_config_file_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "data_path" => &self.data_path,
            "log_file" => &self.log_file,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        Ok(value.clone().unwrap_or_default())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("data_path", self.data_path.clone().unwrap_or_default()),
            ("log_file", self.log_file.clone().unwrap_or_default()),
        ]
    }
}

pub fn get_config_file_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;

    Ok(config_dir.join("fruit-select").join("config.toml"))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not find config directory")]
    ConfigDirNotFound,

    #[error("Unknown configuration key '{0}'. Supported keys: data_path, log_file")]
    UnknownKey(String),

    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),
}
