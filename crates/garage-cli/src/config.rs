//! CLI configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use garage_core::limits::{
    DEFAULT_HOST, DEFAULT_MAX_QUERY_COMPLEXITY, DEFAULT_MAX_QUERY_DEPTH, DEFAULT_PORT,
};
use garage_graphql::SchemaLimits;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from editing config values
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown config key: {0}")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Get default config file path
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("garage")
        .join("config.toml")
}

/// Configuration for the server and CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub max_depth: usize,
    pub max_complexity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_depth: DEFAULT_MAX_QUERY_DEPTH,
            max_complexity: DEFAULT_MAX_QUERY_COMPLEXITY,
        }
    }
}

impl Config {
    /// Load from `path`, falling back to defaults when the file is missing
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Write to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["host", "port", "max_depth", "max_complexity"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "host" => Some(self.host.clone()),
            "port" => Some(self.port.to_string()),
            "max_depth" => Some(self.max_depth.to_string()),
            "max_complexity" => Some(self.max_complexity.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "host" => self.host = value.to_string(),
            "port" => self.port = value.parse().map_err(|_| invalid())?,
            "max_depth" => self.max_depth = value.parse().map_err(|_| invalid())?,
            "max_complexity" => self.max_complexity = value.parse().map_err(|_| invalid())?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn limits(&self) -> SchemaLimits {
        SchemaLimits {
            max_depth: self.max_depth,
            max_complexity: self.max_complexity,
        }
    }
}
