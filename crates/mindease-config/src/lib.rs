//! Configuration loading for MindEase.
//! Reads mindease.toml from the current directory or the path in MINDEASE_CONFIG.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_ENV: &str = "MINDEASE_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "mindease.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("Invalid config {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },

    #[error("Invalid value for {var}: {value}")]
    Env { var: &'static str, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub sensors: SensorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host()       -> String { "127.0.0.1".to_string() }
fn default_port()       -> u16    { 3000 }
fn default_static_dir() -> String { "static".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), static_dir: default_static_dir() }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// JSON file holding an ordered array of `{trigger, response}` rules.
    /// The built-in table is used when unset.
    pub rules_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorConfig {
    #[serde(default = "default_device_id")]
    pub device_id: String,
    #[serde(default = "default_stream_interval")]
    pub stream_interval_secs: u64,
    #[serde(default = "default_history_points")]
    pub history_points: usize,
}

fn default_device_id()       -> String { "esp32-max30102-001".to_string() }
fn default_stream_interval() -> u64    { 3 }
fn default_history_points()  -> usize  { 20 }

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            device_id: default_device_id(),
            stream_interval_secs: default_stream_interval(),
            history_points: default_history_points(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; RUST_LOG takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String { "info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

mod tests;

impl Config {
    /// Load configuration.
    /// An explicit MINDEASE_CONFIG path must exist; a missing mindease.toml
    /// in the current directory falls back to defaults.
    /// MINDEASE_HOST and MINDEASE_PORT override the file.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE)?,
            Err(_) => {
                tracing::info!("No {} found, using default configuration", DEFAULT_CONFIG_FILE);
                Self::default()
            }
        };

        config.apply_env_overrides(
            std::env::var("MINDEASE_HOST").ok(),
            std::env::var("MINDEASE_PORT").ok(),
        )?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn apply_env_overrides(
        &mut self,
        host: Option<String>,
        port: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = host.filter(|h| !h.is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = port.filter(|p| !p.is_empty()) {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::Env { var: "MINDEASE_PORT", value: port.clone() })?;
        }
        Ok(())
    }
}
