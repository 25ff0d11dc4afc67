use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use tracing::warn;

pub const DEFAULT_ARCHIVE_URL: &str =
    "https://github.com/rushiraj-gohil/data-cleanup-and-analysis/raw/refs/heads/main/cleaned_data.zip";

/// Where the data archive comes from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceConfig {
    Url(String),
    Path(String),
}

impl SourceConfig {
    /// Identifier used as the memoization key for loaded datasets.
    pub fn key(&self) -> &str {
        match self {
            SourceConfig::Url(url) => url,
            SourceConfig::Path(path) => path,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_source")]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
}

fn default_source() -> SourceConfig {
    SourceConfig::Url(DEFAULT_ARCHIVE_URL.to_string())
}

fn default_timeout() -> u64 {
    60
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            output: OutputFormat::default(),
            request_timeout_seconds: default_timeout(),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Like [`load_config`], but a missing file yields the built-in defaults.
pub fn load_config_or_default(path: &str) -> Result<AppConfig, ConfigError> {
    match load_config(path) {
        Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            warn!("Config {} not found, using defaults", path);
            Ok(AppConfig::default())
        }
        other => other,
    }
}
