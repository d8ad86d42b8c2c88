//! YAML configuration for the client.
//!
//! ```yaml
//! client:
//!   base_url: ${DORM_API_URL}
//!   timeout: 30
//! logging:
//!   level: debug
//! ```
//!
//! `$VAR` and `${VAR}` are replaced with environment values before parsing;
//! unset variables expand to an empty string.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default, rename = "logging")]
    pub logger: LoggerConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub base_url: String,
    /// Whole-exchange timeout in seconds. 0 disables it.
    #[serde(default)]
    pub timeout: u64,
}

impl ClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggerConfig {
    /// A `tracing` filter directive such as `info` or `dorm_core=debug`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

fn default_level() -> String {
    "info".to_string()
}

impl Config {
    /// Read and parse the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&raw)
    }

    /// Read [`DEFAULT_CONFIG_PATH`] relative to the working directory.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        let expanded = expand_env(raw, |name| std::env::var(name).ok());
        Ok(serde_yaml::from_str(&expanded)?)
    }
}

static ENV_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)").unwrap());

fn expand_env(raw: &str, lookup: impl Fn(&str) -> Option<String>) -> Cow<'_, str> {
    ENV_REF.replace_all(raw, |caps: &Captures| {
        let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        lookup(name).unwrap_or_default()
    })
}
