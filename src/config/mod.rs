//! Configuration management for people-search
//!
//! Configuration is read from a TOML file and then overridden by command-line
//! arguments. Precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Candidate source configuration
    #[serde(default)]
    pub source: SourceConfig,

    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the candidate list comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Endpoint returning a JSON array of people
    #[serde(default = "default_url")]
    pub url: String,

    /// Read candidates from a local JSON file instead of the endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Additional attempts after a failed request
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
}

/// Display and matching configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Maximum number of suggestions shown under the input
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// Match the username as well as the name
    #[serde(default = "default_match_username")]
    pub match_username: bool,

    /// Enable colored output
    #[serde(default = "default_color_output")]
    pub color_output: bool,

    /// Output format for one-shot searches
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format options for non-interactive results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One card per person, the same layout as the interactive results panel
    Cards,

    /// ASCII table with name, email and phone columns
    Table,

    /// Compact JSON array (single line)
    Json,

    /// Pretty-printed JSON array
    JsonPretty,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Path to log file (None for stderr)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

// Default value functions
fn default_url() -> String {
    "https://jsonplaceholder.typicode.com/users".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_retry_attempts() -> u32 {
    0
}

fn default_max_suggestions() -> usize {
    5
}

fn default_match_username() -> bool {
    true
}

fn default_color_output() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Cards
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    true
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            file: None,
            timeout: default_timeout(),
            retry_attempts: default_retry_attempts(),
        }
    }
}

impl SourceConfig {
    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
            match_username: default_match_username(),
            color_output: default_color_output(),
            format: default_format(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_path: None,
            timestamps: default_log_timestamps(),
        }
    }
}

impl Config {
    /// Load configuration from a file, or the default location when `path`
    /// is `None`
    ///
    /// A missing file at the default location yields the default
    /// configuration. A missing file that was asked for explicitly is an
    /// error.
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_config_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::FileNotFound(path.display().to_string()).into());
            }
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".people-search")
            .join("config.toml")
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.source.file.is_none() && self.source.url.trim().is_empty() {
            return Err(invalid("source.url", &self.source.url));
        }
        if self.source.timeout == 0 {
            return Err(invalid("source.timeout", "0"));
        }
        if self.display.max_suggestions == 0 {
            return Err(invalid("display.max_suggestions", "0"));
        }
        Ok(())
    }

    /// Serialize the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Generic(format!("Failed to serialize config: {e}")).into())
    }
}

fn invalid(field: &str, value: &str) -> crate::error::PeopleSearchError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
    .into()
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
