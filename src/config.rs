//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{ClientConfig, DEFAULT_BACKEND_URL};
use crate::reminder::runner::RunnerSettings;
use crate::reminder::{Jitter, RepeatPolicy, DEFAULT_MAX_JITTER_MS, DEFAULT_POLL_INTERVAL_SECS};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub reminders: RemindersConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Plant backend connection
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_request_timeout() -> u64 {
    10_000
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

/// Watering reminder timing
#[derive(Debug, Clone, Deserialize)]
pub struct RemindersConfig {
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    #[serde(default = "default_max_jitter")]
    pub max_jitter_ms: u64,

    #[serde(default)]
    pub repeat: RepeatPolicy,
}

fn default_poll_interval() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

fn default_max_jitter() -> u64 {
    DEFAULT_MAX_JITTER_MS
}

impl Default for RemindersConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
            max_jitter_ms: default_max_jitter(),
            repeat: RepeatPolicy::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("ecobloom").join("config.toml")),
            Some(PathBuf::from("/etc/ecobloom/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// An explicit path must load; otherwise search the default locations
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Backend overrides
        if let Some(url) = var("ECOBLOOM_BACKEND_URL") {
            self.backend.url = url;
        }
        if let Some(timeout) = var("ECOBLOOM_REQUEST_TIMEOUT_MS") {
            if let Ok(ms) = timeout.parse() {
                self.backend.request_timeout_ms = ms;
            }
        }

        // Reminder overrides
        if let Some(interval) = var("ECOBLOOM_POLL_INTERVAL_SECS") {
            if let Ok(secs) = interval.parse() {
                self.reminders.poll_interval_secs = secs;
            }
        }

        // Logging overrides
        if let Some(level) = var("ECOBLOOM_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("ECOBLOOM_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.backend.url.clone(),
            request_timeout_ms: self.backend.request_timeout_ms,
        }
    }

    pub fn runner_settings(&self) -> RunnerSettings {
        RunnerSettings {
            poll_interval: Duration::from_secs(self.reminders.poll_interval_secs.max(1)),
            jitter: Jitter::from_millis(self.reminders.max_jitter_ms),
            repeat: self.reminders.repeat,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# EcoBloom Configuration
#
# Environment variables override these settings:
# - ECOBLOOM_BACKEND_URL
# - ECOBLOOM_REQUEST_TIMEOUT_MS
# - ECOBLOOM_POLL_INTERVAL_SECS
# - ECOBLOOM_LOG_LEVEL
# - ECOBLOOM_LOG_FORMAT

[backend]
# Base URL of the plant backend
url = "http://localhost:5000"

# Per-request timeout (ms). Requests are never retried.
request_timeout_ms = 10000

[reminders]
# How often to scan for unwatered plants (seconds)
poll_interval_secs = 300

# Upper bound of the random delay before each prompt (ms)
max_jitter_ms = 5000

# "once_per_window": prompt once per plant, watering time and day
# "every_cycle": prompt on every scan until the plant is watered
repeat = "once_per_window"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty, json
format = "pretty"

# Optional log file path
# file = "/var/log/ecobloom.log"
"#
    .to_string()
}
