//! Configuration management.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use sonarwait_fetch::settings::{LOGIN_ENV, PASSWORD_ENV};
use sonarwait_fetch::{Credentials, PollSettings};
use sonarwait_logs::{build_regexp, IgnorePattern};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server access.
    #[serde(default)]
    pub server: ServerConfig,
    /// Task polling.
    #[serde(default)]
    pub poll: PollConfig,
    /// Log analysis.
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Server credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Login for HTTP Basic authentication.
    #[serde(default = "default_credential")]
    pub login: String,
    /// Password for HTTP Basic authentication.
    #[serde(default = "default_credential")]
    pub password: String,
}

/// Task polling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Seconds to wait before each poll.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Timeout of each poll request; unset means none.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Timeout of the server log request.
    #[serde(default = "default_log_fetch_timeout_secs")]
    pub log_fetch_timeout_secs: u64,
    /// Maximum number of polls; unset means unlimited.
    #[serde(default)]
    pub max_polls: Option<u32>,
}

/// Log analysis settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Lines to ignore, one regular expression per line.
    #[serde(default)]
    pub ignore: Option<String>,
}

fn default_credential() -> String {
    "admin".to_string()
}

fn default_interval_secs() -> u64 {
    1
}

fn default_log_fetch_timeout_secs() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            login: default_credential(),
            password: default_credential(),
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            request_timeout_secs: None,
            log_fetch_timeout_secs: default_log_fetch_timeout_secs(),
            max_polls: None,
        }
    }
}

impl Config {
    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sonarwait")
            .join("config.json")
    }

    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, StoreError> {
        Self::load_from(&Self::default_path())
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Applies `sonar.login` / `sonar.password` from the environment.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies credential overrides from an arbitrary variable lookup.
    #[must_use]
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(login) = lookup(LOGIN_ENV) {
            self.server.login = login;
        }
        if let Some(password) = lookup(PASSWORD_ENV) {
            self.server.password = password;
        }
        self
    }

    /// Returns the server credentials.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.server.login, &self.server.password)
    }

    /// Returns the polling settings.
    pub fn poll_settings(&self) -> PollSettings {
        PollSettings {
            interval: Duration::from_secs(self.poll.interval_secs),
            request_timeout: self.poll.request_timeout_secs.map(Duration::from_secs),
            log_fetch_timeout: Duration::from_secs(self.poll.log_fetch_timeout_secs),
            max_polls: self.poll.max_polls,
        }
    }

    /// Compiles the configured ignore block, if any.
    pub fn ignore_pattern(&self) -> Result<Option<IgnorePattern>, StoreError> {
        Ok(self
            .analysis
            .ignore
            .as_deref()
            .map(build_regexp)
            .transpose()?)
    }
}
