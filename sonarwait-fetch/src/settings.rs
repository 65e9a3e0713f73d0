//! Connection and polling settings.

use std::time::Duration;

/// Environment variable holding the server login.
pub const LOGIN_ENV: &str = "sonar.login";

/// Environment variable holding the server password.
pub const PASSWORD_ENV: &str = "sonar.password";

/// Login and password used when none is configured.
const DEFAULT_CREDENTIAL: &str = "admin";

// ============================================================================
// Credentials
// ============================================================================

/// HTTP Basic credentials for the analysis server.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Login.
    pub login: String,
    /// Password.
    pub password: String,
}

impl Credentials {
    /// Creates credentials.
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    /// Reads `sonar.login` / `sonar.password`, falling back to `admin`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds credentials from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            login: lookup(LOGIN_ENV).unwrap_or_else(|| DEFAULT_CREDENTIAL.to_string()),
            password: lookup(PASSWORD_ENV).unwrap_or_else(|| DEFAULT_CREDENTIAL.to_string()),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_CREDENTIAL, DEFAULT_CREDENTIAL)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Poll Settings
// ============================================================================

/// Settings for the task polling loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSettings {
    /// Wait before each poll.
    pub interval: Duration,
    /// Timeout for each poll request. `None` waits as long as the server does.
    pub request_timeout: Option<Duration>,
    /// Timeout for the final server log request.
    pub log_fetch_timeout: Duration,
    /// Give up after this many polls. `None` polls until the task finishes.
    pub max_polls: Option<u32>,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            request_timeout: None,
            log_fetch_timeout: Duration::from_secs(10),
            max_polls: None,
        }
    }
}
