//! HTTP client with tracing and Basic authentication.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::api::TaskApi;
use crate::error::HttpError;
use crate::settings::Credentials;

/// User agent string for SonarWait.
const USER_AGENT: &str = concat!("SonarWait/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP client authenticating every request with the configured credentials.
///
/// The underlying client has no global timeout; each request chooses its
/// own.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    credentials: Credentials,
}

impl HttpClient {
    /// Creates a new HTTP client.
    pub fn new(credentials: Credentials) -> Result<Self, HttpError> {
        let inner = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { inner, credentials })
    }

    /// Returns the credentials sent with each request.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Performs an authenticated GET request and returns the body.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_text(
        &self,
        url: &str,
        timeout: Option<Duration>,
    ) -> Result<String, HttpError> {
        let parsed = Url::parse(url).map_err(|e| HttpError::InvalidUrl(format!("{url}: {e}")))?;
        debug!("GET request with auth");

        let mut request = self
            .inner
            .get(parsed)
            .basic_auth(&self.credentials.login, Some(&self.credentials.password));
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| classify(e, timeout))?;
        debug!(status = %response.status(), "Response received");

        response.text().await.map_err(|e| classify(e, timeout))
    }
}

fn classify(error: reqwest::Error, timeout: Option<Duration>) -> HttpError {
    match timeout {
        Some(timeout) if error.is_timeout() => HttpError::Timeout(timeout),
        _ => HttpError::Request(error),
    }
}

#[async_trait]
impl TaskApi for HttpClient {
    async fn get_text(&self, url: &str, timeout: Option<Duration>) -> Result<String, HttpError> {
        HttpClient::get_text(self, url, timeout).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_is_rejected_before_sending() {
        let client = HttpClient::new(Credentials::default()).unwrap();
        let err = client.get_text("not-a-valid-url", None).await.unwrap_err();
        assert!(matches!(err, HttpError::InvalidUrl(_)));
    }

    #[test]
    fn test_client_keeps_credentials() {
        let client = HttpClient::new(Credentials::new("ci", "pw")).unwrap();
        assert_eq!(client.credentials().login, "ci");
    }
}
