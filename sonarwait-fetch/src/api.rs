//! Seams between the poller and the outside world.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::HttpError;

/// Authenticated access to the analysis server.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// GETs `url` and returns the response body as text.
    ///
    /// The status code is not checked; callers interpret the body.
    async fn get_text(&self, url: &str, timeout: Option<Duration>) -> Result<String, HttpError>;
}

/// The pause between two polls.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Waits for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
