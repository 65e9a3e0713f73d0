//! Fetch error types.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Main Fetch Error
// ============================================================================

/// Error type for polling and server log retrieval.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The server log could not be written.
    #[error("Cannot write {}: {source}", path.display())]
    Write {
        /// Target file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The configured poll limit was hit before the task finished.
    #[error("Task at {url} still unfinished after {polls} polls")]
    PollLimitReached {
        /// Task URL.
        url: String,
        /// Number of polls performed.
        polls: u32,
    },
}

// ============================================================================
// HTTP Error
// ============================================================================

/// HTTP-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request error.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}
