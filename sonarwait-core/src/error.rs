//! Core error types for `SonarWait`.

use thiserror::Error;

/// Core error type for `SonarWait` operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
