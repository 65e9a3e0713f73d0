//! Log inspection error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or matching logs.
#[derive(Debug, Error)]
pub enum LogError {
    /// The ignore pattern is not a valid regular expression.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The log file could not be read.
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        /// Path of the log.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}
