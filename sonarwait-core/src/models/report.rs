//! Log classification types.

use serde::{Deserialize, Serialize};

/// Severity of a bad log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSeverity {
    /// Line logged at `ERROR` level.
    Error,
    /// Line logged at `WARN` level.
    Warning,
}

impl LineSeverity {
    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for LineSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of classifying a log.
///
/// `bad_lines` keeps the original line order. For results built from log
/// lines, `bad_lines.len() == error_count + warning_count`; the only
/// exception is [`ClassificationResult::read_failure`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Lines classified as errors or warnings, in input order.
    pub bad_lines: Vec<String>,
    /// Number of error lines.
    pub error_count: usize,
    /// Number of warning lines.
    pub warning_count: usize,
}

impl ClassificationResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Result standing in for a log that could not be read.
    ///
    /// Holds the error text as its only bad line and counts nothing, so the
    /// caller still sees a non-clean result.
    pub fn read_failure(error: impl std::fmt::Display) -> Self {
        Self {
            bad_lines: vec![format!("{error}\n")],
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Records a bad line.
    pub fn push(&mut self, line: impl Into<String>, severity: LineSeverity) {
        self.bad_lines.push(line.into());
        match severity {
            LineSeverity::Error => self.error_count += 1,
            LineSeverity::Warning => self.warning_count += 1,
        }
    }

    /// Returns true if no bad line was found.
    pub fn is_clean(&self) -> bool {
        self.bad_lines.is_empty()
    }

    /// Returns `error_count + warning_count`.
    pub fn total_count(&self) -> usize {
        self.error_count + self.warning_count
    }
}
