//! JSON output formatting.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use sonarwait_core::{AnalysisStatus, ClassificationResult};

// ============================================================================
// Output Types
// ============================================================================

/// JSON output of the analyse command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutput<'a> {
    pub log: String,
    pub errors: usize,
    pub warnings: usize,
    pub bad_lines: Vec<&'a str>,
}

/// JSON output of the wait command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusOutput<'a> {
    pub log: String,
    #[serde(flatten)]
    pub status: &'a AnalysisStatus,
    pub message: String,
}

// ============================================================================
// Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_string<T: Serialize>(&self, value: &T) -> Result<String> {
        Ok(if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        })
    }

    /// Formats a classification result.
    pub fn format_analysis(&self, log: &Path, result: &ClassificationResult) -> Result<String> {
        self.to_string(&AnalysisOutput {
            log: log.display().to_string(),
            errors: result.error_count,
            warnings: result.warning_count,
            bad_lines: result
                .bad_lines
                .iter()
                .map(|line| line.trim_end_matches(['\r', '\n']))
                .collect(),
        })
    }

    /// Formats the outcome of waiting for a background task.
    pub fn format_status(&self, log: &Path, status: &AnalysisStatus) -> Result<String> {
        self.to_string(&StatusOutput {
            log: log.display().to_string(),
            status,
            message: status.message(),
        })
    }
}
