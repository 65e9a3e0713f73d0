//! Text output formatting with colors.

use sonarwait_core::{AnalysisStatus, ClassificationResult, LineSeverity};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BRIGHT: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Formats a section header.
    pub fn header(&self, text: &str) -> String {
        self.paint(BRIGHT, text)
    }

    /// Formats the `OK` marker.
    pub fn ok(&self) -> String {
        self.paint(GREEN, "OK")
    }

    /// Formats one bad line; lines without severity are read failures.
    pub fn bad_line(&self, line: &str, severity: Option<LineSeverity>) -> String {
        let line = line.trim_end_matches(['\r', '\n']);
        match severity {
            Some(LineSeverity::Warning) => self.paint(YELLOW, line),
            Some(LineSeverity::Error) | None => self.paint(RED, line),
        }
    }

    /// Formats the error and warning counts.
    pub fn summary(&self, result: &ClassificationResult) -> String {
        if result.is_clean() {
            return self.ok();
        }

        let text = format!(
            "{} {}, {} {}",
            result.error_count,
            plural(result.error_count, "error"),
            result.warning_count,
            plural(result.warning_count, "warning"),
        );
        if result.error_count > 0 || result.total_count() == 0 {
            self.paint(RED, &text)
        } else {
            self.paint(YELLOW, &text)
        }
    }

    /// Formats the outcome of waiting for a background task.
    pub fn status(&self, status: &AnalysisStatus) -> String {
        match status {
            AnalysisStatus::NoBackgroundTask => {
                format!("No analysis in background ... {}", self.ok())
            }
            AnalysisStatus::Succeeded => format!("Background task ... {}", self.ok()),
            AnalysisStatus::Failed { .. } => self.paint(RED, &status.message()),
        }
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
