//! Error/warning classification of scanner and server logs.

use std::path::Path;

use sonarwait_core::{ClassificationResult, LineSeverity};
use tracing::{debug, warn};

use crate::error::LogError;
use crate::pattern::{ERROR_RE, IgnorePattern, WARN_RE, WARN_TO_IGNORE_RE};

// ============================================================================
// Classifier
// ============================================================================

/// Sorts log lines into errors, warnings and clean lines.
///
/// Errors take priority over warnings. The optional ignore pattern vetoes
/// both; the built-in startup-noise filter only applies to warnings.
#[derive(Debug, Clone, Default)]
pub struct LogClassifier {
    ignore: Option<IgnorePattern>,
}

impl LogClassifier {
    /// Creates a classifier without an ignore pattern.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a classifier that skips lines matching `ignore`.
    pub fn with_ignore(ignore: IgnorePattern) -> Self {
        Self {
            ignore: Some(ignore),
        }
    }

    /// Creates a classifier from an optional ignore pattern.
    pub fn from_ignore(ignore: Option<IgnorePattern>) -> Self {
        Self { ignore }
    }

    /// Returns the ignore pattern, if any.
    pub fn ignore(&self) -> Option<&IgnorePattern> {
        self.ignore.as_ref()
    }

    fn is_ignored(&self, line: &str) -> bool {
        self.ignore.as_ref().is_some_and(|p| p.is_match(line))
    }

    /// Returns true if `line` counts as an error.
    pub fn is_error(&self, line: &str) -> bool {
        ERROR_RE.is_match(line) && !self.is_ignored(line)
    }

    /// Returns true if `line` counts as a warning.
    pub fn is_warning(&self, line: &str) -> bool {
        WARN_RE.is_match(line) && !WARN_TO_IGNORE_RE.is_match(line) && !self.is_ignored(line)
    }

    /// Returns the severity of `line`, or `None` for a clean line.
    pub fn severity(&self, line: &str) -> Option<LineSeverity> {
        if self.is_error(line) {
            Some(LineSeverity::Error)
        } else if self.is_warning(line) {
            Some(LineSeverity::Warning)
        } else {
            None
        }
    }

    /// Classifies a sequence of lines.
    pub fn classify_lines<I, S>(&self, lines: I) -> ClassificationResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = ClassificationResult::new();
        for line in lines {
            let line = line.as_ref();
            if let Some(severity) = self.severity(line) {
                result.push(line, severity);
            }
        }
        result
    }

    /// Classifies the log at `path`.
    ///
    /// A log that cannot be read does not fail the call: the result then
    /// holds the read error as its single bad line, with zero counts.
    pub fn classify_file(&self, path: &Path) -> ClassificationResult {
        match read_lines(path) {
            Ok(lines) => {
                let result = self.classify_lines(&lines);
                debug!(
                    path = %path.display(),
                    lines = lines.len(),
                    errors = result.error_count,
                    warnings = result.warning_count,
                    "Classified log"
                );
                result
            }
            Err(e) => {
                warn!(error = %e, "Could not read log");
                ClassificationResult::read_failure(e)
            }
        }
    }
}

/// Reads a log, keeping each line's terminator.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD. `\r\n` and bare
/// `\r` terminators are normalised to `\n`.
pub fn read_lines(path: &Path) -> Result<Vec<String>, LogError> {
    let bytes = std::fs::read(path).map_err(|source| LogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_lines(&String::from_utf8_lossy(&bytes)))
}

fn split_lines(content: &str) -> Vec<String> {
    let normalised = content.replace("\r\n", "\n").replace('\r', "\n");
    normalised.split_inclusive('\n').map(str::to_owned).collect()
}

// ============================================================================
// Tests
// ============================================================================
