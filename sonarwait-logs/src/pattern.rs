//! Line patterns.
//!
//! All patterns here match at the start of a line only: a line matches when
//! the expression matches a prefix of it. The built-in patterns begin with
//! `.*`, so in practice they look for their keyword anywhere before the
//! first newline.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::LogError;

// ============================================================================
// Built-in Patterns
// ============================================================================

/// Lines logged at `ERROR` level.
pub(crate) static ERROR_RE: LazyLock<Regex> =
    LazyLock::new(|| anchored(".* ERROR .*").expect("Invalid regex"));

/// Lines logged at `WARN` level.
pub(crate) static WARN_RE: LazyLock<Regex> =
    LazyLock::new(|| anchored(".* WARN .*").expect("Invalid regex"));

/// Warnings the server always prints at startup.
pub(crate) static WARN_TO_IGNORE_RE: LazyLock<Regex> = LazyLock::new(|| {
    anchored(".*H2 database should.*|.*Starting search|.*Starting web").expect("Invalid regex")
});

fn anchored(source: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{source})"))
}

// ============================================================================
// Ignore Pattern
// ============================================================================

/// Caller-supplied expression suppressing otherwise bad lines.
///
/// Compiled once; matching uses the same prefix semantics as the built-in
/// patterns.
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    source: String,
    regex: Regex,
}

impl IgnorePattern {
    /// Compiles an ignore pattern.
    pub fn new(source: impl Into<String>) -> Result<Self, LogError> {
        let source = source.into();
        let regex = anchored(&source)?;
        Ok(Self { source, regex })
    }

    /// Returns the expression as written by the caller.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns true if the pattern matches a prefix of `line`.
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

impl std::str::FromStr for IgnorePattern {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Builds one pattern from a block of text holding one expression per line.
///
/// Empty lines are dropped and the rest are joined as alternatives, so
/// `"foo\n\nbar\n"` becomes `foo|bar`.
pub fn build_regexp(text: &str) -> Result<IgnorePattern, LogError> {
    let alternatives: Vec<&str> = text.split('\n').filter(|line| !line.is_empty()).collect();
    IgnorePattern::new(alternatives.join("|"))
}
