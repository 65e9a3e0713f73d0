// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `SonarWait` Logs
//!
//! Scanner log inspection for `SonarWait`.
//!
//! - [`classifier::LogClassifier`] - Sorts log lines into errors and warnings
//! - [`pattern::IgnorePattern`] - Caller-supplied override for known noise
//! - [`report_url`] - Finds the background task URL printed by the scanner
//!
//! ## Example
//!
//! ```ignore
//! use sonarwait_logs::{build_regexp, LogClassifier};
//!
//! let ignore = build_regexp(".*Unable to resolve include.*\n.*deprecated.*\n")?;
//! let result = LogClassifier::with_ignore(ignore).classify_file(path);
//! for line in &result.bad_lines {
//!     print!("{line}");
//! }
//! ```

pub mod classifier;
pub mod error;
pub mod pattern;
pub mod report_url;

pub use classifier::{read_lines, LogClassifier};
pub use error::LogError;
pub use pattern::{build_regexp, IgnorePattern};
pub use report_url::{extract_report_url, REPORT_URL_MARKERS};
