// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `SonarWait` Core
//!
//! Core types and models shared by the `SonarWait` crates.
//!
//! This crate provides the foundational data structures used when checking
//! the output of an analysis run:
//!
//! - Background task models (status, poll states, server responses)
//! - Log classification results
//! - Error types
//!
//! ## Key Types
//!
//! ### Background Tasks
//! - [`TaskStatus`] - Status reported by the server for a background task
//! - [`TaskEnvelope`] - Response body of the task status endpoint
//! - [`PollState`] - State observed after a single poll
//! - [`AnalysisStatus`] - Final outcome of waiting for an analysis
//!
//! ### Log Classification
//! - [`ClassificationResult`] - Bad lines plus error/warning counts
//! - [`LineSeverity`] - Whether a bad line is an error or a warning

pub mod error;
pub mod models;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Background tasks
    AnalysisStatus,
    PollState,
    TaskEnvelope,
    TaskInfo,
    TaskStatus,
    server_log_path,
    // Log classification
    ClassificationResult,
    LineSeverity,
};
