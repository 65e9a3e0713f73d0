//! Domain models for `SonarWait`.
//!
//! ## Submodules
//!
//! - [`task`] - Background task types (`TaskStatus`, `TaskEnvelope`, `PollState`)
//! - [`report`] - Log classification types (`ClassificationResult`, `LineSeverity`)

mod report;
mod task;

// Re-export everything at the models level
pub use report::{ClassificationResult, LineSeverity};
pub use task::{server_log_path, AnalysisStatus, PollState, TaskEnvelope, TaskInfo, TaskStatus};
