//! Background task types.
//!
//! The analysis server processes uploaded reports asynchronously. The
//! scanner log points at a status endpoint which answers with a
//! [`TaskEnvelope`]; each answer is reduced to a [`PollState`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CoreError;

// ============================================================================
// Task Status
// ============================================================================

/// Status of a background task as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    /// Queued, not started yet.
    Pending,
    /// Currently being processed.
    InProgress,
    /// Finished successfully.
    Success,
    /// Finished with a failure.
    Failed,
    /// Absent or not recognised.
    #[default]
    Unknown,
}

impl TaskStatus {
    /// Parses the raw status string sent by the server.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "PENDING" => Self::Pending,
            "IN_PROGRESS" => Self::InProgress,
            "SUCCESS" => Self::Success,
            "FAILED" => Self::Failed,
            _ => Self::Unknown,
        }
    }

    /// Returns the wire name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Returns true once the task can no longer change.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Server Response
// ============================================================================

/// Body of the task status endpoint (`api/ce/task?id=...`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskEnvelope {
    /// The task, if the server knows about it.
    #[serde(default)]
    pub task: Option<TaskInfo>,
}

/// A background task as described by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInfo {
    /// Task identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Task type (usually `REPORT`).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Key of the analysed component.
    #[serde(default)]
    pub component_key: Option<String>,
    /// Raw status string.
    #[serde(default)]
    pub status: Option<String>,
    /// Failure reason, only set for failed tasks.
    #[serde(default)]
    pub error_message: Option<String>,
}

impl TaskEnvelope {
    /// Parses a response body.
    pub fn from_json(body: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(body)?)
    }
}

impl TaskInfo {
    /// Returns the parsed status.
    pub fn status(&self) -> TaskStatus {
        self.status.as_deref().map_or(TaskStatus::Unknown, TaskStatus::parse)
    }

    /// Returns true if the object carries no information at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

// ============================================================================
// Poll State
// ============================================================================

/// State observed after polling the task endpoint once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PollState {
    /// Task queued.
    Pending,
    /// Task running.
    InProgress,
    /// Task finished successfully.
    Success,
    /// Task failed.
    Failed,
    /// Server answered with an empty body.
    NoResponse,
    /// Body did not describe a task.
    NoTask,
    /// Task reported a status this tool does not know.
    Unknown,
}

impl PollState {
    /// Returns true if polling should stop.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }

    /// Returns a short label for progress output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
            Self::NoResponse => "no response",
            Self::NoTask => "?",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl From<TaskStatus> for PollState {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Pending => Self::Pending,
            TaskStatus::InProgress => Self::InProgress,
            TaskStatus::Success => Self::Success,
            TaskStatus::Failed => Self::Failed,
            TaskStatus::Unknown => Self::Unknown,
        }
    }
}

impl std::fmt::Display for PollState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Analysis Status
// ============================================================================

/// Final outcome of waiting for an analysis to be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AnalysisStatus {
    /// The log did not reference a background task.
    NoBackgroundTask,
    /// The background task succeeded.
    Succeeded,
    /// The background task failed; details were saved to `server_log`.
    Failed {
        /// Where the server-side task log was written.
        server_log: PathBuf,
    },
}

impl AnalysisStatus {
    /// Creates a failed status for the given scanner log.
    pub fn failed(log_path: &Path) -> Self {
        Self::Failed {
            server_log: server_log_path(log_path),
        }
    }

    /// Returns true unless the background task failed.
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }

    /// Returns the status message; empty when there is nothing to report.
    pub fn message(&self) -> String {
        match self {
            Self::NoBackgroundTask | Self::Succeeded => String::new(),
            Self::Failed { server_log } => format!(
                "BACKGROUND TASK AS FAILED. CHECK SERVER : {}",
                server_log.display()
            ),
        }
    }
}

/// Returns `<log_path>.server`, where the server-side task log is stored.
pub fn server_log_path(log_path: &Path) -> PathBuf {
    let mut path = log_path.as_os_str().to_owned();
    path.push(".server");
    PathBuf::from(path)
}

// ============================================================================
// Tests
// ============================================================================
