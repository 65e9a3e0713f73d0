//! Background task polling.
//!
//! The server answers the task URL with `{"task": {"status": ...}}`. The
//! poller sleeps, asks, and repeats until the status is `SUCCESS` or
//! `FAILED`. Empty or unexpected answers are not errors: the server may
//! not know the task yet, so polling simply continues. There is no
//! backoff, and unless [`PollSettings::max_polls`] is set, no limit.

use std::path::{Path, PathBuf};

use sonarwait_core::{server_log_path, AnalysisStatus, PollState, TaskEnvelope};
use sonarwait_logs::{extract_report_url, read_lines};
use tracing::{debug, info, instrument, warn};

use crate::api::{Sleeper, TaskApi, TokioSleeper};
use crate::error::{FetchError, HttpError};
use crate::http::HttpClient;
use crate::settings::{Credentials, PollSettings};

// ============================================================================
// Task Poller
// ============================================================================

/// Waits for a background task and collects its server log.
#[derive(Debug)]
pub struct TaskPoller<A, S = TokioSleeper> {
    api: A,
    sleeper: S,
    settings: PollSettings,
}

impl TaskPoller<HttpClient, TokioSleeper> {
    /// Creates a poller talking to the server over HTTP.
    pub fn from_credentials(
        credentials: Credentials,
        settings: PollSettings,
    ) -> Result<Self, HttpError> {
        Ok(Self::new(HttpClient::new(credentials)?, TokioSleeper, settings))
    }
}

impl<A: TaskApi, S: Sleeper> TaskPoller<A, S> {
    /// Creates a poller from its parts.
    pub fn new(api: A, sleeper: S, settings: PollSettings) -> Self {
        Self {
            api,
            sleeper,
            settings,
        }
    }

    /// Returns the server API.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Returns the sleeper.
    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Returns the polling settings.
    pub fn settings(&self) -> &PollSettings {
        &self.settings
    }

    /// Sleeps one interval, then queries the task once.
    pub async fn poll_once(&self, url: &str) -> Result<PollState, FetchError> {
        self.sleeper.sleep(self.settings.interval).await;
        let body = self.api.get_text(url, self.settings.request_timeout).await?;
        Ok(parse_poll_state(&body))
    }

    /// Polls `url` until the task reaches `SUCCESS` or `FAILED`.
    ///
    /// Returns the terminal state. Transport failures end the wait with an
    /// error; so does hitting [`PollSettings::max_polls`].
    #[instrument(skip(self), fields(url = %url))]
    pub async fn wait_for_task(&self, url: &str) -> Result<PollState, FetchError> {
        let mut polls: u32 = 0;
        loop {
            let state = self.poll_once(url).await?;
            polls += 1;
            info!("Current status: {}", state);

            if state.is_terminal() {
                debug!(polls, state = %state, "Task finished");
                return Ok(state);
            }

            if self.settings.max_polls.is_some_and(|max| polls >= max) {
                return Err(FetchError::PollLimitReached {
                    url: url.to_string(),
                    polls,
                });
            }
        }
    }

    /// Downloads the server-side log of the task and stores it as
    /// `<log_path>.server`, replacing any previous content.
    ///
    /// Returns the path written.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch_server_log(
        &self,
        url: &str,
        log_path: &Path,
    ) -> Result<PathBuf, FetchError> {
        let log_url = server_log_url(url);
        let body = self
            .api
            .get_text(&log_url, Some(self.settings.log_fetch_timeout))
            .await?;

        let target = server_log_path(log_path);
        tokio::fs::write(&target, body.as_bytes())
            .await
            .map_err(|source| FetchError::Write {
                path: target.clone(),
                source,
            })?;

        debug!(path = %target.display(), bytes = body.len(), "Saved server log");
        Ok(target)
    }

    /// Waits until the analysis logged at `log_path` has been processed.
    ///
    /// A log that cannot be read, or that names no task URL, means there is
    /// nothing to wait for. Otherwise the task is polled to completion and
    /// its server log saved, whatever the outcome.
    #[instrument(skip(self), fields(log = %log_path.display()))]
    pub async fn analysis_finished(&self, log_path: &Path) -> Result<AnalysisStatus, FetchError> {
        info!("Read log: {}", log_path.display());

        let url = match read_lines(log_path) {
            Ok(lines) => extract_report_url(&lines),
            Err(e) => {
                warn!(error = %e, "Could not read log");
                None
            }
        };

        let Some(url) = url else {
            info!("No analysis in background");
            return Ok(AnalysisStatus::NoBackgroundTask);
        };
        info!("Analysis in background: {}", url);

        let state = self.wait_for_task(&url).await?;
        self.fetch_server_log(&url, log_path).await?;

        Ok(match state {
            PollState::Failed => AnalysisStatus::failed(log_path),
            _ => AnalysisStatus::Succeeded,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Reduces a task endpoint response body to a poll state.
pub fn parse_poll_state(body: &str) -> PollState {
    if body.trim().is_empty() {
        return PollState::NoResponse;
    }

    let envelope = match TaskEnvelope::from_json(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!(error = %e, "Unexpected task response");
            return PollState::NoTask;
        }
    };

    match envelope.task {
        Some(task) if !task.is_empty() => {
            if let Some(message) = &task.error_message {
                warn!(task = ?task.id, "Task error: {}", message);
            }
            let state = PollState::from(task.status());
            if state == PollState::Unknown {
                debug!(status = ?task.status, "Unrecognised task status");
            }
            state
        }
        _ => PollState::NoTask,
    }
}

/// Returns the URL of the server log for the task at `task_url`.
pub fn server_log_url(task_url: &str) -> String {
    task_url.replace("task?id", "logs?taskId")
}

// ============================================================================
// Tests
// ============================================================================
