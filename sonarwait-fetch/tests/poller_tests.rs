//! Task poller tests driven by a scripted server.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use sonarwait_core::{AnalysisStatus, PollState};
use sonarwait_fetch::{FetchError, HttpError, PollSettings, Sleeper, TaskApi, TaskPoller};
use tempfile::TempDir;

const TASK_URL: &str = "http://localhost:9000/api/ce/task?id=AYx1";
const LOGS_URL: &str = "http://localhost:9000/api/ce/logs?taskId=AYx1";

// ============================================================================
// Fakes
// ============================================================================

/// Answers requests from a fixed script and records what was asked.
#[derive(Default)]
struct ScriptedApi {
    responses: Mutex<VecDeque<Result<String, HttpError>>>,
    requests: Mutex<Vec<(String, Option<Duration>)>>,
}

impl ScriptedApi {
    fn new(bodies: &[&str]) -> Self {
        let api = Self::default();
        for body in bodies {
            api.push(Ok((*body).to_string()));
        }
        api
    }

    fn push(&self, response: Result<String, HttpError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    fn requests(&self) -> Vec<(String, Option<Duration>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskApi for ScriptedApi {
    async fn get_text(&self, url: &str, timeout: Option<Duration>) -> Result<String, HttpError> {
        self.requests.lock().unwrap().push((url.to_string(), timeout));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request to {url}"))
    }
}

/// Records sleeps without waiting.
#[derive(Default)]
struct RecordingSleeper {
    sleeps: Mutex<Vec<Duration>>,
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

fn poller(api: ScriptedApi) -> TaskPoller<ScriptedApi, RecordingSleeper> {
    TaskPoller::new(api, RecordingSleeper::default(), PollSettings::default())
}

fn scanner_log(dir: &TempDir, url_line: Option<&str>) -> std::path::PathBuf {
    let path = dir.path().join("scanner.log");
    let mut content = String::from("INFO: Analysis report uploaded in 45ms\n");
    if let Some(line) = url_line {
        content.push_str(line);
        content.push('\n');
    }
    content.push_str("INFO: EXECUTION SUCCESS\n");
    std::fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// wait_for_task
// ============================================================================

#[tokio::test]
async fn test_polls_until_success() {
    let api = ScriptedApi::new(&[
        "{}",
        r#"{"task":{"status":"PENDING"}}"#,
        r#"{"task":{"status":"SUCCESS"}}"#,
    ]);
    let poller = poller(api);

    let state = poller.wait_for_task(TASK_URL).await.unwrap();

    assert_eq!(state, PollState::Success);
    assert_eq!(poller.api().requests().len(), 3);
    assert_eq!(
        *poller.sleeper().sleeps.lock().unwrap(),
        vec![Duration::from_secs(1); 3]
    );
}

#[tokio::test]
async fn test_transient_states_keep_polling() {
    let api = ScriptedApi::new(&[
        "",
        "not json",
        r#"{"task":{"status":"IN_PROGRESS"}}"#,
        r#"{"task":{"status":"SOMETHING_NEW"}}"#,
        r#"{"task":{"status":"FAILED"}}"#,
    ]);
    let poller = poller(api);

    assert_eq!(poller.wait_for_task(TASK_URL).await.unwrap(), PollState::Failed);
    assert_eq!(poller.api().requests().len(), 5);
}

#[tokio::test]
async fn test_poll_requests_have_no_timeout_by_default() {
    let poller = poller(ScriptedApi::new(&[r#"{"task":{"status":"SUCCESS"}}"#]));
    poller.wait_for_task(TASK_URL).await.unwrap();

    assert_eq!(poller.api().requests(), vec![(TASK_URL.to_string(), None)]);
}

#[tokio::test]
async fn test_transport_error_propagates() {
    let api = ScriptedApi::new(&[r#"{"task":{"status":"PENDING"}}"#]);
    api.push(Err(HttpError::Timeout(Duration::from_secs(5))));
    let poller = poller(api);

    let err = poller.wait_for_task(TASK_URL).await.unwrap_err();
    assert!(matches!(err, FetchError::Http(HttpError::Timeout(_))));
}

#[tokio::test]
async fn test_poll_limit() {
    let api = ScriptedApi::new(&["", ""]);
    let settings = PollSettings {
        max_polls: Some(2),
        ..PollSettings::default()
    };
    let poller = TaskPoller::new(api, RecordingSleeper::default(), settings);

    let err = poller.wait_for_task(TASK_URL).await.unwrap_err();
    assert!(matches!(err, FetchError::PollLimitReached { polls: 2, .. }));
}

// ============================================================================
// analysis_finished
// ============================================================================

#[tokio::test]
async fn test_success_saves_server_log() {
    let dir = TempDir::new().unwrap();
    let log = scanner_log(
        &dir,
        Some(format!("INFO: More about the report processing at {TASK_URL}").as_str()),
    );
    std::fs::write(dir.path().join("scanner.log.server"), "stale content").unwrap();

    let api = ScriptedApi::new(&[
        "{}",
        r#"{"task":{"status":"PENDING"}}"#,
        r#"{"task":{"status":"SUCCESS"}}"#,
        "2024.01.01 INFO ce[AYx1] Executed task",
    ]);
    let poller = poller(api);

    let status = poller.analysis_finished(&log).await.unwrap();

    assert_eq!(status, AnalysisStatus::Succeeded);
    assert_eq!(status.message(), "");

    let requests = poller.api().requests();
    assert_eq!(requests.len(), 4);
    assert_eq!(
        requests[3],
        (LOGS_URL.to_string(), Some(Duration::from_secs(10)))
    );

    let saved = std::fs::read_to_string(dir.path().join("scanner.log.server")).unwrap();
    assert_eq!(saved, "2024.01.01 INFO ce[AYx1] Executed task");
}

#[tokio::test]
async fn test_failure_names_log_path() {
    let dir = TempDir::new().unwrap();
    let log = scanner_log(
        &dir,
        Some(format!("INFO  - More about the report processing at {TASK_URL}").as_str()),
    );

    let api = ScriptedApi::new(&[
        r#"{"task":{"status":"FAILED","errorMessage":"Unsupported language"}}"#,
        "server log",
    ]);
    let poller = poller(api);

    let status = poller.analysis_finished(&log).await.unwrap();

    assert!(!status.is_success());
    let message = status.message();
    assert!(!message.is_empty());
    assert!(message.contains(&log.display().to_string()));
    assert!(dir.path().join("scanner.log.server").exists());
}

#[tokio::test]
async fn test_no_url_means_no_requests() {
    let dir = TempDir::new().unwrap();
    let log = scanner_log(&dir, None);
    let poller = poller(ScriptedApi::default());

    let status = poller.analysis_finished(&log).await.unwrap();

    assert_eq!(status, AnalysisStatus::NoBackgroundTask);
    assert!(poller.api().requests().is_empty());
    assert!(poller.sleeper().sleeps.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_non_utf8_log_still_waits_for_task() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("scanner.log");
    let mut content = b"INFO: compiling caf\xe9.cpp\n".to_vec();
    content.extend_from_slice(
        format!("INFO: More about the report processing at {TASK_URL}\n").as_bytes(),
    );
    std::fs::write(&log, content).unwrap();

    let api = ScriptedApi::new(&[r#"{"task":{"status":"FAILED"}}"#, "server log"]);
    let poller = poller(api);

    let status = poller.analysis_finished(&log).await.unwrap();

    assert_eq!(status, AnalysisStatus::failed(&log));
    assert_eq!(poller.api().requests()[0].0, TASK_URL);
}

#[tokio::test]
async fn test_unreadable_log_means_nothing_to_wait_for() {
    let poller = poller(ScriptedApi::default());
    let status = poller
        .analysis_finished(Path::new("/nonexistent/scanner.log"))
        .await
        .unwrap();

    assert_eq!(status, AnalysisStatus::NoBackgroundTask);
    assert!(poller.api().requests().is_empty());
}

#[tokio::test]
async fn test_server_log_fetch_failure_propagates() {
    let dir = TempDir::new().unwrap();
    let log = scanner_log(
        &dir,
        Some(format!("INFO: More about the report processing at {TASK_URL}").as_str()),
    );

    let api = ScriptedApi::new(&[r#"{"task":{"status":"SUCCESS"}}"#]);
    api.push(Err(HttpError::Timeout(Duration::from_secs(10))));
    let poller = poller(api);

    let err = poller.analysis_finished(&log).await.unwrap_err();
    assert!(matches!(err, FetchError::Http(_)));
    assert!(!dir.path().join("scanner.log.server").exists());
}
