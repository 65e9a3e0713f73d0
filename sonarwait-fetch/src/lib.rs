// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `SonarWait` Fetch
//!
//! Waits for the server to finish processing an analysis report.
//!
//! After uploading, the scanner logs a task URL. The [`poller::TaskPoller`]
//! picks it up, polls it at a fixed interval until the task succeeds or
//! fails, then downloads the server's own log for that task next to the
//! scanner log.
//!
//! ## Seams
//!
//! - [`api::TaskApi`] - One authenticated GET returning the body as text
//! - [`api::Sleeper`] - The wait between two polls
//!
//! Production code uses [`http::HttpClient`] and [`api::TokioSleeper`];
//! tests substitute scripted implementations.
//!
//! ## Example
//!
//! ```ignore
//! use sonarwait_fetch::{Credentials, PollSettings, TaskPoller};
//!
//! let poller = TaskPoller::from_credentials(Credentials::from_env(), PollSettings::default())?;
//! let status = poller.analysis_finished(Path::new("build/scanner.log")).await?;
//! if !status.is_success() {
//!     eprintln!("{}", status.message());
//! }
//! ```

pub mod api;
pub mod error;
pub mod http;
pub mod poller;
pub mod settings;

pub use api::{Sleeper, TaskApi, TokioSleeper};
pub use error::{FetchError, HttpError};
pub use http::HttpClient;
pub use poller::{parse_poll_state, server_log_url, TaskPoller};
pub use settings::{Credentials, PollSettings};
