// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `SonarWait` Store
//!
//! Configuration and on-disk state for `SonarWait`.
//!
//! - **Config**: credentials, polling settings and ignore patterns, read
//!   from an optional JSON file and the `sonar.login` / `sonar.password`
//!   environment variables
//! - **Server logs**: locating, listing, printing and removing the `*.log`
//!   files of a server installation
//!
//! ## Usage
//!
//! ```ignore
//! use sonarwait_store::{cleanup_logs, log_file, Config};
//!
//! let config = Config::load()?.with_env_overrides();
//! let poller_settings = config.poll_settings();
//!
//! cleanup_logs(&sonar_home)?;
//! let today = log_file(&sonar_home, chrono::Local::now().date_naive());
//! ```

pub mod config;
pub mod error;
pub mod server_logs;

pub use config::{AnalysisConfig, Config, PollConfig, ServerConfig};
pub use error::StoreError;
pub use server_logs::{cleanup_logs, list_logs, log_file, log_folder, print_logs, LOG_FOLDER};
