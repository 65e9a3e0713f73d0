// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! SonarWait CLI - checks the outcome of an analysis run from a test harness.
//!
//! # Examples
//!
//! ```bash
//! # Wait until the server has processed the report named in the scanner log
//! sonarwait wait build/scanner.log
//!
//! # List errors and warnings, skipping known noise
//! sonarwait analyse build/scanner.log --ignore '.*Unable to resolve include.*'
//!
//! # Same for the server log of today
//! sonarwait analyse "$(sonarwait log-path /opt/sonarqube)"
//!
//! # Remove old server logs before a run, dump them after
//! sonarwait cleanup /opt/sonarqube
//! sonarwait print-logs /opt/sonarqube
//! ```

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use sonarwait_store::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{analyse, server_logs, wait};

// ============================================================================
// CLI Definition
// ============================================================================

/// SonarWait CLI - analysis run checks for integration tests.
#[derive(Parser)]
#[command(name = "sonarwait")]
#[command(about = "Waits for SonarQube background tasks and checks analysis logs")]
#[command(long_about = r#"
SonarWait supports integration tests that run an analysis against a local
SonarQube server.

Credentials are read from the sonar.login / sonar.password environment
variables (default admin/admin), overriding the optional config file.

Examples:
  sonarwait wait build/scanner.log          # Wait for the background task
  sonarwait analyse build/scanner.log       # List errors and warnings
  sonarwait cleanup /opt/sonarqube          # Delete server logs
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (defaults to the user config directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (no progress messages).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List the errors and warnings of a log.
    #[command(visible_alias = "a")]
    Analyse(analyse::AnalyseArgs),

    /// Wait for the background task referenced by a scanner log.
    #[command(visible_alias = "w")]
    Wait(wait::WaitArgs),

    /// Delete the *.log files of a server installation.
    Cleanup(server_logs::HomeArgs),

    /// Print the *.log files of a server installation.
    PrintLogs(server_logs::HomeArgs),

    /// Print the path of today's main server log.
    LogPath(server_logs::HomeArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Nothing to report.
    Success = 0,
    /// Bad log lines found, or the background task failed.
    Failure = 1,
    /// The command could not run.
    Error = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("sonarwait=debug,info")
    } else {
        EnvFilter::new("sonarwait=info,warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Loads the configuration file and applies environment overrides.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config.with_env_overrides())
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Analyse(args) => analyse::run(args, &cli),
        Commands::Wait(args) => wait::run(args, &cli).await,
        Commands::Cleanup(args) => server_logs::cleanup(args, &cli),
        Commands::PrintLogs(args) => server_logs::print(args),
        Commands::LogPath(args) => server_logs::log_path(args),
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {e:#}");
            }
            ExitCode::Error
        }
    };

    std::process::exit(code as i32);
}
