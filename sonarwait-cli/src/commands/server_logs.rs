//! Server log commands - cleanup, print and locate.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::warn;

use crate::output::TextFormatter;
use crate::{Cli, ExitCode};

const INDENT: &str = "    ";

/// Arguments naming a server installation.
#[derive(Args)]
pub struct HomeArgs {
    /// Server home directory.
    pub home: PathBuf,
}

/// Runs the cleanup command.
///
/// A missing or unreadable log folder is not an error: there is simply
/// nothing to clean.
pub fn cleanup(args: &HomeArgs, cli: &Cli) -> Result<ExitCode> {
    let formatter = TextFormatter::new(!cli.no_color);
    let mut stdout = std::io::stdout();
    write!(stdout, "{INDENT}cleaning logs ... ")?;
    stdout.flush()?;

    if let Err(e) = sonarwait_store::cleanup_logs(&args.home) {
        warn!(error = %e, "Could not clean logs");
    }

    writeln!(stdout, "{}", formatter.ok())?;
    Ok(ExitCode::Success)
}

/// Runs the print-logs command.
pub fn print(args: &HomeArgs) -> Result<ExitCode> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{INDENT}print logs ... ")?;

    if let Err(e) = sonarwait_store::print_logs(&args.home, &mut stdout) {
        warn!(error = %e, "Could not print logs");
        writeln!(stdout)?;
    }
    Ok(ExitCode::Success)
}

/// Runs the log-path command.
pub fn log_path(args: &HomeArgs) -> Result<ExitCode> {
    let today = chrono::Local::now().date_naive();
    println!("{}", sonarwait_store::log_file(&args.home, today).display());
    Ok(ExitCode::Success)
}
