//! Wait command - background task of an analysis.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use sonarwait_fetch::TaskPoller;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{load_config, Cli, ExitCode, OutputFormat};

/// Arguments for wait command.
#[derive(Args)]
pub struct WaitArgs {
    /// Scanner log naming the background task.
    pub log: PathBuf,

    /// Give up after this many polls (default: wait forever).
    #[arg(long)]
    pub max_polls: Option<u32>,

    /// Timeout in seconds for each poll request (default: none).
    #[arg(long)]
    pub request_timeout: Option<u64>,
}

/// Runs the wait command.
pub async fn run(args: &WaitArgs, cli: &Cli) -> Result<ExitCode> {
    let config = load_config(cli)?;

    let mut settings = config.poll_settings();
    if let Some(max_polls) = args.max_polls {
        settings.max_polls = Some(max_polls);
    }
    if let Some(secs) = args.request_timeout {
        settings.request_timeout = Some(Duration::from_secs(secs));
    }

    let poller = TaskPoller::from_credentials(config.credentials(), settings)?;
    let status = poller.analysis_finished(&args.log).await?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.status(&status));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_status(&args.log, &status)?);
        }
    }

    Ok(if status.is_success() {
        ExitCode::Success
    } else {
        ExitCode::Failure
    })
}
