//! Analyse command - errors and warnings of a log.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use sonarwait_logs::{build_regexp, IgnorePattern, LogClassifier};
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{load_config, Cli, ExitCode, OutputFormat};

/// Arguments for analyse command.
#[derive(Args)]
pub struct AnalyseArgs {
    /// Log file to check.
    pub log: PathBuf,

    /// Regular expression for lines to ignore (repeatable).
    #[arg(long, short)]
    pub ignore: Vec<String>,

    /// File holding one ignore expression per line.
    #[arg(long)]
    pub ignore_file: Option<PathBuf>,
}

/// Runs the analyse command.
pub fn run(args: &AnalyseArgs, cli: &Cli) -> Result<ExitCode> {
    info!(log = %args.log.display(), "Analysing log");

    let config = load_config(cli)?;
    let from_file = args
        .ignore_file
        .as_deref()
        .map(read_ignore_file)
        .transpose()?;
    let ignore = ignore_pattern(
        config.analysis.ignore.as_deref(),
        from_file.as_deref(),
        &args.ignore,
    )?;

    let classifier = LogClassifier::from_ignore(ignore);
    let result = classifier.classify_file(&args.log);

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.header(&format!("Analyse log : {}", args.log.display())));
            for line in &result.bad_lines {
                println!("{}", formatter.bad_line(line, classifier.severity(line)));
            }
            println!("{}", formatter.summary(&result));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_analysis(&args.log, &result)?);
        }
    }

    Ok(if result.is_clean() {
        ExitCode::Success
    } else {
        ExitCode::Failure
    })
}

fn read_ignore_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read ignore file {}", path.display()))
}

/// Combines every ignore source into one pattern.
///
/// Returns `None` when no source was given at all.
pub fn ignore_pattern(
    config_block: Option<&str>,
    file_block: Option<&str>,
    expressions: &[String],
) -> Result<Option<IgnorePattern>> {
    let blocks: Vec<&str> = config_block
        .into_iter()
        .chain(file_block)
        .chain(expressions.iter().map(String::as_str))
        .collect();

    if blocks.is_empty() {
        return Ok(None);
    }

    let pattern = build_regexp(&blocks.join("\n")).context("Invalid ignore pattern")?;
    Ok(Some(pattern))
}
