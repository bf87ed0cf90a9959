use anyhow::{Context, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::Targets, fmt, prelude::*, registry};

use crate::cli::Cli;
use crate::time::LocalTime;

const LOG_TARGET: &str = "hostbuilder";
const DEFAULT_LOG_FILE: &str = "hostbuilder.log";

/// Initialize the logger based on command-line arguments.
///
/// Logs go to stderr so that `build` without `--output` can write the hosts
/// file to stdout.
pub fn init_logger(cli_args: &Cli) -> Result<()> {
    let console_fmt = fmt::layer()
        .with_target(false)
        .with_timer(LocalTime::CONSOLE)
        .with_writer(std::io::stderr);

    let console_level: LevelFilter = if cli_args.quiet {
        LevelFilter::ERROR
    } else {
        cli_args.log_level.into()
    };
    let console_filter = Targets::new()
        .with_default(LevelFilter::OFF)
        .with_target(LOG_TARGET, console_level);

    if !cli_args.log_file {
        registry()
            .with(console_fmt.with_filter(console_filter))
            .init();
        return Ok(());
    }

    let log_file_path = cli_args
        .log_file_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Append so that consecutive runs share one log
    let file = File::options()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .with_context(|| format!("open log file {}", log_file_path.display()))?;

    let file_fmt = fmt::layer()
        .with_ansi(false)
        .with_timer(LocalTime::FILE)
        .with_writer(Mutex::new(file));
    let file_filter = Targets::new()
        .with_default(LevelFilter::OFF)
        .with_target(LOG_TARGET, LevelFilter::from(cli_args.log_level));

    registry()
        .with(console_fmt.with_filter(console_filter))
        .with(file_fmt.with_filter(file_filter))
        .init();

    Ok(())
}
