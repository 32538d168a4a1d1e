//! Logging infrastructure for pinhash.
//!
//! Structured logging goes through the `log` facade with an `env_logger`
//! backend. The level comes from (in priority order):
//!
//! 1. `RUST_LOG` environment variable (if set)
//! 2. CLI flags: `--quiet` (error only) or `--verbose` (debug/trace)
//! 3. Default: info level
//!
//! The TUI owns the terminal while a game runs. Raw mode leaves stderr
//! records scattered across the game screen, and ratatui never repaints
//! cells it did not change. So when the TUI runs without `--log-file`,
//! logging is switched off entirely, `RUST_LOG` included. `--log-file`
//! sends records to a file in every mode.
//!
//! # Example
//!
//! ```rust,no_run
//! use pinhash::logging::init_logging;
//! use std::path::Path;
//!
//! // Default (info) level on stderr, for non-interactive commands
//! init_logging(0, false, None, false).unwrap();
//!
//! // Trace level into a file, for debugging a game in progress
//! init_logging(2, false, Some(Path::new("pinhash.log")), true).unwrap();
//! ```

use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Initialize the logging subsystem from CLI flags.
///
/// Only the first call in a process installs a logger; later calls are
/// no-ops so `run_app` can be invoked repeatedly from tests.
///
/// `tui` is set when the command takes over the terminal; without a log
/// file every record is then dropped.
///
/// # Errors
///
/// Fails if `log_file` cannot be opened for appending.
pub fn init_logging(verbose: u8, quiet: bool, log_file: Option<&Path>, tui: bool) -> Result<()> {
    let mut builder = Builder::new();

    let silenced = tui && log_file.is_none();
    let from_env = !silenced && env::var("RUST_LOG").is_ok();
    if from_env {
        builder.parse_default_env();
    } else {
        builder.filter_level(determine_level(verbose, quiet, silenced));
    }

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
        builder.write_style(env_logger::WriteStyle::Never);
    }

    configure_format(&mut builder, verbose);

    if builder.try_init().is_ok() {
        if from_env {
            log::debug!("Logging initialized from RUST_LOG");
        } else {
            log::debug!(
                "Logging initialized at level: {:?}",
                determine_level(verbose, quiet, silenced)
            );
        }
    }
    Ok(())
}

/// Map CLI flags to a level filter: silenced wins, then quiet, then
/// 0/1/2+ = info/debug/trace.
fn determine_level(verbose: u8, quiet: bool, silenced: bool) -> LevelFilter {
    if silenced {
        return LevelFilter::Off;
    }
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Debug builds get timestamps (and module paths when verbose); release
/// builds print level and message only.
fn configure_format(builder: &mut Builder, verbose: u8) {
    #[cfg(debug_assertions)]
    {
        builder.format(move |buf, record| {
            let timestamp = buf.timestamp_seconds();
            let level = record.level();
            let level_style = buf.default_level_style(level);

            if verbose >= 1 {
                writeln!(
                    buf,
                    "{} {level_style}{:<5}{level_style:#} [{}] {}",
                    timestamp,
                    level,
                    record.module_path().unwrap_or("unknown"),
                    record.args()
                )
            } else {
                writeln!(
                    buf,
                    "{} {level_style}{:<5}{level_style:#} {}",
                    timestamp,
                    level,
                    record.args()
                )
            }
        });
    }

    #[cfg(not(debug_assertions))]
    {
        let _ = verbose;
        builder.format(|buf, record| {
            let level = record.level();
            let level_style = buf.default_level_style(level);
            writeln!(
                buf,
                "{level_style}{:<5}{level_style:#} {}",
                level,
                record.args()
            )
        });
    }
}
