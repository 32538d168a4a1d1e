//! Command-line interface definitions for pinhash.
//!
//! Global options (verbosity, color, store location, theme) apply to every
//! subcommand. Running without a subcommand starts a game.
//!
//! # Example
//!
//! ```bash
//! # Play (resumes the stored session if there is one)
//! pinhash
//!
//! # Play a throwaway round that is never written to disk
//! pinhash --ephemeral
//!
//! # Show the current digest and attempt count as JSON
//! pinhash status --json
//!
//! # Discard the stored session and draw a new PIN
//! pinhash reset
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Guess the 3-digit PIN behind a SHA-256 digest.
///
/// A PIN between 100 and 999 is drawn once and only its digest is shown.
/// Type guesses until one hashes to the same digest.
#[derive(Debug, Parser)]
#[command(name = "pinhash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Write log records to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Report errors as JSON on stderr
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Write the effective settings back to the configuration file
    #[arg(long, global = true)]
    pub save_config: bool,

    /// Path to the session store file
    ///
    /// If not specified, the configured or platform-specific path is used.
    #[arg(long, value_name = "PATH", global = true)]
    pub store: Option<PathBuf>,

    /// Keep the session in memory only
    #[arg(long, global = true, conflicts_with = "store")]
    pub ephemeral: bool,

    /// Color theme for the TUI
    #[arg(long, value_enum, global = true)]
    pub theme: Option<ThemeArg>,

    /// Use ASCII borders instead of box-drawing characters
    #[arg(long, global = true)]
    pub accessible: bool,

    /// Subcommand to execute (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Play interactively in the terminal
    Play,
    /// Show the stored digest and attempt count without starting a session
    Status(StatusArgs),
    /// Wipe the store and draw a new PIN
    Reset,
}

/// Arguments for the status subcommand.
#[derive(Debug, Clone, Args)]
pub struct StatusArgs {
    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,
}

/// TUI color theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeArg {
    /// Detect from the terminal environment
    #[default]
    Auto,
    /// Light background palette
    Light,
    /// Dark background palette
    Dark,
}
