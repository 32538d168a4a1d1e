//! pinhash - Crack the PIN behind a SHA-256 digest
//!
//! A terminal guessing game: a 3-digit PIN is drawn once, only its SHA-256
//! digest is shown, and the player submits guesses until one hashes to the
//! same digest. The session (PIN, digest, attempt count) survives restarts
//! until it is reset.

pub mod cli;
pub mod config;
pub mod digest;
pub mod error;
pub mod game;
pub mod logging;
pub mod session;
pub mod signal;
pub mod store;
pub mod tui;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use yansi::Paint;

use cli::{Cli, Commands, StatusArgs};
use config::Config;
use digest::{Digester, Sha256Digester};
use error::ExitCode;
use game::SessionGame;
use session::{Session, SessionManager};
use store::{FileStore, KeyValueStore, MemoryStore};
use tui::{App, Theme, TuiError};

/// Snapshot of the stored session printed by `pinhash status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// Where the session is stored; `None` for an in-memory store.
    pub store: Option<PathBuf>,
    /// Digest algorithm name.
    pub algorithm: String,
    /// Digest of the secret PIN, if a session exists.
    pub digest: Option<String>,
    /// Attempts made so far (0 without a session).
    pub attempts: u32,
}

impl StatusReport {
    /// Read the stored session without creating one.
    pub fn collect<S, D>(store: &S, digester: &D, location: Option<PathBuf>) -> Result<Self>
    where
        S: KeyValueStore + ?Sized,
        D: Digester + ?Sized,
    {
        let session = Session::load(store, digester).context("Failed to read session")?;
        Ok(Self {
            store: location,
            algorithm: digester.algorithm().to_string(),
            digest: session.as_ref().map(|s| s.digest_hex().to_string()),
            attempts: session.map_or(0, |s| s.attempt_count()),
        })
    }
}

/// Run the application for parsed CLI arguments.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(
        cli.verbose,
        cli.quiet,
        cli.log_file.as_deref(),
        runs_tui(&cli),
    )?;

    if cli.no_color {
        yansi::disable();
    }

    let mut config = Config::load(cli.config.as_deref());
    config.apply_cli(&cli);
    log::debug!("Effective config: {:?}", config);

    if cli.save_config {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::config_path()?,
        };
        config
            .save(&path)
            .with_context(|| format!("Failed to save config: {}", path.display()))?;
        log::info!("Saved config to {}", path.display());
    }

    match cli.command.clone().unwrap_or(Commands::Play) {
        Commands::Play => play(&cli, &config),
        Commands::Status(args) => status(&cli, &config, &args),
        Commands::Reset => reset(&cli, &config),
    }
}

/// Whether the command takes over the terminal with the game screen.
fn runs_tui(cli: &Cli) -> bool {
    matches!(cli.command, None | Some(Commands::Play))
}

fn store_path(config: &Config) -> Result<PathBuf> {
    match &config.store_path {
        Some(path) => Ok(path.clone()),
        None => FileStore::default_path(),
    }
}

fn open_store(cli: &Cli, config: &Config) -> Result<(Box<dyn KeyValueStore>, Option<PathBuf>)> {
    if cli.ephemeral {
        log::debug!("Using in-memory store");
        return Ok((Box::new(MemoryStore::new()), None));
    }
    let path = store_path(config)?;
    let store = FileStore::open(&path)
        .with_context(|| format!("Failed to open store: {}", path.display()))?;
    Ok((Box::new(store), Some(path)))
}

fn play(cli: &Cli, config: &Config) -> Result<ExitCode> {
    let (store, _) = open_store(cli, config)?;
    let handler = signal::install_handler()?;

    let mut app = App::new(SessionGame::boxed(store, Sha256Digester))
        .with_theme(Theme::from_arg(config.theme))
        .with_accessible(config.accessible);

    match tui::run_tui(&mut app, Some(handler.get_flag())) {
        Ok(()) => Ok(ExitCode::Success),
        Err(TuiError::Interrupted) => Ok(ExitCode::Interrupted),
        Err(e) => Err(e).context("TUI failed"),
    }
}

fn status(cli: &Cli, config: &Config, args: &StatusArgs) -> Result<ExitCode> {
    let (store, location) = open_store(cli, config)?;
    let report = StatusReport::collect(&*store, &Sha256Digester, location)?;

    let mut stdout = std::io::stdout().lock();
    if args.json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(ExitCode::Success);
    }

    match &report.digest {
        Some(digest) => {
            writeln!(stdout, "{} {}", "Digest:".bold(), digest.cyan())?;
            writeln!(stdout, "{} {}", "Attempts:".bold(), report.attempts)?;
        }
        None => writeln!(
            stdout,
            "{}",
            "No session yet. Run `pinhash` to start one.".dim()
        )?,
    }
    Ok(ExitCode::Success)
}

fn reset(cli: &Cli, config: &Config) -> Result<ExitCode> {
    if !cli.ephemeral {
        // Wipe before opening so a corrupted store can be recovered
        let path = store_path(config)?;
        FileStore::wipe(&path)
            .with_context(|| format!("Failed to wipe store: {}", path.display()))?;
    }

    let (store, _) = open_store(cli, config)?;
    let mut manager = SessionManager::new(store, Sha256Digester);
    let digest = manager.reset().context("Failed to start a new session")?;

    if !cli.quiet {
        writeln!(
            std::io::stdout(),
            "{} {}",
            "New digest:".bold(),
            digest.cyan()
        )?;
    }
    Ok(ExitCode::Success)
}
