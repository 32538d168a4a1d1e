//! TUI main loop.
//!
//! Takes over the terminal (raw mode, alternate screen, hidden cursor), runs
//! the event loop, and restores the terminal on exit, error or panic.
//!
//! # Event Loop
//!
//! 1. Check the shutdown flag and the quit request
//! 2. Render the current state
//! 3. Tick the app (publishes a pending digest after it has been drawn)
//! 4. Poll for a key with a frame-length timeout and handle it
//! 5. Limit frame rate to ~60 FPS

use std::io::{self, Stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use thiserror::Error;

use super::app::App;
use super::events::EventHandler;
use super::ui::render;

/// Frame rate limit: ~60 FPS.
const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Event poll timeout, matched to the frame duration.
const POLL_TIMEOUT: Duration = Duration::from_millis(16);

/// Error type for TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// I/O error from terminal operations.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    /// Event handling error.
    #[error("event error: {0}")]
    Event(#[from] super::events::EventError),

    /// The TUI was interrupted by a shutdown signal.
    #[error("interrupted by shutdown signal")]
    Interrupted,
}

/// Result type for TUI operations.
pub type TuiResult<T> = Result<T, TuiError>;

type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Run the game until the player quits.
///
/// # Errors
///
/// Returns `TuiError::Io`/`TuiError::Event` for terminal failures and
/// `TuiError::Interrupted` if `shutdown_flag` was set. The terminal is
/// restored in every case.
pub fn run_tui(app: &mut App, shutdown_flag: Option<Arc<AtomicBool>>) -> TuiResult<()> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let result = run_tui_inner(app, shutdown_flag.as_deref());

    let _ = panic::take_hook();
    result
}

fn run_tui_inner(app: &mut App, shutdown_flag: Option<&AtomicBool>) -> TuiResult<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, app, shutdown_flag);
    restore_terminal()?;

    if result.is_ok() {
        log::info!("TUI exited normally");
    }
    result
}

fn event_loop(
    terminal: &mut Terminal,
    app: &mut App,
    shutdown_flag: Option<&AtomicBool>,
) -> TuiResult<()> {
    let event_handler = EventHandler::new();
    let mut last_render = Instant::now();

    loop {
        if shutdown_flag.is_some_and(|flag| flag.load(Ordering::SeqCst)) {
            log::info!("Shutdown signal received, exiting TUI");
            return Err(TuiError::Interrupted);
        }

        if app.should_quit() {
            log::debug!("App requested quit");
            return Ok(());
        }

        terminal.draw(|frame| render(frame, app))?;

        app.tick();

        if let Some(action) = event_handler.poll(POLL_TIMEOUT)? {
            if !app.handle_action(action) {
                log::trace!("Action had no effect: {:?}", action);
            }
        }

        let elapsed = last_render.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
        last_render = Instant::now();
    }
}

fn setup_terminal() -> TuiResult<Terminal> {
    log::debug!("Setting up terminal for TUI");

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal() -> TuiResult<()> {
    let _ = terminal::disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    log::debug!("Terminal restored");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_error_display() {
        let tui_err = TuiError::Io(io::Error::other("test error"));
        assert!(tui_err.to_string().contains("terminal I/O error"));
        assert!(TuiError::Interrupted.to_string().contains("interrupted"));
    }

    #[test]
    fn test_frame_timing() {
        assert_eq!(FRAME_DURATION.as_millis(), 16);
        assert_eq!(POLL_TIMEOUT, FRAME_DURATION);
    }
}
