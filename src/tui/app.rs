//! TUI application state management.
//!
//! # Overview
//!
//! [`App`] wraps the [`Game`] controller with what only the terminal needs:
//! the quit flag, the theme, accessibility settings and the error dialog.
//! Actions come in from [`super::events`], the state is drawn by
//! [`super::ui`].
//!
//! Store failures never corrupt the game: the failed operation leaves the
//! game where it was and the error is shown in a dialog until dismissed.
//!
//! # Example
//!
//! ```
//! use pinhash::digest::Sha256Digester;
//! use pinhash::game::{Phase, SessionGame};
//! use pinhash::store::MemoryStore;
//! use pinhash::tui::app::{Action, App};
//!
//! let mut app = App::new(SessionGame::boxed(MemoryStore::new(), Sha256Digester));
//!
//! app.tick();
//! assert_eq!(app.game().phase(), Phase::Ready);
//!
//! app.handle_action(Action::Input('1'));
//! app.handle_action(Action::Input('2'));
//! assert_eq!(app.game().input(), "12");
//! ```

use crate::game::{GameError, Outcome, SessionGame};

use super::theme::Theme;

/// Application mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// The game screen is active.
    #[default]
    Playing,
    /// The application is quitting.
    Quitting,
}

/// User action triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Type a character into the guess field.
    Input(char),
    /// Delete the last character of the guess field.
    Backspace,
    /// Submit the guess field.
    Check,
    /// Discard the session and draw a new PIN.
    Reset,
    /// Quit the application.
    Quit,
}

/// TUI application state.
///
/// Not thread-safe; lives on the thread that owns the terminal.
pub struct App {
    mode: AppMode,
    game: SessionGame,
    theme: Theme,
    accessible: bool,
    error_message: Option<String>,
    last_outcome: Option<Outcome>,
}

impl App {
    /// Create an app around a game that has not published its digest yet.
    #[must_use]
    pub fn new(game: SessionGame) -> Self {
        Self {
            mode: AppMode::Playing,
            game,
            theme: Theme::default(),
            accessible: false,
            error_message: None,
            last_outcome: None,
        }
    }

    /// Set the color theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable ASCII borders.
    #[must_use]
    pub fn with_accessible(mut self, accessible: bool) -> Self {
        self.accessible = accessible;
        self
    }

    // ==================== Accessors ====================

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// Check if the app should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.mode == AppMode::Quitting
    }

    /// The game controller.
    #[must_use]
    pub fn game(&self) -> &SessionGame {
        &self.game
    }

    /// Color theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Whether ASCII borders are in use.
    #[must_use]
    pub fn is_accessible(&self) -> bool {
        self.accessible
    }

    /// Error shown in the dialog, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Outcome of the most recent Check.
    #[must_use]
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Show an error dialog.
    pub fn set_error(&mut self, message: &str) {
        log::warn!("{message}");
        self.error_message = Some(message.to_string());
    }

    /// Hide the error dialog.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    fn report(&mut self, context: &str, err: &GameError) {
        self.set_error(&format!("{context}: {err}"));
    }

    // ==================== Event Loop Hooks ====================

    /// Publish the digest if the game is still waiting for it.
    ///
    /// Called once per loop iteration, after the frame showing the pending
    /// digest has been drawn.
    pub fn tick(&mut self) {
        if self.error_message.is_some() || self.game.displayed_digest().is_some() {
            return;
        }
        if let Err(e) = self.game.publish_digest() {
            self.report("Failed to start session", &e);
        }
    }

    /// Handle a user action and update state accordingly.
    ///
    /// Returns true if the action changed anything.
    pub fn handle_action(&mut self, action: Action) -> bool {
        log::trace!("Handling action: {:?} in mode {:?}", action, self.mode);

        if action == Action::Quit {
            self.mode = AppMode::Quitting;
            return true;
        }

        // The error dialog swallows every other key
        if self.error_message.is_some() {
            self.clear_error();
            return true;
        }

        match action {
            Action::Input(c) => {
                let before = self.game.input().len();
                self.game.push_char(c);
                self.game.input().len() != before
            }
            Action::Backspace => {
                let before = self.game.input().len();
                self.game.pop_char();
                self.game.input().len() != before
            }
            Action::Check => {
                if !self.game.is_input_enabled() {
                    return false;
                }
                match self.game.check() {
                    Ok(outcome) => {
                        self.last_outcome = Some(outcome);
                        true
                    }
                    Err(e) => {
                        self.report("Failed to record guess", &e);
                        true
                    }
                }
            }
            Action::Reset => {
                self.last_outcome = None;
                if let Err(e) = self.game.reset_ui() {
                    self.report("Failed to reset", &e);
                }
                true
            }
            Action::Quit => false,
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.mode)
            .field("game", &self.game)
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::{Digester, Sha256Digester};
    use crate::game::{FeedbackKind, Phase};
    use crate::store::{KeyValueStore, MemoryStore, StoreError, StoreResult};

    fn app_with_pin(pin: &str) -> App {
        let digest = Sha256Digester.digest(pin);
        let store = MemoryStore::with_entries([
            ("pin", pin),
            ("sha256", digest.as_str()),
            ("attempts", "0"),
        ]);
        App::new(SessionGame::boxed(store, Sha256Digester))
    }

    fn type_guess(app: &mut App, guess: &str) {
        for c in guess.chars() {
            app.handle_action(Action::Input(c));
        }
    }

    /// A store whose writes always fail.
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> StoreResult<Option<String>> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Io {
                path: "/read-only".into(),
                source: std::io::Error::other("read-only store"),
            })
        }

        fn clear(&mut self) -> StoreResult<()> {
            self.set("", "")
        }
    }

    #[test]
    fn test_app_new() {
        let app = app_with_pin("457");
        assert_eq!(app.mode(), AppMode::Playing);
        assert!(!app.should_quit());
        assert_eq!(app.game().phase(), Phase::AwaitingDigest);
        assert!(app.error_message().is_none());
    }

    #[test]
    fn test_check_before_tick_is_not_ready() {
        let mut app = app_with_pin("457");
        type_guess(&mut app, "457");
        app.handle_action(Action::Check);
        assert_eq!(app.last_outcome(), Some(Outcome::NotReady));
        assert_eq!(app.game().attempts(), 0);
    }

    #[test]
    fn test_play_to_solved() {
        let mut app = app_with_pin("457");
        app.tick();

        type_guess(&mut app, "456");
        app.handle_action(Action::Check);
        assert_eq!(app.last_outcome(), Some(Outcome::Incorrect));

        app.handle_action(Action::Backspace);
        type_guess(&mut app, "7");
        app.handle_action(Action::Check);
        assert_eq!(app.last_outcome(), Some(Outcome::Correct));
        assert_eq!(app.game().attempts(), 2);
        assert_eq!(app.game().feedback().unwrap().kind, FeedbackKind::Success);

        // Check is disabled once solved
        assert!(!app.handle_action(Action::Check));
        assert_eq!(app.game().attempts(), 2);
    }

    #[test]
    fn test_reset_then_tick_starts_new_session() {
        let mut app = app_with_pin("457");
        app.tick();
        type_guess(&mut app, "457");
        app.handle_action(Action::Check);

        app.handle_action(Action::Reset);
        assert_eq!(app.game().phase(), Phase::AwaitingDigest);
        assert!(app.last_outcome().is_none());

        app.tick();
        assert_eq!(app.game().phase(), Phase::Ready);
        assert_eq!(app.game().attempts(), 0);
        assert!(app.game().is_input_enabled());
    }

    #[test]
    fn test_quit() {
        let mut app = app_with_pin("457");
        assert!(app.handle_action(Action::Quit));
        assert!(app.should_quit());
    }

    #[test]
    fn test_store_failure_shows_error_and_keeps_state() {
        let digest = Sha256Digester.digest("457");
        let store = ReadOnlyStore(MemoryStore::with_entries([
            ("pin", "457"),
            ("sha256", digest.as_str()),
            ("attempts", "0"),
        ]));
        let mut app = App::new(SessionGame::boxed(store, Sha256Digester));

        // Resuming only reads, so publishing works
        app.tick();
        assert_eq!(app.game().phase(), Phase::Ready);

        type_guess(&mut app, "111");
        app.handle_action(Action::Check);
        let message = app.error_message().unwrap();
        assert!(message.contains("read-only store"));
        assert_eq!(app.game().phase(), Phase::Ready);
        assert_eq!(app.game().attempts(), 0);

        // Any key dismisses the dialog without acting
        app.handle_action(Action::Input('9'));
        assert!(app.error_message().is_none());
        assert_eq!(app.game().input(), "111");
    }

    #[test]
    fn test_failed_initialization_is_reported() {
        let store = ReadOnlyStore(MemoryStore::new());
        let mut app = App::new(SessionGame::boxed(store, Sha256Digester));

        app.tick();
        assert!(app.error_message().unwrap().contains("Failed to start session"));
        assert_eq!(app.game().phase(), Phase::AwaitingDigest);

        // The dialog blocks retries until any key dismisses it
        app.tick();
        app.handle_action(Action::Backspace);
        assert!(app.error_message().is_none());
    }
}
