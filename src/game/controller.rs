//! The play-session controller.
//!
//! [`Game`] owns the [`SessionManager`] and everything the player sees: the
//! published digest, the guess field, the feedback line and whether input is
//! enabled. It is free of terminal I/O so it can be driven directly in tests.

use crate::digest::Digester;
use crate::game::input::{filter_input, is_well_formed, strip_non_digits};
use crate::game::{Feedback, GameError, GameResult, Outcome, Phase};
use crate::session::SessionManager;
use crate::store::KeyValueStore;

const NOT_READY_MESSAGE: &str = "Please wait, hash not ready yet!";
const INVALID_SHAPE_MESSAGE: &str = "Please enter exactly 3 digits";
const INCORRECT_MESSAGE: &str = "Incorrect. Try again!";

/// Guess evaluator and UI state for one player.
pub struct Game<S, D> {
    manager: SessionManager<S, D>,
    phase: Phase,
    input: String,
    displayed_digest: Option<String>,
    feedback: Option<Feedback>,
    input_enabled: bool,
}

impl<S: KeyValueStore, D: Digester> Game<S, D> {
    /// Create a controller waiting for its first digest.
    pub fn new(manager: SessionManager<S, D>) -> Self {
        Self {
            manager,
            phase: Phase::AwaitingDigest,
            input: String::new(),
            displayed_digest: None,
            feedback: None,
            input_enabled: true,
        }
    }

    // ==================== Accessors ====================

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current (sanitized) content of the guess field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The digest on display, or `None` while it is still being generated.
    pub fn displayed_digest(&self) -> Option<&str> {
        self.displayed_digest.as_deref()
    }

    /// The feedback message, or `None` when hidden.
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Whether the guess field and the Check control are enabled.
    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Attempts made in the active session (0 before initialization).
    pub fn attempts(&self) -> u32 {
        self.manager.session().map_or(0, |s| s.attempt_count())
    }

    /// Name of the digest algorithm in use.
    pub fn algorithm(&self) -> &'static str {
        self.manager.algorithm()
    }

    /// The session manager.
    pub fn manager(&self) -> &SessionManager<S, D> {
        &self.manager
    }

    // ==================== Input Field ====================

    /// Replace the field content, sanitizing it.
    pub fn set_input(&mut self, raw: &str) {
        if self.input_enabled {
            self.input = filter_input(raw);
        }
    }

    /// Type one character into the field.
    pub fn push_char(&mut self, c: char) {
        let raw = format!("{}{c}", self.input);
        self.set_input(&raw);
    }

    /// Delete the last character of the field.
    pub fn pop_char(&mut self) {
        if self.input_enabled {
            self.input.pop();
        }
    }

    // ==================== Transitions ====================

    /// Initialize or resume the session and put its digest on display.
    ///
    /// Moves `AwaitingDigest` to `Ready`. In any other phase this only
    /// returns the digest already on display.
    pub fn publish_digest(&mut self) -> GameResult<String> {
        if self.phase != Phase::AwaitingDigest {
            return self.displayed_digest.clone().ok_or(GameError::NoSession);
        }

        let digest = self.manager.initialize()?;
        self.displayed_digest = Some(digest.clone());
        self.phase = Phase::Ready;
        Ok(digest)
    }

    /// Submit the content of the guess field.
    pub fn check(&mut self) -> GameResult<Outcome> {
        let raw = self.input.clone();
        self.submit_guess(&raw)
    }

    /// Evaluate a guess against the session digest.
    ///
    /// Only well-formed guesses count as attempts. A solved session refuses
    /// every guess without touching the attempt count or the feedback.
    pub fn submit_guess(&mut self, raw: &str) -> GameResult<Outcome> {
        match self.phase {
            Phase::Solved => return Ok(Outcome::AlreadySolved),
            Phase::AwaitingDigest => {
                self.feedback = Some(Feedback::error(NOT_READY_MESSAGE));
                return Ok(Outcome::NotReady);
            }
            Phase::Ready => {}
        }

        if !is_well_formed(raw) {
            self.feedback = Some(Feedback::error(INVALID_SHAPE_MESSAGE));
            return Ok(Outcome::InvalidShape);
        }
        let guess = strip_non_digits(raw);

        let attempts = self
            .manager
            .record_attempt()?
            .ok_or(GameError::NoSession)?;
        let hashed = self.manager.digest_of(&guess);
        let session = self.manager.session().ok_or(GameError::NoSession)?;

        if hashed == session.digest_hex() {
            log::info!("PIN found after {attempts} attempt(s)");
            self.feedback = Some(Feedback::success(format!(
                "Correct! The PIN was {}",
                session.secret_pin()
            )));
            self.input_enabled = false;
            self.phase = Phase::Solved;
            Ok(Outcome::Correct)
        } else {
            log::debug!("Attempt {attempts} incorrect");
            self.feedback = Some(Feedback::error(INCORRECT_MESSAGE));
            Ok(Outcome::Incorrect)
        }
    }

    /// Throw the session away and return to `AwaitingDigest`.
    ///
    /// The store is wiped immediately; the next [`Self::publish_digest`]
    /// draws the new PIN.
    pub fn reset_ui(&mut self) -> GameResult<()> {
        self.manager.clear()?;
        self.input.clear();
        self.feedback = None;
        self.input_enabled = true;
        self.displayed_digest = None;
        self.phase = Phase::AwaitingDigest;
        Ok(())
    }
}

impl<S, D> std::fmt::Debug for Game<S, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("input", &self.input)
            .field("displayed_digest", &self.displayed_digest)
            .field("feedback", &self.feedback)
            .field("input_enabled", &self.input_enabled)
            .finish_non_exhaustive()
    }
}
