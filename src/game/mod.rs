//! Guess evaluation and play-session control.
//!
//! # Overview
//!
//! This module turns user input into game outcomes:
//! - [`input`]: live sanitization of the guess field
//! - [`controller`]: the [`Game`] controller and its phase machine
//!
//! # Phases
//!
//! ```text
//! AwaitingDigest --publish_digest--> Ready --Correct--> Solved
//!       ^                            |  ^
//!       |                            +--+ Incorrect / InvalidShape
//!       +------------ reset_ui (from any phase)
//! ```
//!
//! # Example
//!
//! ```
//! use pinhash::digest::{Digester, Sha256Digester};
//! use pinhash::game::{Game, Outcome};
//! use pinhash::session::SessionManager;
//! use pinhash::store::MemoryStore;
//!
//! let digest = Sha256Digester.digest("457");
//! let store = MemoryStore::with_entries([
//!     ("pin", "457"),
//!     ("sha256", digest.as_str()),
//!     ("attempts", "0"),
//! ]);
//! let mut game = Game::new(SessionManager::new(store, Sha256Digester));
//!
//! assert_eq!(game.submit_guess("457").unwrap(), Outcome::NotReady);
//! game.publish_digest().unwrap();
//! assert_eq!(game.submit_guess("456").unwrap(), Outcome::Incorrect);
//! assert_eq!(game.submit_guess("457").unwrap(), Outcome::Correct);
//! assert_eq!(game.attempts(), 2);
//! ```

pub mod controller;
pub mod input;

use thiserror::Error;

use crate::digest::Digester;
use crate::session::SessionManager;
use crate::store::{KeyValueStore, StoreError};

pub use controller::Game;
pub use input::{filter_input, is_well_formed, strip_non_digits};

/// Where the play session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// The digest has not been published yet; guesses are refused.
    #[default]
    AwaitingDigest,
    /// The digest is displayed and guesses are evaluated.
    Ready,
    /// The PIN was found; input stays disabled until reset.
    Solved,
}

/// Result of submitting a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The digest is not published yet.
    NotReady,
    /// The guess is not exactly 3 digits after stripping non-digits.
    InvalidShape,
    /// The guess digest matches; the session is now solved.
    Correct,
    /// The guess digest does not match.
    Incorrect,
    /// The session was already solved; nothing changed.
    AlreadySolved,
}

/// Visual class of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// The guess was correct.
    Success,
    /// Anything the player has to fix or retry.
    Error,
}

/// A message shown below the guess field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Text shown to the player.
    pub message: String,
    /// Success or error styling.
    pub kind: FeedbackKind,
}

impl Feedback {
    /// Create a success message.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: FeedbackKind::Success,
        }
    }

    /// Create an error message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: FeedbackKind::Error,
        }
    }
}

/// Error type for game operations.
#[derive(Debug, Error)]
pub enum GameError {
    /// The key-value store failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// A guess was evaluated while no session was active.
    #[error("no active session")]
    NoSession,
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// A game over type-erased store and digester, as driven by the TUI.
pub type SessionGame = Game<Box<dyn KeyValueStore>, Box<dyn Digester>>;

impl SessionGame {
    /// Box `store` and `digester` and build a game waiting for its digest.
    pub fn boxed(
        store: impl KeyValueStore + 'static,
        digester: impl Digester + 'static,
    ) -> Self {
        let store: Box<dyn KeyValueStore> = Box::new(store);
        let digester: Box<dyn Digester> = Box::new(digester);
        Game::new(SessionManager::new(store, digester))
    }
}
