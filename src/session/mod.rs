//! Session state for one round of the game.
//!
//! A session is the secret PIN, its digest and the number of guesses made so
//! far. It is created on first start, resumed from the key-value store on
//! later starts, and thrown away on reset.
//!
//! # Architecture
//!
//! * [`data`]: the [`Session`] model and PIN range constants.
//! * [`io`]: loading and saving the persisted record in a [`crate::store::KeyValueStore`].
//! * [`manager`]: [`SessionManager`], the sole owner of the active session.

pub mod data;
pub mod io;
pub mod manager;

pub use data::{is_valid_pin, Session, MAX_PIN, MIN_PIN, PIN_LENGTH};
pub use manager::SessionManager;
