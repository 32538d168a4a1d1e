//! Terminal User Interface module.
//!
//! The game screen, built with ratatui on the crossterm backend.
//!
//! - [`app`]: application state around the [`crate::game::Game`] controller
//! - [`events`]: key events to [`Action`]s
//! - [`ui`]: rendering
//! - [`run`]: terminal setup and the event loop
//! - [`theme`]: color palettes
//!
//! # Architecture
//!
//! Unidirectional data flow:
//! 1. Key events are captured from the terminal (crossterm)
//! 2. Events are translated to Actions
//! 3. Actions modify the App state
//! 4. The UI renders based on the current App state

pub mod app;
pub mod events;
pub mod run;
pub mod theme;
pub mod ui;

pub use app::{Action, App, AppMode};
pub use events::{key_to_action, EventError, EventHandler};
pub use run::{run_tui, TuiError, TuiResult};
pub use theme::Theme;
pub use ui::render;
