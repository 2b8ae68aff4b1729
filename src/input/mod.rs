//! Terminal input module (engine-facing).
//!
//! This module is independent of the rendering layer. It maps `crossterm`
//! key events into [`crate::types::GameAction`].

pub mod map;

pub use map::{handle_key_event, should_quit};
