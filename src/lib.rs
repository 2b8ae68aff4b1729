//! Terminal falling-block puzzle game.
//!
//! `core` holds the pure game rules (board, pieces, engine), `input` maps
//! terminal key events to game actions, and `term` projects the game state
//! into a terminal framebuffer.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
