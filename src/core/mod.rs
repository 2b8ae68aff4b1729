//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules and state transitions.
//! It has zero dependencies on UI, timers, or I/O.

pub mod board;
pub mod engine;
pub mod pieces;
pub mod rng;

// Re-export commonly used types
pub use board::Board;
pub use engine::{ActivePiece, GameEngine, LockEvent};
pub use pieces::{base_shape, PieceShape};
pub use rng::SimpleRng;
