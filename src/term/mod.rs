//! Terminal presentation layer.
//!
//! `fb` holds a styled-character framebuffer, `game_view` projects the
//! engine state into one (pure, unit-testable), and `renderer` flushes
//! framebuffers to a real terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
