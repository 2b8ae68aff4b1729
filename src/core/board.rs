//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of boolean occupancy cells stored in a flat
//! row-major array (y * WIDTH + x) for cache locality.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom).

use crate::core::pieces::PieceShape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows, true = occupied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Check if position is occupied (out of bounds counts as not occupied)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(Self::index(x, y), Some(idx) if self.cells[idx])
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(Self::index(x, y), Some(idx) if !self.cells[idx])
    }

    /// Set cell occupancy at (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, occupied: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Collision rule: may `shape` occupy origin (x, y)?
    ///
    /// Valid iff every occupied cell of the shape maps inside the board
    /// onto an empty cell. This is the single authority consulted before
    /// any committed position or shape change; moves are atomic, so the
    /// whole shape moves or nothing does.
    pub fn is_valid_move(&self, x: i8, y: i8, shape: &PieceShape) -> bool {
        shape
            .occupied_cells()
            .all(|(dx, dy)| self.is_free(x + dx, y + dy))
    }

    /// Merge (lock-in): mark the shape's occupied cells on the board.
    ///
    /// Trusts the caller to have established the position is valid;
    /// the position is not re-checked here. Irreversible.
    pub fn merge(&mut self, x: i8, y: i8, shape: &PieceShape) {
        for (dx, dy) in shape.occupied_cells() {
            self.set(x + dx, y + dy, true);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell)
    }

    /// Remove one row: shift every row above it down by one and empty row 0.
    fn remove_row(&mut self, y: usize) {
        let width = BOARD_WIDTH as usize;
        for row in (1..=y).rev() {
            let src = (row - 1) * width;
            self.cells.copy_within(src..src + width, row * width);
        }
        self.cells[..width].fill(false);
    }

    /// Clear every full row, scanning from the bottom (y=19) to the top.
    ///
    /// After a removal the same index is re-checked, since the row that
    /// shifted into it may itself be full; simultaneous multi-line clears
    /// therefore resolve in a single pass. Returns the number of lines
    /// cleared.
    pub fn clear_full_lines(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = BOARD_HEIGHT as usize;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.remove_row(row);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
