//! Pieces module - tetromino shape matrices and the rotation transform
//!
//! A shape is a small occupancy matrix indexed `[column][row]`, so cell
//! (i, j) of a shape placed at board position (x, y) lands on board cell
//! (x + i, y + j). Rotation transposes the bounding box: the I piece flips
//! between 4x1 and 1x4. Every rotation is derived fresh from the current
//! matrix; nothing is cached per kind.

use crate::types::PieceKind;

/// Largest bounding-box side over all kinds and rotations.
pub const MAX_SHAPE_DIM: usize = 4;

/// Occupancy matrix of one rotation of one piece.
///
/// Backed by a fixed 4x4 array so shapes stay `Copy`; `width`/`height`
/// give the logical bounding box of the current rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceShape {
    width: usize,
    height: usize,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl PieceShape {
    /// Build a shape from visual rows, `'X'` marking occupied cells.
    fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        debug_assert!(width <= MAX_SHAPE_DIM && height <= MAX_SHAPE_DIM);

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (j, row) in rows.iter().enumerate() {
            for (i, byte) in row.bytes().enumerate() {
                cells[i][j] = byte == b'X';
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Bounding-box width (extent along x).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Bounding-box height (extent along y).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether cell (i, j) of the bounding box is occupied.
    pub fn filled(&self, i: usize, j: usize) -> bool {
        self.cells[i][j]
    }

    /// Iterate the occupied cells as (i, j) bounding-box offsets.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.width).flat_map(move |i| {
            (0..self.height)
                .filter(move |&j| self.cells[i][j])
                .map(move |j| (i as i8, j as i8))
        })
    }

    /// Rotate the shape 90 degrees.
    ///
    /// A WxH matrix becomes HxW via `rotated[j][W-1-i] = shape[i][j]`.
    /// Four applications return the original matrix exactly.
    pub fn rotated(&self) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for i in 0..self.width {
            for j in 0..self.height {
                cells[j][self.width - 1 - i] = self.cells[i][j];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

/// Base (spawn) matrix for a piece kind, written as visual rows.
pub fn base_shape(kind: PieceKind) -> PieceShape {
    let rows: &[&str] = match kind {
        PieceKind::I => &["XXXX"],
        PieceKind::J => &["X..", "XXX"],
        PieceKind::L => &["..X", "XXX"],
        PieceKind::O => &["XX", "XX"],
        PieceKind::S => &[".XX", "XX."],
        PieceKind::T => &[".X.", "XXX"],
        PieceKind::Z => &["XX.", ".XX"],
    };
    PieceShape::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_base_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            let shape = base_shape(kind);
            assert_eq!(
                shape.occupied_cells().count(),
                4,
                "kind {:?} should have 4 cells",
                kind
            );
        }
    }

    #[test]
    fn i_piece_spawns_horizontal() {
        let shape = base_shape(PieceKind::I);
        assert_eq!(shape.width(), 4);
        assert_eq!(shape.height(), 1);
        for i in 0..4 {
            assert!(shape.filled(i, 0));
        }
    }

    #[test]
    fn rotation_transposes_bounding_box() {
        let shape = base_shape(PieceKind::I).rotated();
        assert_eq!(shape.width(), 1);
        assert_eq!(shape.height(), 4);

        let shape = base_shape(PieceKind::T).rotated();
        assert_eq!(shape.width(), 2);
        assert_eq!(shape.height(), 3);
    }
}
