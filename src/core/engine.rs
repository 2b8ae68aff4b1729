//! GameEngine - the tick/input state machine
//!
//! Ties movement, merging, line clears, spawning and game-over detection
//! together. The two serial entry points (`on_tick`, `on_key`) share one
//! mutation path: attempt a move, consult the board's validity rule,
//! commit or silently reject. Once the game is over the engine accepts
//! no further mutation.

use crate::core::pieces::{base_shape, PieceShape};
use crate::core::rng::SimpleRng;
use crate::core::Board;
use crate::types::{GameAction, PieceKind, SPAWN_X, SPAWN_Y};

/// The currently falling piece: a shape matrix plus its board origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: PieceShape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece of the given kind at the spawn origin, base rotation.
    fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: base_shape(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }
}

/// Emitted when a piece locks into the board (consumed by the host).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub game_over: bool,
}

/// Complete game state: board, active piece, and the piece RNG.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    active: ActivePiece,
    rng: SimpleRng,
    game_over: bool,
}

impl GameEngine {
    /// Create a new game with the given RNG seed and spawn the first piece.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = ActivePiece::new(rng.next_kind());
        Self {
            board: Board::new(),
            active,
            rng,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for staging positions in tests.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Replace the active piece with a fresh one of the given kind at the
    /// spawn origin. Flags game over if the spawn position is blocked.
    pub fn spawn(&mut self, kind: PieceKind) -> bool {
        let piece = ActivePiece::new(kind);
        self.active = piece;
        if !self.board.is_valid_move(piece.x, piece.y, &piece.shape) {
            self.game_over = true;
            return false;
        }
        true
    }

    /// Gravity step, driven by the host's fixed-interval timer.
    ///
    /// Drops the active piece one row if that is valid; otherwise the
    /// piece locks, full lines clear, and the next piece spawns. Returns
    /// the lock event when a lock happened, so the host can observe line
    /// clears and the game-over transition exactly once.
    pub fn on_tick(&mut self) -> Option<LockEvent> {
        if self.game_over {
            return None;
        }
        if self.try_move(0, 1) {
            return None;
        }
        Some(self.lock_piece())
    }

    /// Player input, one action per delivered key event.
    ///
    /// Rejected moves are silent no-ops, not errors; nothing is buffered.
    /// Returns whether the action was committed.
    pub fn on_key(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    /// Attempt to translate the active piece; commit only if valid.
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let (x, y) = (self.active.x + dx, self.active.y + dy);
        if self.board.is_valid_move(x, y, &self.active.shape) {
            self.active.x = x;
            self.active.y = y;
            return true;
        }
        false
    }

    /// Attempt to swap in the rotated matrix at the same origin.
    fn try_rotate(&mut self) -> bool {
        let rotated = self.active.shape.rotated();
        if self
            .board
            .is_valid_move(self.active.x, self.active.y, &rotated)
        {
            self.active.shape = rotated;
            return true;
        }
        false
    }

    /// Merge the active piece into the board, clear full lines, and spawn
    /// the next piece. The caller has already established the resting
    /// position is valid.
    fn lock_piece(&mut self) -> LockEvent {
        self.board
            .merge(self.active.x, self.active.y, &self.active.shape);
        let lines_cleared = self.board.clear_full_lines();

        let kind = self.rng.next_kind();
        self.spawn(kind);

        LockEvent {
            lines_cleared,
            game_over: self.game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_spawns_same_first_piece() {
        let a = GameEngine::new(42);
        let b = GameEngine::new(42);
        assert_eq!(a.active().kind, b.active().kind);
    }

    #[test]
    fn test_new_engine_piece_at_spawn_origin() {
        let engine = GameEngine::new(1);
        assert_eq!(engine.active().x, SPAWN_X);
        assert_eq!(engine.active().y, SPAWN_Y);
        assert_eq!(engine.active().shape, base_shape(engine.active().kind));
    }
}
