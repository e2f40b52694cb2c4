//! Active piece module - the currently falling shape
//!
//! An [`ActivePiece`] is pure data: kind, rotation index, color, and the
//! board position of its 4x4 local-grid origin. The random draw lives in
//! [`crate::game`] so the piece itself stays deterministic and testable.
//!
//! [`would_collide`] is the single source of truth for movement and
//! rotation legality; every mutation in the game state machine checks it
//! before committing.

use crate::board::Board;
use crate::shapes::{occupied_offsets, rotation_count, PieceKind};
use crate::types::{Color, BOARD_HEIGHT, BOARD_WIDTH, EMPTY, SPAWN_X, SPAWN_Y};

/// The active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: usize,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece of the given kind and color at the spawn position
    pub fn spawn(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            rotation: 0,
            color,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// The rotation index after one clockwise step (modulo state count)
    pub fn next_rotation(&self) -> usize {
        (self.rotation + 1) % rotation_count(self.kind)
    }

    /// Absolute board cells occupied by the piece, as (row, col) pairs
    pub fn cells(&self) -> [(i8, i8); 4] {
        let offsets = occupied_offsets(self.kind, self.rotation);
        let mut out = [(0i8, 0i8); 4];
        for (slot, &(dr, dc)) in out.iter_mut().zip(offsets.iter()) {
            *slot = (self.y + dr, self.x + dc);
        }
        out
    }
}

/// Collision predicate for a candidate placement. Pure; mutates nothing.
///
/// True iff any occupied cell of `(kind, rotation)` translated by `(x, y)`
/// falls below row `height - 1`, outside the column range, or onto an
/// occupied board cell.
pub fn would_collide(board: &Board, kind: PieceKind, rotation: usize, x: i8, y: i8) -> bool {
    for &(dr, dc) in occupied_offsets(kind, rotation) {
        let row = y as i32 + dr as i32;
        let col = x as i32 + dc as i32;
        if row > BOARD_HEIGHT as i32 - 1 || col < 0 || col > BOARD_WIDTH as i32 - 1 {
            return true;
        }
        // Pieces spawn at y = 0 and only ever move down, so row >= 0 holds.
        debug_assert!(row >= 0);
        if board.get(row as usize, col as usize) != EMPTY {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_position() {
        let piece = ActivePiece::spawn(PieceKind::T, 3);
        assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
        assert_eq!(piece.rotation, 0);
        assert_eq!(piece.color, 3);
    }

    #[test]
    fn test_cells_translate_offsets() {
        let piece = ActivePiece::spawn(PieceKind::O, 1);
        // O state 0 occupies (0,1),(0,2),(1,1),(1,2) in the local grid.
        let cells = piece.cells();
        assert!(cells.contains(&(0, SPAWN_X + 1)));
        assert!(cells.contains(&(1, SPAWN_X + 2)));
    }

    #[test]
    fn test_next_rotation_wraps() {
        let mut piece = ActivePiece::spawn(PieceKind::I, 1);
        assert_eq!(piece.next_rotation(), 1);
        piece.rotation = 1;
        assert_eq!(piece.next_rotation(), 0);

        let square = ActivePiece::spawn(PieceKind::O, 1);
        assert_eq!(square.next_rotation(), 0);
    }

    #[test]
    fn test_collide_empty_board_spawn_is_free() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            assert!(!would_collide(&board, kind, 0, SPAWN_X, SPAWN_Y));
        }
    }

    #[test]
    fn test_collide_left_wall() {
        let board = Board::new();
        // I state 0 occupies column offset 1; at x = -2 the absolute
        // column is -1.
        assert!(would_collide(&board, PieceKind::I, 0, -2, 0));
        assert!(!would_collide(&board, PieceKind::I, 0, -1, 0));
    }

    #[test]
    fn test_collide_floor() {
        let board = Board::new();
        // Vertical I spans row offsets 0..=3; bottom row is y + 3.
        assert!(!would_collide(&board, PieceKind::I, 0, 3, 16));
        assert!(would_collide(&board, PieceKind::I, 0, 3, 17));
    }

    #[test]
    fn test_collide_occupied_cell() {
        let mut board = Board::new();
        board.set(1, SPAWN_X as usize + 1, 2);
        assert!(would_collide(&board, PieceKind::O, 0, SPAWN_X, SPAWN_Y));
    }
}
