//! Shape catalog - piece geometries and their rotation states
//!
//! Process-wide immutable static data, shared by all games. Each rotation
//! state is the set of occupied (row, col) offsets within a 4x4 local grid;
//! a piece's board cells are these offsets translated by its (x, y)
//! position.
//!
//! The catalog carries five kinds with 2, 4, 4, 4, and 1 rotation states
//! respectively; rotating advances the state index modulo that count.

use crate::types::PIECE_KIND_COUNT;

/// Occupied cells of one rotation state: 4 (row, col) offsets in [0,4)x[0,4)
pub type RotationState = [(i8, i8); 4];

/// Piece kinds in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    T,
    O,
}

impl PieceKind {
    /// Every kind, in draw-index order
    pub const ALL: [PieceKind; PIECE_KIND_COUNT as usize] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
        PieceKind::O,
    ];

    /// Draw index of this kind
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::T => 3,
            PieceKind::O => 4,
        }
    }

    /// Decode from a draw index
    pub fn from_index(index: usize) -> Option<Self> {
        PieceKind::ALL.get(index).copied()
    }
}

const I_STATES: [RotationState; 2] = [
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(1, 0), (1, 1), (1, 2), (1, 3)],
];

const J_STATES: [RotationState; 4] = [
    [(0, 1), (0, 2), (1, 1), (2, 1)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 0)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
];

const L_STATES: [RotationState; 4] = [
    [(0, 1), (0, 2), (1, 2), (2, 2)],
    [(1, 1), (1, 2), (1, 3), (2, 1)],
    [(0, 2), (1, 2), (2, 2), (2, 3)],
    [(0, 3), (1, 1), (1, 2), (1, 3)],
];

const T_STATES: [RotationState; 4] = [
    [(0, 1), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 0), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 1)],
    [(0, 1), (1, 1), (1, 2), (2, 1)],
];

const O_STATES: [RotationState; 1] = [[(0, 1), (0, 2), (1, 1), (1, 2)]];

fn states(kind: PieceKind) -> &'static [RotationState] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::O => &O_STATES,
    }
}

/// Number of rotation states for a kind (always >= 1)
pub fn rotation_count(kind: PieceKind) -> usize {
    states(kind).len()
}

/// The occupied offsets of one rotation state.
/// Panics if `rotation` is not a valid state index for `kind`.
pub fn occupied_offsets(kind: PieceKind, rotation: usize) -> &'static RotationState {
    let table = states(kind);
    assert!(
        rotation < table.len(),
        "rotation {} out of range for {:?}",
        rotation,
        kind
    );
    &table[rotation]
}
