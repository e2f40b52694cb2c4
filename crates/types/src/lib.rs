//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (simulation core, environment boundary, demo
//! binary).

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn position for new pieces (origin of the 4x4 local grid)
pub const SPAWN_X: i8 = 3;
pub const SPAWN_Y: i8 = 0;

/// Number of piece geometries in the shape catalog
pub const PIECE_KIND_COUNT: u8 = 5;

/// Palette size. Index 0 is the background; piece colors are drawn
/// uniformly from 1..PALETTE_SIZE.
pub const PALETTE_SIZE: u8 = 7;

/// Initial level (fall-speed knob carried through from the reference game)
pub const START_LEVEL: u32 = 2;

/// Flat bonus added to the step reward whenever a freeze cleared at least
/// one line. Deliberately decoupled from the game's `score` field.
pub const LINE_CLEAR_BONUS: f64 = 2.0;

/// Number of bottom rows scanned by the contiguity reward term
pub const CONTIGUITY_ROWS: u8 = 5;

/// Cell color index. 0 means empty; 1..PALETTE_SIZE index the palette.
pub type Color = u8;

/// The reserved "empty cell" color
pub const EMPTY: Color = 0;

/// Game lifecycle phase
///
/// Transitions Playing -> GameOver exactly once, irreversibly, the moment a
/// freshly spawned piece already collides with the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Discrete control actions
///
/// The integer encoding (`index`/`from_index`) is the wire format consumed
/// by external controllers and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Rotate,
    MoveLeft,
    MoveRight,
    MoveDown,
    HardDrop,
    Quit,
}

impl Action {
    /// Every action, in encoding order
    pub const ALL: [Action; 6] = [
        Action::Rotate,
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveDown,
        Action::HardDrop,
        Action::Quit,
    ];

    /// The subset exposed to a learning policy. HardDrop and Quit are
    /// excluded; the environment injects the downward tick itself.
    pub const POLICY_SET: [Action; 4] = [
        Action::Rotate,
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveDown,
    ];

    /// Stable integer encoding
    pub fn index(&self) -> usize {
        match self {
            Action::Rotate => 0,
            Action::MoveLeft => 1,
            Action::MoveRight => 2,
            Action::MoveDown => 3,
            Action::HardDrop => 4,
            Action::Quit => 5,
        }
    }

    /// Decode from the integer encoding
    pub fn from_index(index: usize) -> Option<Self> {
        Action::ALL.get(index).copied()
    }

    /// Parse action from string (for external drivers)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotate" => Some(Action::Rotate),
            "moveleft" | "left" => Some(Action::MoveLeft),
            "moveright" | "right" => Some(Action::MoveRight),
            "movedown" | "down" => Some(Action::MoveDown),
            "harddrop" | "drop" => Some(Action::HardDrop),
            "quit" => Some(Action::Quit),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Rotate => "rotate",
            Action::MoveLeft => "moveLeft",
            Action::MoveRight => "moveRight",
            Action::MoveDown => "moveDown",
            Action::HardDrop => "hardDrop",
            Action::Quit => "quit",
        }
    }
}
