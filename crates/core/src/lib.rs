//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the authoritative falling-block simulation. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces identical games (for AI training)
//! - **Testable**: every rule is reachable without a renderer
//! - **Fast**: zero-allocation hot paths, fit for tens of thousands of steps per run
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 color grid with full-row detection and line clearing
//! - [`shapes`]: static catalog of piece geometries and rotation states
//! - [`piece`]: the active falling piece and the collision predicate
//! - [`game`]: the game state machine (spawn, move, rotate, drop, freeze)
//! - [`rng`]: seeded LCG for reproducible piece and color draws
//!
//! # Example
//!
//! ```
//! use tetris_gym_core::Game;
//!
//! let mut game = Game::new(12345);
//! game.start();
//!
//! game.move_side(1);
//! game.rotate();
//! game.hard_drop();
//!
//! assert!(!game.is_terminal());
//! ```

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod shapes;

pub use tetris_gym_types as types;

// Re-export commonly used items for convenience
pub use board::Board;
pub use game::{FreezeEvent, Game};
pub use piece::{would_collide, ActivePiece};
pub use rng::SimpleRng;
pub use shapes::{occupied_offsets, rotation_count, PieceKind};
