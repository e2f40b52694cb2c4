//! Environment boundary - reset/step/observation for external controllers
//!
//! This crate wraps [`tetris_gym_core`] in the contract a learning agent
//! consumes: discrete actions in, `(observation, reward, terminal, info)`
//! out. It owns no I/O; rendering is delegated through the [`GameDrawer`]
//! trait and serialization happens via serde derives on the boundary types.
//!
//! # Module Structure
//!
//! - [`actions`]: dispatches discrete actions to the game state machine
//! - [`reward`]: tiered-occupancy reward shaping with a per-episode accumulator
//! - [`observation`]: boolean occupancy matrix and the auxiliary info map
//! - [`env`]: the reset/step façade
//! - [`draw`]: the render-collaborator trait

pub mod actions;
pub mod draw;
pub mod env;
pub mod observation;
pub mod reward;

pub use tetris_gym_core as core;
pub use tetris_gym_types as types;

// Re-export commonly used items for convenience
pub use actions::{apply_action, apply_sequence};
pub use draw::GameDrawer;
pub use env::{StepOutcome, TetrisEnv};
pub use observation::{Info, InfoValue, Observation};
pub use reward::{RewardAccumulator, RewardBreakdown, RewardConfig};
