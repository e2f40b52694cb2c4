//! tetris-gym (workspace facade crate).
//!
//! This package keeps a single `tetris_gym::{core,env,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tetris_gym_core as core;
pub use tetris_gym_env as env;
pub use tetris_gym_types as types;
