//! Environment façade - the reset/step contract
//!
//! One [`TetrisEnv`] owns one [`Game`] for its entire lifetime. Every step
//! advances exactly one row of automatic fall, applies the caller's action,
//! and derives the reward from the resulting board. Fully synchronous:
//! a step is atomic with respect to the caller and there is no buffering.

use serde::Serialize;

use crate::actions::apply_action;
use crate::core::Game;
use crate::draw::GameDrawer;
use crate::observation::{Info, Observation};
use crate::reward::{RewardAccumulator, RewardConfig};
use crate::types::Action;

/// Result of one environment step
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub observation: Observation,
    pub reward: f64,
    pub terminal: bool,
    pub info: Info,
}

/// Step-wise RL environment over the game state machine
#[derive(Debug)]
pub struct TetrisEnv {
    game: Game,
    accumulator: RewardAccumulator,
    config: RewardConfig,
    base_seed: u32,
    episode: u32,
    steps: u32,
}

impl TetrisEnv {
    /// Create an environment with the default reward configuration
    pub fn new(seed: u32) -> Self {
        Self::with_config(seed, RewardConfig::default())
    }

    pub fn with_config(seed: u32, config: RewardConfig) -> Self {
        let mut env = Self {
            game: Game::new(seed),
            accumulator: RewardAccumulator::new(),
            config,
            base_seed: seed,
            episode: 0,
            steps: 0,
        };
        env.game.start();
        env
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Mutable game access, for scenario seeding in tests and drivers
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Current observation without advancing the simulation
    pub fn observation(&self) -> Observation {
        Observation::from_board(self.game.board())
    }

    /// Discard the live game, start a fresh one, and return the initial
    /// observation. The episode seed is derived from the base seed and the
    /// episode counter, so a given environment instance replays identically
    /// run-to-run while successive episodes differ.
    pub fn reset(&mut self) -> Observation {
        self.episode = self.episode.wrapping_add(1);
        self.steps = 0;
        self.game = Game::new(self.base_seed.wrapping_add(self.episode));
        self.game.start();
        self.accumulator.reset();
        self.observation()
    }

    /// Advance one step: automatic fall, then the caller's action, then the
    /// reward derived from the new board occupancy.
    pub fn step(&mut self, action: Action) -> StepOutcome {
        self.steps = self.steps.wrapping_add(1);

        self.game.step_down();
        let quit = apply_action(&mut self.game, action);

        // Both the automatic fall and the action may have frozen a piece;
        // the consumable event aggregates their cleared lines.
        let cleared = self
            .game
            .take_freeze_event()
            .map_or(0, |event| event.lines_cleared);

        let breakdown = self.accumulator.step(self.game.board(), cleared, &self.config);
        let terminal = self.game.is_terminal() || quit;

        let mut info = Info::new();
        info.insert("score", self.game.score());
        info.insert("lines", self.game.lines());
        info.insert("lines_cleared", cleared);
        info.insert("steps", self.steps);
        info.insert("quit_requested", quit);
        info.insert("reward_positive", breakdown.positive);
        info.insert("reward_negative", breakdown.negative);
        info.insert("reward_contiguity_delta", breakdown.contiguity_delta);

        StepOutcome {
            observation: self.observation(),
            reward: breakdown.total,
            terminal,
            info,
        }
    }

    /// Delegate drawing to the external render collaborator
    pub fn render(&self, drawer: &mut dyn GameDrawer, display_info: Option<&str>) {
        drawer.render(&self.game, display_info);
    }
}
