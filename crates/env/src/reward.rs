//! Reward calculator - occupancy shaping for the training signal
//!
//! Rewards burying material low and penalizes stacking material high, on
//! top of a flat line-clear bonus. The board's rows are split into three
//! tiers of height `ceil(H / 3)`; per step, the change in occupied-cell
//! counts of the bottom and top tiers is normalized by the tier area.
//!
//! A contiguity term over the bottom rows (longest run of consecutive
//! occupied cells per row) is computed and reported every step, but it is
//! **not** added to the returned total unless explicitly enabled — this
//! mirrors the reference implementation, which computes the term and then
//! leaves it out of the sum.
//!
//! On the first step of an episode all "previous" values are zero, so the
//! first reward reflects absolute occupancy rather than a delta. That is
//! intentional.

use serde::Serialize;

use crate::core::Board;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, CONTIGUITY_ROWS, EMPTY, LINE_CLEAR_BONUS};

/// Tier height: the board split into three equal horizontal bands
pub const TIER_HEIGHT: usize = (BOARD_HEIGHT as usize).div_ceil(3);

/// Reward configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardConfig {
    /// Flat bonus whenever the step's freezes cleared at least one line
    pub line_clear_bonus: f64,
    /// Add the contiguity delta into the returned total (off by default)
    pub include_contiguity: bool,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            line_clear_bonus: LINE_CLEAR_BONUS,
            include_contiguity: false,
        }
    }
}

/// Per-step reward with its components, for trainers and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RewardBreakdown {
    pub total: f64,
    pub line_clear_bonus: f64,
    pub positive: f64,
    pub negative: f64,
    pub contiguity_delta: f64,
}

/// Cross-step accumulator state, one per episode.
/// Reset to zero at episode reset; mutated exactly once per step.
#[derive(Debug, Clone, Default)]
pub struct RewardAccumulator {
    prev_lower: u32,
    prev_upper: u32,
    prev_contiguity: f64,
}

impl RewardAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero all "previous" values for a fresh episode
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Derive the reward for the current board state and persist the new
    /// "previous" values for the next step.
    pub fn step(&mut self, board: &Board, lines_cleared: u32, config: &RewardConfig) -> RewardBreakdown {
        let height = BOARD_HEIGHT as usize;
        let area = (TIER_HEIGHT * BOARD_WIDTH as usize) as f64;

        // Bottom tier is rows with index >= 2 * tier height; top tier is
        // the first tier-height rows.
        let lower = board.occupied_in_rows(2 * TIER_HEIGHT, height);
        let upper = board.occupied_in_rows(0, TIER_HEIGHT);

        let positive = (lower as f64 - self.prev_lower as f64) / area;
        let negative = (upper as f64 - self.prev_upper as f64) / area;

        let contiguity = contiguity_sum(board);
        let contiguity_delta = (contiguity - self.prev_contiguity) / CONTIGUITY_ROWS as f64;

        let bonus = if lines_cleared > 0 {
            config.line_clear_bonus
        } else {
            0.0
        };

        let mut total = bonus + positive - negative;
        if config.include_contiguity {
            total += contiguity_delta;
        }

        self.prev_lower = lower;
        self.prev_upper = upper;
        self.prev_contiguity = contiguity;

        RewardBreakdown {
            total,
            line_clear_bonus: bonus,
            positive,
            negative,
            contiguity_delta,
        }
    }
}

/// Sum over the bottom CONTIGUITY_ROWS rows of the longest run of
/// consecutively occupied cells, each expressed as a fraction of row width
fn contiguity_sum(board: &Board) -> f64 {
    let height = BOARD_HEIGHT as usize;
    let mut sum = 0.0;
    for row in (height - CONTIGUITY_ROWS as usize)..height {
        sum += longest_run(board, row) as f64 / BOARD_WIDTH as f64;
    }
    sum
}

/// Longest run of consecutively occupied cells in a row
fn longest_run(board: &Board, row: usize) -> u32 {
    let mut best = 0u32;
    let mut current = 0u32;
    for col in 0..BOARD_WIDTH as usize {
        if board.get(row, col) != EMPTY {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}
