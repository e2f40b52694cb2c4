//! Observation and auxiliary info - the data handed to a controller
//!
//! The observation is a height x width matrix of booleans, true iff the
//! corresponding board cell is non-empty. Colors and the active piece are
//! discarded at this boundary.

use serde::Serialize;

use crate::core::Board;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// Boolean occupancy matrix of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub cells: [[bool; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
}

impl Observation {
    /// Build from the board's current occupancy
    pub fn from_board(board: &Board) -> Self {
        let mut cells = [[false; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (row, out_row) in cells.iter_mut().enumerate() {
            for (col, out) in out_row.iter_mut().enumerate() {
                *out = board.get(row, col) != EMPTY;
            }
        }
        Self { cells }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> u32 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&occupied| occupied)
            .count() as u32
    }
}

/// Value types carried in the auxiliary info map
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InfoValue {
    Bool(bool),
    I64(i64),
    F64(f64),
    Str(String),
}

impl From<bool> for InfoValue {
    fn from(v: bool) -> Self {
        InfoValue::Bool(v)
    }
}
impl From<i64> for InfoValue {
    fn from(v: i64) -> Self {
        InfoValue::I64(v)
    }
}
impl From<u32> for InfoValue {
    fn from(v: u32) -> Self {
        InfoValue::I64(v as i64)
    }
}
impl From<f64> for InfoValue {
    fn from(v: f64) -> Self {
        InfoValue::F64(v)
    }
}
impl From<&str> for InfoValue {
    fn from(v: &str) -> Self {
        InfoValue::Str(v.to_string())
    }
}

/// Small ordered key-value map for per-step auxiliary data. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Info {
    entries: Vec<(String, InfoValue)>,
}

impl Info {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a key
    pub fn insert<K: Into<String>, V: Into<InfoValue>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            *existing = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&InfoValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InfoValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
