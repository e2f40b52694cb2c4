//! Board module - manages the game grid
//!
//! The board is a 20x10 grid where each cell holds a color index (0 = empty).
//! Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom) and col
//! ranges 0..9 (left to right).
//!
//! Out-of-range access is a programming error and panics; it is never
//! silently clamped. Legality of piece positions is checked *before*
//! indexing, by [`crate::piece::would_collide`].

use arrayvec::ArrayVec;

use crate::types::{Color, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of colors, row-major order (row * WIDTH + col)
    cells: [Color; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col). Panics on out-of-range input.
    #[inline(always)]
    fn index(row: usize, col: usize) -> usize {
        assert!(
            row < BOARD_HEIGHT as usize && col < BOARD_WIDTH as usize,
            "board access out of range: ({}, {})",
            row,
            col
        );
        row * BOARD_WIDTH as usize + col
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Read the color at (row, col). Panics on out-of-range input.
    pub fn get(&self, row: usize, col: usize) -> Color {
        self.cells[Self::index(row, col)]
    }

    /// Write the color at (row, col). Panics on out-of-range input.
    pub fn set(&mut self, row: usize, col: usize, color: Color) {
        self.cells[Self::index(row, col)] = color;
    }

    /// Check whether the cell at (row, col) is occupied
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col) != EMPTY
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        let start = Self::index(row, 0);
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|&c| c != EMPTY)
    }

    /// Count occupied cells across the whole board
    pub fn occupied_count(&self) -> u32 {
        self.cells.iter().filter(|&&c| c != EMPTY).count() as u32
    }

    /// Count occupied cells in the half-open row range [start, end)
    pub fn occupied_in_rows(&self, start: usize, end: usize) -> u32 {
        assert!(start <= end && end <= BOARD_HEIGHT as usize);
        let lo = start * BOARD_WIDTH as usize;
        let hi = end * BOARD_WIDTH as usize;
        self.cells[lo..hi].iter().filter(|&&c| c != EMPTY).count() as u32
    }

    /// Clear all full rows and return the indices that were cleared
    /// (in scan order, top to bottom).
    ///
    /// The scan starts at row 1: row 0 is never eligible for clearing.
    /// Each cleared row shifts every row above it down by one; row 0
    /// becomes empty.
    pub fn clear_full_lines(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        for row in 1..BOARD_HEIGHT as usize {
            if self.is_row_full(row) {
                // ArrayVec capacity 4 = max cells a piece spans vertically,
                // so a single freeze can never complete more rows than that.
                // A pre-seeded board can; drop the index rather than panic.
                let _ = cleared.try_push(row);
                self.shift_down_through(row);
            }
        }
        cleared
    }

    /// Shift rows [0, row) down by one into [1, row], emptying row 0.
    /// Uses copy_within for efficient overlapping row moves.
    fn shift_down_through(&mut self, row: usize) {
        let width = BOARD_WIDTH as usize;
        for r in (1..=row).rev() {
            let src = (r - 1) * width;
            let dst = r * width;
            self.cells.copy_within(src..src + width, dst);
        }
        for cell in &mut self.cells[0..width] {
            *cell = EMPTY;
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = EMPTY;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), 0);
        assert_eq!(Board::index(0, 9), 9);
        assert_eq!(Board::index(1, 0), 10);
        assert_eq!(Board::index(19, 9), 199);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_board_index_row_out_of_range() {
        let board = Board::new();
        let _ = board.get(20, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_board_index_col_out_of_range() {
        let board = Board::new();
        let _ = board.get(0, 10);
    }

    #[test]
    fn test_board_set_and_get() {
        let mut board = Board::new();

        board.set(10, 5, 3);
        assert_eq!(board.get(10, 5), 3);
        assert!(board.is_occupied(10, 5));

        board.set(10, 5, EMPTY);
        assert_eq!(board.get(10, 5), EMPTY);
        assert!(!board.is_occupied(10, 5));
    }

    #[test]
    fn test_board_occupied_in_rows() {
        let mut board = Board::new();
        board.set(14, 0, 1);
        board.set(15, 3, 2);
        board.set(0, 0, 4);

        assert_eq!(board.occupied_in_rows(14, 20), 2);
        assert_eq!(board.occupied_in_rows(0, 7), 1);
        assert_eq!(board.occupied_count(), 3);
    }

    #[test]
    fn test_row_zero_never_cleared() {
        let mut board = Board::new();
        for col in 0..BOARD_WIDTH as usize {
            board.set(0, col, 1);
        }

        let cleared = board.clear_full_lines();
        assert!(cleared.is_empty());
        assert!(board.is_row_full(0));
    }

    #[test]
    fn test_clear_single_row_shifts_above() {
        let mut board = Board::new();
        for col in 0..BOARD_WIDTH as usize {
            board.set(5, col, 1);
        }
        board.set(3, 0, 2);
        board.set(4, 1, 3);

        let cleared = board.clear_full_lines();
        assert_eq!(cleared.as_slice(), &[5]);

        // Rows above shift down by one, row 0 becomes empty.
        assert_eq!(board.get(4, 0), 2);
        assert_eq!(board.get(5, 1), 3);
        assert_eq!(board.get(3, 0), EMPTY);
        assert_eq!(board.occupied_in_rows(0, 1), 0);
    }
}
