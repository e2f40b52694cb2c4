//! Board tests - grid access and line clearing

use tetris_gym::core::Board;
use tetris_gym::types::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

fn fill_row(board: &mut Board, row: usize, color: u8) {
    for col in 0..BOARD_WIDTH as usize {
        board.set(row, col, color);
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for row in 0..BOARD_HEIGHT as usize {
        for col in 0..BOARD_WIDTH as usize {
            assert_eq!(board.get(row, col), EMPTY);
        }
    }
}

#[test]
#[should_panic]
fn test_board_get_out_of_bounds_panics() {
    let board = Board::new();
    let _ = board.get(BOARD_HEIGHT as usize, 0);
}

#[test]
#[should_panic]
fn test_board_set_out_of_bounds_panics() {
    let mut board = Board::new();
    board.set(0, BOARD_WIDTH as usize, 1);
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(5));

    fill_row(&mut board, 5, 2);
    assert!(board.is_row_full(5));

    board.set(5, 9, EMPTY);
    assert!(!board.is_row_full(5));
}

#[test]
fn test_clear_rows_five_and_seven() {
    let mut board = Board::new();
    fill_row(&mut board, 5, 1);
    fill_row(&mut board, 7, 1);

    // Markers: above both full rows, between them, and below both.
    board.set(3, 0, 4);
    board.set(6, 2, 5);
    board.set(12, 8, 6);

    let cleared = board.clear_full_lines();
    assert_eq!(cleared.len(), 2);
    assert_eq!(cleared.as_slice(), &[5, 7]);

    // Above both full rows: shifted down by two.
    assert_eq!(board.get(5, 0), 4);
    assert_eq!(board.get(3, 0), EMPTY);
    // Between the two: shifted down by one.
    assert_eq!(board.get(7, 2), 5);
    assert_eq!(board.get(6, 2), EMPTY);
    // Below both: untouched.
    assert_eq!(board.get(12, 8), 6);

    // No full rows remain.
    for row in 0..BOARD_HEIGHT as usize {
        assert!(!board.is_row_full(row), "row {} still full", row);
    }
}

#[test]
fn test_clear_four_contiguous_rows() {
    let mut board = Board::new();
    for row in 16..20 {
        fill_row(&mut board, row, 3);
    }
    board.set(15, 4, 2);

    let cleared = board.clear_full_lines();
    assert_eq!(cleared.len(), 4);
    assert_eq!(board.get(19, 4), 2);
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_row_zero_excluded_from_clearing() {
    let mut board = Board::new();
    fill_row(&mut board, 0, 1);
    fill_row(&mut board, 1, 1);

    let cleared = board.clear_full_lines();

    // Row 1 clears and pulls row 0's contents down into it; row 0 itself is
    // never scanned and ends up empty after the shift.
    assert_eq!(cleared.as_slice(), &[1]);
    assert!(board.is_row_full(1));
    assert!(!board.is_row_full(0));
    assert_eq!(board.occupied_in_rows(0, 1), 0);
}

#[test]
fn test_clear_board() {
    let mut board = Board::new();
    fill_row(&mut board, 10, 2);
    board.clear();
    assert_eq!(board.occupied_count(), 0);
}
