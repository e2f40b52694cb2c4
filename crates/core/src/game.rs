//! Game state machine - the authoritative simulation
//!
//! Owns the board, the active piece, and the seeded RNG, and implements
//! collision-checked movement, freezing, line clearing, and game-over
//! detection. Every operation runs to completion synchronously; a `Game`
//! is owned by exactly one caller.
//!
//! Once the phase is GameOver, every operation is a no-op. Callers are
//! expected to check [`Game::is_terminal`], but continued calls are
//! tolerated.

use crate::board::Board;
use crate::piece::{would_collide, ActivePiece};
use crate::rng::SimpleRng;
use crate::shapes::PieceKind;
use crate::types::{Phase, PALETTE_SIZE, PIECE_KIND_COUNT, START_LEVEL};

/// Freeze activity accumulated since the last [`Game::take_freeze_event`]
/// call. Consumed by observers such as the reward calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreezeEvent {
    /// Number of pieces frozen onto the board
    pub pieces_frozen: u32,
    /// Total lines cleared by those freezes
    pub lines_cleared: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// None only before the first spawn (see [`Game::start`])
    active: Option<ActivePiece>,
    rng: SimpleRng,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    pending_event: Option<FreezeEvent>,
}

impl Game {
    /// Create a new game with the given RNG seed. No piece is active until
    /// [`Game::start`] is called.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            rng: SimpleRng::new(seed),
            phase: Phase::Playing,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            pending_event: None,
        }
    }

    /// Spawn the first piece
    pub fn start(&mut self) {
        if self.active.is_none() && self.phase == Phase::Playing {
            self.spawn();
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for scenario seeding in tests and drivers.
    /// The state machine itself only mutates the board through freezes.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Cumulative lines cleared over the whole game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Take and clear the freeze activity accumulated since the last call
    pub fn take_freeze_event(&mut self) -> Option<FreezeEvent> {
        self.pending_event.take()
    }

    /// Draw a new active piece. Kind is drawn before color; the draw order
    /// is part of the reproducibility contract. If the fresh piece already
    /// collides at the spawn position the game is over; the piece stays
    /// nominally active but no further operation will touch the board.
    fn spawn(&mut self) {
        let kind = PieceKind::from_index(self.rng.next_range(PIECE_KIND_COUNT as u32) as usize)
            .unwrap_or(PieceKind::I);
        let color = 1 + self.rng.next_range(PALETTE_SIZE as u32 - 1) as u8;
        let piece = ActivePiece::spawn(kind, color);

        if would_collide(&self.board, piece.kind, piece.rotation, piece.x, piece.y) {
            self.phase = Phase::GameOver;
        }
        self.active = Some(piece);
    }

    /// Move the piece down one row; freeze it if the row below is blocked
    pub fn step_down(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }
        let Some(piece) = self.active else {
            return;
        };

        if would_collide(&self.board, piece.kind, piece.rotation, piece.x, piece.y + 1) {
            self.freeze();
        } else {
            self.active = Some(ActivePiece {
                y: piece.y + 1,
                ..piece
            });
        }
    }

    /// Move the piece sideways; a blocked move is silently rejected and
    /// never freezes
    pub fn move_side(&mut self, dx: i8) {
        if self.phase == Phase::GameOver {
            return;
        }
        let Some(piece) = self.active else {
            return;
        };

        if !would_collide(&self.board, piece.kind, piece.rotation, piece.x + dx, piece.y) {
            self.active = Some(ActivePiece {
                x: piece.x + dx,
                ..piece
            });
        }
    }

    /// Advance the rotation index; a blocked rotation is silently rejected
    pub fn rotate(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }
        let Some(piece) = self.active else {
            return;
        };

        let rotation = piece.next_rotation();
        if !would_collide(&self.board, piece.kind, rotation, piece.x, piece.y) {
            self.active = Some(ActivePiece { rotation, ..piece });
        }
    }

    /// Drop the piece as far as it goes, then freeze it
    pub fn hard_drop(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }
        let Some(mut piece) = self.active else {
            return;
        };

        while !would_collide(&self.board, piece.kind, piece.rotation, piece.x, piece.y + 1) {
            piece.y += 1;
        }
        self.active = Some(piece);
        self.freeze();
    }

    /// Commit the active piece into the board, clear lines, update score,
    /// and spawn the next piece
    fn freeze(&mut self) {
        let Some(piece) = self.active else {
            return;
        };

        for (row, col) in piece.cells() {
            self.board.set(row as usize, col as usize, piece.color);
        }

        let cleared = self.board.clear_full_lines().len() as u32;
        // Cumulative squared-line scoring, as in the reference game.
        self.score += cleared * cleared;
        self.lines += cleared;

        let event = self.pending_event.get_or_insert(FreezeEvent {
            pieces_frozen: 0,
            lines_cleared: 0,
        });
        event.pieces_frozen += 1;
        event.lines_cleared += cleared;

        self.spawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X};

    #[test]
    fn test_new_game_has_no_active_piece() {
        let game = Game::new(1);
        assert!(game.active().is_none());
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.level(), START_LEVEL);
    }

    #[test]
    fn test_start_spawns_at_spawn_position() {
        let mut game = Game::new(1);
        game.start();

        let piece = game.active().expect("piece after start");
        assert_eq!((piece.x, piece.y), (SPAWN_X, 0));
        assert_eq!(piece.rotation, 0);
        assert!(piece.color >= 1 && piece.color < PALETTE_SIZE);
    }

    #[test]
    fn test_step_down_advances_y() {
        let mut game = Game::new(1);
        game.start();
        let before = game.active().unwrap();
        game.step_down();
        let after = game.active().unwrap();
        assert_eq!(after.y, before.y + 1);
    }

    #[test]
    fn test_hard_drop_freezes_and_respawns() {
        let mut game = Game::new(1);
        game.start();
        game.hard_drop();

        // Piece frozen into the bottom region, new piece back at spawn.
        assert_eq!(game.board().occupied_count(), 4);
        assert_eq!(game.active().unwrap().y, 0);
        let event = game.take_freeze_event().expect("freeze event");
        assert_eq!(event.pieces_frozen, 1);
        assert_eq!(event.lines_cleared, 0);
    }

    #[test]
    fn test_freeze_event_is_consumed() {
        let mut game = Game::new(1);
        game.start();
        game.hard_drop();
        assert!(game.take_freeze_event().is_some());
        assert!(game.take_freeze_event().is_none());
    }

    #[test]
    fn test_line_clear_updates_score_and_lines() {
        let mut game = Game::new(1);
        game.start();

        // Project where the active piece lands, then fill the rest of the
        // bottom row so the drop completes exactly that row.
        let mut piece = game.active().unwrap();
        while !would_collide(game.board(), piece.kind, piece.rotation, piece.x, piece.y + 1) {
            piece.y += 1;
        }
        let bottom = BOARD_HEIGHT as usize - 1;
        let landing_cols: Vec<i8> = piece
            .cells()
            .iter()
            .filter(|&&(row, _)| row == bottom as i8)
            .map(|&(_, col)| col)
            .collect();
        assert!(!landing_cols.is_empty());
        for col in 0..BOARD_WIDTH as usize {
            if !landing_cols.contains(&(col as i8)) {
                game.board_mut().set(bottom, col, 1);
            }
        }

        game.hard_drop();
        assert_eq!(game.lines(), 1);
        assert_eq!(game.score(), 1);
        let event = game.take_freeze_event().expect("freeze event");
        assert_eq!(event.lines_cleared, 1);
    }

    #[test]
    fn test_operations_are_noops_after_game_over() {
        let mut game = Game::new(1);
        // Block the whole spawn region so the first spawn collides.
        for row in 0..4 {
            for col in 0..BOARD_WIDTH as usize {
                game.board_mut().set(row, col, 1);
            }
        }
        game.start();
        assert!(game.is_terminal());

        let cells_before = game.board().cells().to_vec();
        let piece_before = game.active();
        game.step_down();
        game.move_side(-1);
        game.rotate();
        game.hard_drop();
        assert_eq!(game.board().cells(), cells_before.as_slice());
        assert_eq!(game.active(), piece_before);
    }

    #[test]
    fn test_move_side_blocked_at_wall() {
        let mut game = Game::new(1);
        game.start();

        for _ in 0..BOARD_WIDTH {
            game.move_side(-1);
        }
        let piece = game.active().unwrap();
        // Every occupied cell must still be inside the board.
        for (row, col) in piece.cells() {
            assert!((0..BOARD_HEIGHT as i8).contains(&row));
            assert!((0..BOARD_WIDTH as i8).contains(&col));
        }
        assert_eq!(game.board().occupied_count(), 0);
    }
}
