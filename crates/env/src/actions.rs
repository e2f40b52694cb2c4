//! Action applier - translates discrete actions into state-machine calls
//!
//! Pure dispatch: the applier returns only whether a quit was requested;
//! callers inspect the mutated [`Game`] for score and terminal status.

use crate::core::Game;
use crate::types::Action;

/// Apply a single action. Returns true iff the action was [`Action::Quit`].
pub fn apply_action(game: &mut Game, action: Action) -> bool {
    match action {
        Action::Rotate => game.rotate(),
        Action::MoveLeft => game.move_side(-1),
        Action::MoveRight => game.move_side(1),
        Action::MoveDown => game.step_down(),
        Action::HardDrop => game.hard_drop(),
        Action::Quit => return true,
    }
    false
}

/// Apply actions in order, halting after the first [`Action::Quit`].
/// Returns true iff quit was requested; later actions are never applied.
pub fn apply_sequence(game: &mut Game, actions: &[Action]) -> bool {
    for &action in actions {
        if apply_action(game, action) {
            return true;
        }
    }
    false
}
