//! Render collaborator boundary
//!
//! The core never depends on pixels existing; anything that wants to show
//! the game implements [`GameDrawer`] and receives the full game state plus
//! an optional display-info string.

use crate::core::Game;

/// External drawer. Purely an output sink; must not mutate game state.
pub trait GameDrawer {
    fn render(&mut self, game: &Game, display_info: Option<&str>);
}
