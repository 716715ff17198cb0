//! Game-end classification.

use crate::domain::maze::{Game, Maze};
use crate::sim::session::Player;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Outcome {
    #[default]
    Ongoing,
    Victory,
    Death,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// A trap wins over the goal, even when both share a cell.
pub fn classify(game: &Game, player: &Player, maze: &Maze) -> Outcome {
    if maze.tile_at(player.cell).is_trap() {
        Outcome::Death
    } else if player.cell == game.goal {
        Outcome::Victory
    } else {
        Outcome::Ongoing
    }
}
