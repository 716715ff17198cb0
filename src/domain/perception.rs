//! What the player sees: the cells ahead, to the left and to the right,
//! relative to the current heading.

use crate::domain::heading::Heading;
use crate::domain::maze::{Cell, Maze};

/// Derived view of the three neighbours that matter. Never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MazePart {
    pub front: bool,
    pub left: bool,
    pub right: bool,
    /// The front cell stops a forward step.
    pub blocked: bool,
}

impl MazePart {
    /// Everything walled in.
    pub const FULLY_BLOCKED: MazePart = MazePart { front: true, left: true, right: true, blocked: true };
}

/// (row, col) offsets of front, left and right for a heading.
/// Facing West, "left" is the southward neighbour.
pub fn neighbour_offsets(heading: Heading) -> [(isize, isize); 3] {
    match heading {
        Heading::North => [(-1, 0), (0, -1), (0, 1)],
        Heading::East => [(0, 1), (-1, 0), (1, 0)],
        Heading::South => [(1, 0), (0, 1), (0, -1)],
        Heading::West => [(0, -1), (1, 0), (-1, 0)],
    }
}

pub fn perceive(maze: &Maze, cell: Cell, heading: Heading) -> MazePart {
    let [front, left, right] = neighbour_offsets(heading).map(|(dr, dc)| maze.tile_near(cell, dr, dc));
    MazePart {
        front: front.is_wall_visible(),
        left: left.is_wall_visible(),
        right: right.is_wall_visible(),
        blocked: front.is_blocking(),
    }
}
