//! Whole-maze map, built once per session, viewed through a 5x5 window
//! centred on the player.

use crate::device::bitmap::{Bitmap, LIT};
use crate::device::glyph::BOARD_SIZE;
use crate::domain::maze::{Cell, Maze};

/// Wall pixels added on every side of the maze.
pub const BORDER: usize = 1;

/// Intensity of the player's own pixel in the map view.
pub const PLAYER_MARK: u8 = 96;

#[derive(Clone, Debug)]
pub struct MapOverlay {
    bitmap: Bitmap,
}

impl MapOverlay {
    pub fn build(maze: &Maze) -> Self {
        let mut bitmap = Bitmap::filled(maze.width() + 2 * BORDER, maze.height() + 2 * BORDER, LIT);
        for row in 0..maze.height() {
            for col in 0..maze.width() {
                if !maze.tile_at(Cell::new(row, col)).is_wall_visible() {
                    bitmap.set(row + BORDER, col + BORDER, 0);
                }
            }
        }
        MapOverlay { bitmap }
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    /// Top-left overlay coordinate of the window centred on `cell`.
    pub fn origin(cell: Cell) -> (isize, isize) {
        let half = (BOARD_SIZE / 2) as isize;
        (
            (cell.row + BORDER) as isize - half,
            (cell.col + BORDER) as isize - half,
        )
    }

    /// 5x5 view with the player in the centre. Works on a copy; the overlay
    /// is reused for every frame.
    pub fn viewport(&self, cell: Cell) -> Bitmap {
        let (top, left) = MapOverlay::origin(cell);
        let mut view = self.bitmap.window(top, left, BOARD_SIZE, BOARD_SIZE, LIT);
        view.set(BOARD_SIZE / 2, BOARD_SIZE / 2, PLAYER_MARK);
        view
    }
}
