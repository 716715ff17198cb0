//! 5x5 images.

use strum_macros::EnumIter;

use super::bitmap::{Bitmap, LIT};

/// Side length of the board.
pub const BOARD_SIZE: usize = 5;

#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumIter)]
pub enum Glyph {
    Smiley,
    Sadly,
    Heart,
    Full,
}

impl Glyph {
    pub fn bitmap(self) -> Bitmap {
        let rows: [&str; BOARD_SIZE] = match self {
            Glyph::Smiley => [".#.#.", ".#.#.", ".....", "#...#", ".###."],
            Glyph::Sadly => [".#.#.", ".#.#.", ".....", ".###.", "#...#"],
            Glyph::Heart => [".#.#.", "#####", "#####", ".###.", "..#.."],
            Glyph::Full => ["#####", "#####", "#####", "#####", "#####"],
        };
        Bitmap::from_rows(&rows)
    }
}

/// Floor view: side columns show left/right walls, the centre ring shows
/// the way ahead and fills in when the front is a wall.
pub fn floor_glyph(left: bool, front: bool, right: bool) -> Bitmap {
    let mut img = Bitmap::new(BOARD_SIZE, BOARD_SIZE);

    for col in [0, BOARD_SIZE - 1] {
        img.set(0, col, LIT);
        img.set(BOARD_SIZE - 1, col, LIT);
    }
    for (col, fill) in [(0, left), (BOARD_SIZE - 1, right)] {
        if fill {
            for row in 1..BOARD_SIZE - 1 {
                img.set(row, col, LIT);
            }
        }
    }

    for i in 1..4 {
        img.set(1, i, LIT);
        img.set(3, i, LIT);
    }
    img.set(2, 1, LIT);
    img.set(2, 3, LIT);
    if front {
        img.set(2, 2, LIT);
    }
    img
}
