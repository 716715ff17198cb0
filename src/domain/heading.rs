//! Compass headings. North looks toward row zero.

use strum_macros::Display;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

pub const HEADINGS: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

impl Heading {
    /// Position in the clockwise cycle, North = 0.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Wraps modulo 4.
    pub fn from_index(index: u8) -> Heading {
        HEADINGS[(index % 4) as usize]
    }

    pub fn rotate_left(self) -> Heading {
        Heading::from_index(self.index() + 3)
    }

    pub fn rotate_right(self) -> Heading {
        Heading::from_index(self.index() + 1)
    }

    pub fn opposite(self) -> Heading {
        Heading::from_index(self.index() + 2)
    }

    /// (row, col) delta of one step along this heading.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Heading::North => (-1, 0),
            Heading::East => (0, 1),
            Heading::South => (1, 0),
            Heading::West => (0, -1),
        }
    }

    /// Parse the single-letter form used in level files.
    pub fn from_letter(s: &str) -> Option<Heading> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" | "NORTH" => Some(Heading::North),
            "E" | "EAST" => Some(Heading::East),
            "S" | "SOUTH" => Some(Heading::South),
            "W" | "WEST" => Some(Heading::West),
            _ => None,
        }
    }
}
