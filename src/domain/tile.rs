//! Tile codes and their properties.
//! Properties are queried via methods, not stored as flags,
//! so tile semantics are centralized here.

/// Codes at or above this value render as a wall in every view.
pub const WALL_VISIBLE_THRESHOLD: u8 = 5;

/// Codes at or above this value stop forward movement.
pub const BLOCKING_THRESHOLD: u8 = 9;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Tile {
    #[default]
    Floor,      // 0
    Trap,       // 1: passable, entering it is fatal
    Dark,       // 2: passable, dims the display
    Twister,    // 3: passable, spins the player to a random heading
    SecretWall, // 8: looks like a wall, walks like a floor
    Wall,       // 9
}

impl Tile {
    /// Decode a tile digit. Codes outside the closed set are rejected.
    pub fn from_code(code: u8) -> Option<Tile> {
        match code {
            0 => Some(Tile::Floor),
            1 => Some(Tile::Trap),
            2 => Some(Tile::Dark),
            3 => Some(Tile::Twister),
            8 => Some(Tile::SecretWall),
            9 => Some(Tile::Wall),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Tile::Floor => 0,
            Tile::Trap => 1,
            Tile::Dark => 2,
            Tile::Twister => 3,
            Tile::SecretWall => 8,
            Tile::Wall => 9,
        }
    }

    /// Does this tile show up as a wall on the display?
    pub fn is_wall_visible(self) -> bool {
        self.code() >= WALL_VISIBLE_THRESHOLD
    }

    /// Does this tile stop a forward step?
    pub fn is_blocking(self) -> bool {
        self.code() >= BLOCKING_THRESHOLD
    }

    pub fn is_passable(self) -> bool {
        !self.is_blocking()
    }

    pub fn is_trap(self) -> bool {
        matches!(self, Tile::Trap)
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Tile::Dark)
    }

    pub fn is_twister(self) -> bool {
        matches!(self, Tile::Twister)
    }
}
