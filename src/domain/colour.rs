//! Ambient colour of the indicator light.

use serde::Deserialize;

use crate::domain::heading::Heading;
use crate::domain::tile::Tile;

/// Channel intensities, each in `[0, 1]`.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Colour {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Colour {
    pub const BLACK: Colour = Colour::new(0.0, 0.0, 0.0);
    pub const WHITE: Colour = Colour::new(1.0, 1.0, 1.0);

    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Colour { red, green, blue }
    }

    /// Scale into device channels: `fraction * max` per channel, clamped.
    pub fn to_rgb8(self, fraction: f32, max: u8) -> Rgb8 {
        let scale = |c: f32| (c.clamp(0.0, 1.0) * fraction.clamp(0.0, 1.0) * max as f32).round() as u8;
        Rgb8 {
            r: scale(self.red),
            g: scale(self.green),
            b: scale(self.blue),
        }
    }
}

/// Device-level indicator value.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Which input picks the ambient colour.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourPolicy {
    /// Plain floor, secret or trap, blocking.
    Tile,
    /// One elemental colour per compass direction.
    #[default]
    Heading,
}

const FLOOR: Colour = Colour::new(0.0, 1.0, 0.0);
const HIDDEN: Colour = Colour::new(1.0, 0.35, 0.0);
const SOLID: Colour = Colour::new(0.0, 0.0, 1.0);

pub fn tile_colour(tile: Tile) -> Colour {
    match tile {
        Tile::Floor | Tile::Dark | Tile::Twister => FLOOR,
        Tile::SecretWall | Tile::Trap => HIDDEN,
        Tile::Wall => SOLID,
    }
}

pub fn heading_colour(heading: Heading) -> Colour {
    match heading {
        Heading::North => Colour::new(0.0, 0.4, 1.0), // water
        Heading::East => Colour::new(1.0, 0.1, 0.0),  // fire
        Heading::South => Colour::new(0.1, 0.8, 0.0), // earth
        Heading::West => Colour::new(1.0, 0.9, 0.3),  // air
    }
}
