//! What a tile does to the player and the light.
//!
//! Brightness and redirection depend on the cell; colour depends on the
//! cell or on the heading, depending on the configured policy.

use rand::Rng;

use crate::domain::colour::{heading_colour, tile_colour, Colour, ColourPolicy};
use crate::domain::heading::Heading;
use crate::domain::tile::Tile;
use crate::sim::session::Settings;

/// Lowest brightness that still shows anything.
pub const MIN_BRIGHTNESS: u8 = 1;

/// Why the tile is being resolved.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Entry {
    /// The player just stepped onto the tile.
    Arrived,
    /// The player turned in place.
    Turned,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TileEffect {
    pub brightness: u8,
    pub colour: Colour,
    /// New heading imposed by a twister.
    pub redirect: Option<Heading>,
}

pub fn resolve_tile<R: Rng + ?Sized>(
    tile: Tile,
    heading: Heading,
    entry: Entry,
    settings: &Settings,
    rng: &mut R,
) -> TileEffect {
    let brightness = if tile.is_dark() { MIN_BRIGHTNESS } else { settings.brightness };

    let redirect = if entry == Entry::Arrived && tile.is_twister() {
        Some(spin(heading, rng))
    } else {
        None
    };

    let colour = match settings.colour_policy {
        ColourPolicy::Tile => tile_colour(tile),
        ColourPolicy::Heading => heading_colour(redirect.unwrap_or(heading)),
    };

    TileEffect { brightness, colour, redirect }
}

/// Uniform draw over the three other headings.
pub fn spin<R: Rng + ?Sized>(current: Heading, rng: &mut R) -> Heading {
    loop {
        let candidate = Heading::from_index(rng.random_range(0..4u8));
        if candidate != current {
            return candidate;
        }
    }
}
