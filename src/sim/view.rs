//! Turning session state into display frames.

use crate::device::bitmap::Bitmap;
use crate::device::glyph::{floor_glyph, Glyph};
use crate::device::{Board, DisplayMode};
use crate::sim::outcome::Outcome;
use crate::sim::session::{GameSession, ViewMode};

/// The first-person glyph for the player's cell and heading.
pub fn floor_frame(session: &GameSession) -> Bitmap {
    let part = session.perceive();
    floor_glyph(part.left, part.front, part.right)
}

/// The frame for whichever view is active.
pub fn current_frame(session: &GameSession) -> Bitmap {
    match session.player.view {
        ViewMode::Floor => floor_frame(session),
        ViewMode::Map => session.overlay.viewport(session.player.cell),
    }
}

/// Push the active view, its mode and brightness to the display.
pub fn present<B: Board + ?Sized>(session: &GameSession, board: &mut B) {
    match session.player.view {
        ViewMode::Floor => {
            board.set_mode(DisplayMode::BlackAndWhite);
            board.set_brightness(session.light.brightness);
        }
        ViewMode::Map => {
            board.set_mode(DisplayMode::Greyscale);
            board.set_brightness(session.settings.brightness);
        }
    }
    board.show(&current_frame(session));
}

/// End screen glyph.
pub fn outcome_glyph(outcome: Outcome) -> Option<Glyph> {
    match outcome {
        Outcome::Ongoing => None,
        Outcome::Victory => Some(Glyph::Smiley),
        Outcome::Death => Some(Glyph::Sadly),
    }
}
