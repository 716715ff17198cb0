//! The "breathing" indicator: a sawtooth ramp whose period and peak both
//! grow as the player nears the goal.

use crate::domain::colour::{Colour, Rgb8};
use crate::domain::maze::{Cell, Maze};
use crate::sim::session::{FloorLight, Settings};

/// Interior width plus interior height, at least 1. Cells next to the goal
/// land below the pulse resolution and glow solid.
pub fn max_distance(maze: &Maze) -> usize {
    (maze.width().saturating_sub(2) + maze.height().saturating_sub(2)).max(1)
}

/// 0 at the goal, growing toward 1 with distance; clamped.
pub fn normalized_distance(cell: Cell, goal: Cell, max_distance: usize) -> f32 {
    (cell.manhattan(goal) as f32 / max_distance.max(1) as f32).clamp(0.0, 1.0)
}

/// Pulse period for the light's current distance fraction.
pub fn period_ms(light: &FloorLight, settings: &Settings) -> f32 {
    light.period_fraction * settings.slowest_pulse_ms as f32
}

/// Advance the pulse to `now_ms` and return the colour to show.
pub fn tick(light: &mut FloorLight, now_ms: u64, settings: &Settings) -> Rgb8 {
    let period = period_ms(light, settings);

    if period < settings.pulse_resolution_ms as f32 {
        light.cycle_start_ms = now_ms;
        return Colour::WHITE.to_rgb8(1.0, settings.max_channel);
    }

    let mut elapsed = now_ms.saturating_sub(light.cycle_start_ms);
    if elapsed as f32 > period {
        light.cycle_start_ms = now_ms;
        elapsed = 0;
    }

    let fraction = (1.0 - light.period_fraction) * (elapsed as f32 / period);
    light.colour.to_rgb8(fraction, settings.max_channel)
}
