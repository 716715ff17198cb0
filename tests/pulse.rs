use mazepulse::{
    domain::{
        colour::{Colour, Rgb8},
        heading::HEADINGS,
        maze::{Cell, Level},
    },
    sim::{
        pulse::{max_distance, normalized_distance, period_ms, tick},
        session::{FloorLight, Settings},
    },
};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

fn light(period_fraction: f32) -> FloorLight {
    FloorLight {
        colour: Colour::new(0.0, 1.0, 0.0),
        brightness: 200,
        period_fraction,
        cycle_start_ms: 0,
    }
}

#[test]
fn test_distance_is_zero_at_goal_and_bounded_elsewhere() {
    let level = Level::builtin().unwrap();
    let goal = level.game.goal;
    let max = max_distance(&level.maze);

    assert_eq!(normalized_distance(goal, goal, max), 0.0);
    for cell in level.maze.interior() {
        let d = normalized_distance(cell, goal, max);
        assert!((0.0..=1.0).contains(&d), "{cell:?} -> {d}");
        if cell != goal {
            assert_that(&d).is_greater_than(0.0);
        }
    }
}

#[test]
fn test_builtin_level_distance_scale() {
    let level = Level::builtin().unwrap();
    // Interior width plus interior height.
    assert_eq!(max_distance(&level.maze), 20);
    assert_eq!(normalized_distance(Cell::new(9, 5), level.game.goal, 20), 8.0 / 20.0);
}

#[test]
fn test_cells_next_to_the_goal_glow_solid() {
    let level = Level::builtin().unwrap();
    let goal = level.game.goal;
    let max = max_distance(&level.maze);
    let s = Settings::default();
    let white = Rgb8 { r: s.max_channel, g: s.max_channel, b: s.max_channel };

    for heading in HEADINGS {
        let Some(cell) = goal.step(heading) else { continue };
        let mut l = light(normalized_distance(cell, goal, max));
        for now in [0, 20, 60, 140, 1_000] {
            assert_eq!(tick(&mut l, now, &s), white, "{cell:?} at {now}ms");
        }
    }

    // Two steps out the light pulses again.
    let mut l = light(normalized_distance(Cell::new(2, 6), goal, max));
    assert_ne!(tick(&mut l, 20, &s), tick(&mut l, 60, &s));
}

#[test]
fn test_period_scales_with_distance() {
    let s = Settings::default();
    assert_eq!(period_ms(&light(1.0), &s), s.slowest_pulse_ms as f32);
    assert_eq!(period_ms(&light(0.5), &s), s.slowest_pulse_ms as f32 / 2.0);
}

#[test]
fn test_ramp_rises_within_a_cycle_then_restarts() {
    let s = Settings::default();
    let mut l = light(0.5);
    let period = period_ms(&l, &s) as u64;

    let mut last = 0;
    for now in (0..=period).step_by(50) {
        let rgb = tick(&mut l, now, &s);
        assert_eq!(rgb.r, 0);
        assert_that(&rgb.g).is_greater_than_or_equal_to(last);
        last = rgb.g;
    }
    assert_that(&last).is_greater_than(0);
    // Half way to the goal, so the peak stays below half the channel range.
    assert_that(&last).is_less_than_or_equal_to(s.max_channel / 2 + 1);

    let restarted = tick(&mut l, period + 10, &s);
    assert_eq!(restarted, Rgb8::default());
    assert_eq!(l.cycle_start_ms, period + 10);
}

#[test]
fn test_near_goal_glows_solid_white() {
    let s = Settings::default();
    let mut l = light(0.0);
    let white = Rgb8 { r: s.max_channel, g: s.max_channel, b: s.max_channel };

    for now in [0, 33, 1_000, 50_000] {
        assert_eq!(tick(&mut l, now, &s), white);
        assert_eq!(l.cycle_start_ms, now);
    }
}

#[test]
fn test_periods_below_resolution_are_solid() {
    let s = Settings::default();
    let below = (s.pulse_resolution_ms as f32 - 1.0) / s.slowest_pulse_ms as f32;
    let mut l = light(below);
    assert_eq!(tick(&mut l, 40, &s), tick(&mut l, 80, &s));
}

#[test]
fn test_max_channel_caps_output() {
    let s = Settings { max_channel: 64, ..Settings::default() };
    let mut l = light(0.0);
    assert_eq!(tick(&mut l, 0, &s), Rgb8 { r: 64, g: 64, b: 64 });
}
