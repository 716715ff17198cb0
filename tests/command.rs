use mazepulse::{
    domain::{heading::Heading, maze::Cell},
    sim::{
        command::{apply, Command},
        effect::MIN_BRIGHTNESS,
        event::GameEvent,
        outcome::Outcome,
        session::{GameSession, ViewMode},
    },
};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;
use common::{parse_level, session_for, ROOM};

fn room() -> GameSession {
    session_for(parse_level(ROOM))
}

fn place(session: &mut GameSession, row: usize, col: usize, heading: Heading) {
    session.player.cell = Cell::new(row, col);
    session.player.heading = heading;
}

#[test]
fn test_rotate_left_then_right_is_identity() {
    let mut session = room();
    let before = session.player;

    let events = apply(&mut session, Command::RotateLeft);
    assert_eq!(events, vec![GameEvent::Turned { heading: Heading::West }]);
    apply(&mut session, Command::RotateRight);

    assert_eq!(session.player, before);
}

#[test]
fn test_four_turns_come_back_around() {
    for command in [Command::RotateLeft, Command::RotateRight] {
        let mut session = room();
        let start = session.player.heading;
        let mut seen = Vec::new();
        for _ in 0..4 {
            apply(&mut session, command);
            seen.push(session.player.heading);
        }
        assert_eq!(session.player.heading, start);
        seen.sort_by_key(|h| h.index());
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }
}

#[test]
fn test_turning_never_moves() {
    let mut session = room();
    let cell = session.player.cell;
    apply(&mut session, Command::RotateRight);
    apply(&mut session, Command::RotateRight);
    assert_eq!(session.player.cell, cell);
}

#[test]
fn test_blocked_step_bumps_and_changes_nothing() {
    let mut session = room();
    place(&mut session, 1, 1, Heading::North);
    let before = session.player;

    let events = apply(&mut session, Command::StepForward);

    assert_eq!(events, vec![GameEvent::Bumped]);
    assert_eq!(session.player, before);
    assert_eq!(session.outcome, Outcome::Ongoing);
}

#[test]
fn test_inner_wall_blocks_too() {
    let mut session = room();
    place(&mut session, 3, 2, Heading::North);
    assert_eq!(apply(&mut session, Command::StepForward), vec![GameEvent::Bumped]);
    assert_eq!(session.player.cell, Cell::new(3, 2));
}

#[test]
fn test_legal_step_moves_exactly_one_cell() {
    let mut session = room();
    let from = session.player.cell;

    let events = apply(&mut session, Command::StepForward);

    assert_eq!(events, vec![GameEvent::Stepped { cell: Cell::new(2, 3) }]);
    assert_eq!(session.player.cell.manhattan(from), 1);
    assert_eq!(session.player.heading, Heading::North);
}

#[test]
fn test_step_updates_pulse_distance() {
    let mut session = room();
    let before = session.light.period_fraction;
    apply(&mut session, Command::StepForward);
    assert_that(&session.light.period_fraction).is_less_than(before);
    assert_eq!(session.light.period_fraction, session.normalized_distance());
}

#[test]
fn test_dark_tile_dims_until_left() {
    let mut session = room();
    place(&mut session, 3, 4, Heading::North);

    apply(&mut session, Command::StepForward);
    assert_eq!(session.player.cell, Cell::new(2, 4));
    assert_eq!(session.light.brightness, MIN_BRIGHTNESS);

    // Turning in place keeps the tile's brightness.
    apply(&mut session, Command::RotateLeft);
    apply(&mut session, Command::RotateRight);
    assert_eq!(session.light.brightness, MIN_BRIGHTNESS);

    apply(&mut session, Command::StepForward);
    assert_eq!(session.light.brightness, session.settings.brightness);
}

#[test]
fn test_twister_redirects_on_arrival() {
    let mut session = room();
    place(&mut session, 3, 2, Heading::South);

    let events = apply(&mut session, Command::StepForward);

    assert_eq!(events[0], GameEvent::Stepped { cell: Cell::new(4, 2) });
    let GameEvent::Redirected { from, to } = events[1] else {
        panic!("expected a redirect, got {events:?}");
    };
    assert_eq!(from, Heading::South);
    assert_ne!(to, Heading::South);
    assert_eq!(session.player.heading, to);
}

#[test]
fn test_turning_on_a_twister_does_not_spin() {
    let mut session = room();
    place(&mut session, 4, 2, Heading::North);
    let events = apply(&mut session, Command::RotateRight);
    assert_eq!(events, vec![GameEvent::Turned { heading: Heading::East }]);
    assert_eq!(session.player.heading, Heading::East);
}

#[test]
fn test_trap_ends_the_game() {
    let mut session = room();
    place(&mut session, 3, 4, Heading::South);

    let events = apply(&mut session, Command::StepForward);

    assert_eq!(events, vec![GameEvent::Stepped { cell: Cell::new(4, 4) }, GameEvent::Died]);
    assert_eq!(session.outcome, Outcome::Death);
}

#[test]
fn test_goal_wins() {
    let mut session = room();
    place(&mut session, 2, 5, Heading::North);

    let events = apply(&mut session, Command::StepForward);

    assert_eq!(events.last(), Some(&GameEvent::Won));
    assert_eq!(session.outcome, Outcome::Victory);
}

#[test]
fn test_commands_after_the_end_do_nothing() {
    let mut session = room();
    place(&mut session, 2, 5, Heading::North);
    apply(&mut session, Command::StepForward);
    let after = session.player;

    for command in [Command::RotateLeft, Command::StepForward, Command::ToggleMap] {
        assert_that(&apply(&mut session, command)).is_empty();
    }
    assert_eq!(session.player, after);

    // The end is reported once.
    let (_, event) = session.tick(10_000);
    assert_eq!(event, None);
}

#[test]
fn test_map_view_only_answers_the_toggle() {
    let mut session = room();

    let events = apply(&mut session, Command::ToggleMap);
    assert_eq!(events, vec![GameEvent::ViewChanged { view: ViewMode::Map }]);

    let before = session.player;
    assert_that(&apply(&mut session, Command::RotateLeft)).is_empty();
    assert_that(&apply(&mut session, Command::RotateRight)).is_empty();
    assert_that(&apply(&mut session, Command::StepForward)).is_empty();
    assert_eq!(session.player, before);

    apply(&mut session, Command::ToggleMap);
    assert_eq!(session.player.view, ViewMode::Floor);
    assert_eq!(apply(&mut session, Command::StepForward).len(), 1);
}
