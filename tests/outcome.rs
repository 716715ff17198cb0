use mazepulse::{
    domain::{heading::Heading, maze::Cell},
    sim::{
        command::{apply, Command},
        event::GameEvent,
        outcome::{classify, Outcome},
        session::{Player, ViewMode},
    },
};
use pretty_assertions::assert_eq;

mod common;
use common::{parse_level, session_for};

/// The goal sits on a trap at (1,2).
const TRAPPED_GOAL: &str = "\
# Poisoned exit
@ 1,1 E
* 1,2
9999
9019
9999
";

fn player_at(row: usize, col: usize) -> Player {
    Player {
        cell: Cell::new(row, col),
        heading: Heading::East,
        view: ViewMode::Floor,
    }
}

#[test]
fn test_trap_beats_goal() {
    let level = parse_level(TRAPPED_GOAL);
    assert_eq!(level.game.goal, Cell::new(1, 2));
    assert_eq!(classify(&level.game, &player_at(1, 2), &level.maze), Outcome::Death);
}

#[test]
fn test_classify_goal_and_floor() {
    let level = parse_level("# Plain\n@ 1,1 E\n* 1,2\n9999\n9009\n9999\n");
    assert_eq!(classify(&level.game, &player_at(1, 2), &level.maze), Outcome::Victory);
    assert_eq!(classify(&level.game, &player_at(1, 1), &level.maze), Outcome::Ongoing);
}

#[test]
fn test_stepping_onto_a_trapped_goal_dies() {
    let mut session = session_for(parse_level(TRAPPED_GOAL));

    let events = apply(&mut session, Command::StepForward);

    assert_eq!(events, vec![GameEvent::Stepped { cell: Cell::new(1, 2) }, GameEvent::Died]);
    assert_eq!(session.outcome, Outcome::Death);
}

#[test]
fn test_outcome_is_over() {
    assert!(!Outcome::Ongoing.is_over());
    assert!(Outcome::Victory.is_over());
    assert!(Outcome::Death.is_over());
}
