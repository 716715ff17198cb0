use std::collections::{HashMap, VecDeque};

use mazepulse::{
    config::GameConfig,
    domain::{
        heading::{Heading, HEADINGS},
        maze::{Cell, Maze},
        tile::Tile,
    },
    sim::{
        command::{apply, Command},
        event::GameEvent,
        feedback::actuate,
        outcome::Outcome,
    },
};
use pretty_assertions::assert_eq;

mod common;
use common::{builtin_session, FakeBoard};

/// Shortest walkable route that avoids traps.
fn safe_path(maze: &Maze, from: Cell, to: Cell) -> Vec<Cell> {
    let mut parent: HashMap<Cell, Cell> = HashMap::new();
    let mut queue = VecDeque::from([from]);
    parent.insert(from, from);

    while let Some(cell) = queue.pop_front() {
        if cell == to {
            break;
        }
        for heading in HEADINGS {
            let Some(next) = cell.step(heading) else { continue };
            let tile = maze.tile_at(next);
            if tile.is_blocking() || tile.is_trap() || parent.contains_key(&next) {
                continue;
            }
            parent.insert(next, cell);
            queue.push_back(next);
        }
    }

    let mut path = vec![to];
    let mut cell = to;
    while cell != from {
        cell = parent[&cell];
        path.push(cell);
    }
    path.reverse();
    path
}

fn heading_towards(from: Cell, to: Cell) -> Heading {
    HEADINGS
        .into_iter()
        .find(|h| from.step(*h) == Some(to))
        .expect("cells are adjacent")
}

#[test]
fn test_walk_the_builtin_maze_to_the_exit() {
    let timing = GameConfig::default().timing;
    let mut session = builtin_session();
    let mut board = FakeBoard::default();

    assert_eq!(session.player.cell, Cell::new(9, 5));
    assert_eq!(session.player.heading, Heading::West);

    let path = safe_path(&session.maze, session.game.start, session.game.goal);
    assert_eq!(path.last(), Some(&Cell::new(1, 5)));

    let mut last_events = Vec::new();
    for next in path.into_iter().skip(1) {
        let wanted = heading_towards(session.player.cell, next);
        // A twister may have left us facing anywhere.
        while session.player.heading != wanted {
            let events = apply(&mut session, Command::RotateRight);
            actuate(&mut board, &session, &events, &timing);
        }

        last_events = apply(&mut session, Command::StepForward);
        actuate(&mut board, &session, &last_events, &timing);

        assert_eq!(last_events[0], GameEvent::Stepped { cell: next });
        assert_ne!(session.maze.tile_at(session.player.cell), Tile::Wall);
        assert_eq!(session.player.cell, next);
    }

    assert_eq!(session.outcome, Outcome::Victory);
    assert_eq!(last_events.last(), Some(&GameEvent::Won));
}

#[test]
fn test_walking_into_walls_never_gets_through() {
    let mut session = builtin_session();
    for _ in 0..4 {
        for _ in 0..20 {
            apply(&mut session, Command::StepForward);
            assert_ne!(session.maze.tile_at(session.player.cell), Tile::Wall);
        }
        apply(&mut session, Command::RotateLeft);
    }
    assert!(session.maze.tile_at(session.player.cell).is_passable());
}
