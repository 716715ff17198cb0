//! Player commands: turn in place, step forward, flip between the floor
//! view and the map.
//!
//! Processing order for a step:
//!   1. Perception of the front cell
//!   2. Bump (blocked) or move one cell
//!   3. Tile effect of the new cell (brightness, colour, twister)
//!   4. Win / lose check
//!
//! State is fully updated before the events are returned; actuation
//! happens afterwards in `feedback`.

use tracing::debug;

use crate::sim::effect::Entry;
use crate::sim::event::GameEvent;
use crate::sim::session::{GameSession, ViewMode};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Command {
    RotateLeft,
    RotateRight,
    StepForward,
    ToggleMap,
}

// ══════════════════════════════════════════════════════════════
// Main entry point
// ══════════════════════════════════════════════════════════════

pub fn apply(session: &mut GameSession, command: Command) -> Vec<GameEvent> {
    if session.is_over() {
        return vec![];
    }

    // The map only answers to the toggle.
    if session.player.view == ViewMode::Map && command != Command::ToggleMap {
        debug!(?command, "ignored in map view");
        return vec![];
    }

    let mut events = Vec::new();
    match command {
        Command::RotateLeft => rotate(session, false, &mut events),
        Command::RotateRight => rotate(session, true, &mut events),
        Command::StepForward => step_forward(session, &mut events),
        Command::ToggleMap => toggle_map(session, &mut events),
    }
    events
}

// ══════════════════════════════════════════════════════════════
// Rotation
// ══════════════════════════════════════════════════════════════

fn rotate(session: &mut GameSession, clockwise: bool, events: &mut Vec<GameEvent>) {
    let player = &mut session.player;
    player.heading = if clockwise { player.heading.rotate_right() } else { player.heading.rotate_left() };

    // Same cell, so no tile effect; only the heading-keyed colour changes.
    session.refresh_light(Entry::Turned);

    debug!(heading = %session.player.heading, "turned");
    events.push(GameEvent::Turned { heading: session.player.heading });
}

// ══════════════════════════════════════════════════════════════
// Forward step
// ══════════════════════════════════════════════════════════════

fn step_forward(session: &mut GameSession, events: &mut Vec<GameEvent>) {
    let part = session.perceive();
    let next = session.player.cell.step(session.player.heading);

    let Some(next) = next.filter(|_| !part.blocked) else {
        debug!(cell = ?session.player.cell, heading = %session.player.heading, "bumped into a wall");
        events.push(GameEvent::Bumped);
        return;
    };

    session.player.cell = next;
    events.push(GameEvent::Stepped { cell: next });
    debug!(cell = ?next, "stepped");

    let before = session.player.heading;
    if let Some(after) = session.refresh_light(Entry::Arrived) {
        debug!(from = %before, to = %after, "twister");
        events.push(GameEvent::Redirected { from: before, to: after });
    }

    if let Some(end) = session.settle_outcome() {
        events.push(end);
    }
}

// ══════════════════════════════════════════════════════════════
// View toggle
// ══════════════════════════════════════════════════════════════

fn toggle_map(session: &mut GameSession, events: &mut Vec<GameEvent>) {
    session.player.view = session.player.view.toggled();
    debug!(view = ?session.player.view, "view toggled");
    events.push(GameEvent::ViewChanged { view: session.player.view });
}
