//! GameSession: everything one game owns.
//!
//! The maze, game record and map overlay are fixed at construction.
//! Player and light state change only through `command::apply` and `tick`;
//! the renderer just reads them.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::GameConfig;
use crate::domain::colour::{Colour, ColourPolicy, Rgb8};
use crate::domain::heading::Heading;
use crate::domain::maze::{Cell, Game, Level, Maze};
use crate::domain::perception::{self, MazePart};
use crate::sim::effect::{self, Entry, TileEffect};
use crate::sim::event::GameEvent;
use crate::sim::outcome::{self, Outcome};
use crate::sim::overlay::MapOverlay;
use crate::sim::pulse;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ViewMode {
    #[default]
    Floor,
    Map,
}

impl ViewMode {
    pub fn toggled(self) -> ViewMode {
        match self {
            ViewMode::Floor => ViewMode::Map,
            ViewMode::Map => ViewMode::Floor,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Player {
    pub cell: Cell,
    pub heading: Heading,
    pub view: ViewMode,
}

/// Indicator and display lighting for the current cell.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FloorLight {
    pub colour: Colour,
    pub brightness: u8,
    /// Normalized goal distance: 0 = fastest pulse (goal), 1 = slowest.
    pub period_fraction: f32,
    pub cycle_start_ms: u64,
}

/// Tunables the rules read.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Settings {
    pub colour_policy: ColourPolicy,
    /// Normal display brightness.
    pub brightness: u8,
    pub max_channel: u8,
    pub pulse_resolution_ms: u64,
    pub slowest_pulse_ms: u64,
}

impl From<&GameConfig> for Settings {
    fn from(cfg: &GameConfig) -> Self {
        Settings {
            colour_policy: cfg.light.colour_policy,
            brightness: cfg.display.brightness,
            max_channel: cfg.light.max_channel,
            pulse_resolution_ms: cfg.timing.pulse_resolution_ms,
            slowest_pulse_ms: cfg.timing.slowest_pulse_ms,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from(&GameConfig::default())
    }
}

pub struct GameSession {
    pub name: String,
    pub maze: Maze,
    pub game: Game,
    pub player: Player,
    pub light: FloorLight,
    pub overlay: MapOverlay,
    pub outcome: Outcome,
    pub settings: Settings,
    max_distance: usize,
    rng: SmallRng,
}

// ── Construction ──

impl GameSession {
    pub fn new(level: Level, settings: Settings, rng: SmallRng, now_ms: u64) -> Self {
        let Level { name, maze, game } = level;
        let overlay = MapOverlay::build(&maze);
        let max_distance = pulse::max_distance(&maze);

        let mut session = GameSession {
            name,
            maze,
            game,
            player: Player {
                cell: game.start,
                heading: game.start_heading,
                view: ViewMode::Floor,
            },
            light: FloorLight {
                colour: Colour::BLACK,
                brightness: settings.brightness,
                period_fraction: 1.0,
                cycle_start_ms: now_ms,
            },
            overlay,
            outcome: Outcome::Ongoing,
            settings,
            max_distance,
            rng,
        };
        session.refresh_light(Entry::Turned);
        info!(level = %session.name, start = ?game.start, goal = ?game.goal, "session started");
        session
    }

    /// Seeded when `seed` is given, otherwise from the OS.
    pub fn with_seed(level: Level, settings: Settings, seed: Option<u64>, now_ms: u64) -> Self {
        let rng = match seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_os_rng(),
        };
        GameSession::new(level, settings, rng, now_ms)
    }
}

// ── Queries ──

impl GameSession {
    pub fn perceive(&self) -> MazePart {
        perception::perceive(&self.maze, self.player.cell, self.player.heading)
    }

    pub fn normalized_distance(&self) -> f32 {
        pulse::normalized_distance(self.player.cell, self.game.goal, self.max_distance)
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }
}

// ── State updates ──

impl GameSession {
    /// Recompute light for the current cell and heading. On arrival this may
    /// also spin the player; the redirect is returned.
    pub(crate) fn refresh_light(&mut self, entry: Entry) -> Option<Heading> {
        let tile = self.maze.tile_at(self.player.cell);
        let TileEffect { brightness, colour, redirect } =
            effect::resolve_tile(tile, self.player.heading, entry, &self.settings, &mut self.rng);

        if let Some(heading) = redirect {
            self.player.heading = heading;
        }
        self.light.brightness = brightness;
        self.light.colour = colour;
        self.light.period_fraction = self.normalized_distance();
        redirect
    }

    /// Classify the occupied cell; returns an event only on the transition
    /// out of `Ongoing`.
    pub(crate) fn settle_outcome(&mut self) -> Option<GameEvent> {
        if self.outcome.is_over() {
            return None;
        }
        self.outcome = outcome::classify(&self.game, &self.player, &self.maze);
        match self.outcome {
            Outcome::Ongoing => None,
            Outcome::Victory => {
                info!(cell = ?self.player.cell, "goal reached");
                Some(GameEvent::Won)
            }
            Outcome::Death => {
                info!(cell = ?self.player.cell, "stepped on a trap");
                Some(GameEvent::Died)
            }
        }
    }

    /// Periodic update: advance the pulse and poll for the end of the game.
    pub fn tick(&mut self, now_ms: u64) -> (Rgb8, Option<GameEvent>) {
        let rgb = pulse::tick(&mut self.light, now_ms, &self.settings);
        (rgb, self.settle_outcome())
    }
}
