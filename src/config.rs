//! External configuration loader.
//!
//! Reads `config.toml` from the executable's directory (or CWD).
//! Falls back to sensible defaults if the file is missing or incomplete.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::colour::ColourPolicy;
use crate::error::ConfigError;

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub timing: TimingConfig,
    pub display: DisplayConfig,
    pub light: LightConfig,
    pub gamepad: GamepadConfig,
    pub seed: Option<u64>,
    pub log_file: PathBuf,
    pub maze_file: Option<PathBuf>,
    pub intro: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingConfig {
    pub tick_rate_ms: u64,
    /// Shortest pulse period the light can show; below it the light glows solid.
    pub pulse_resolution_ms: u64,
    /// Pulse period at the greatest distance from the goal.
    pub slowest_pulse_ms: u64,
    pub turn_ms: u64,
    pub step_ms: u64,
    pub bump_blink_ms: u64,
    pub intro_frame_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    pub brightness: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightConfig {
    pub colour_policy: ColourPolicy,
    pub max_channel: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GamepadConfig {
    pub rotate_left: Vec<String>,
    pub rotate_right: Vec<String>,
    pub step: Vec<String>,
    pub toggle_map: Vec<String>,
    pub quit: Vec<String>,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    timing: TomlTiming,
    #[serde(default)]
    display: TomlDisplay,
    #[serde(default)]
    light: TomlLight,
    #[serde(default)]
    gamepad: TomlGamepad,
    #[serde(default)]
    general: TomlGeneral,
}

#[derive(Deserialize, Debug)]
struct TomlTiming {
    #[serde(default = "default_tick_rate")]
    tick_rate_ms: u64,
    #[serde(default = "default_pulse_resolution")]
    pulse_resolution_ms: u64,
    #[serde(default = "default_slowest_pulse")]
    slowest_pulse_ms: u64,
    #[serde(default = "default_turn")]
    turn_ms: u64,
    #[serde(default = "default_step")]
    step_ms: u64,
    #[serde(default = "default_bump_blink")]
    bump_blink_ms: u64,
    #[serde(default = "default_intro_frame")]
    intro_frame_ms: u64,
}

#[derive(Deserialize, Debug)]
struct TomlDisplay {
    #[serde(default = "default_brightness")]
    brightness: u8,
}

#[derive(Deserialize, Debug)]
struct TomlLight {
    #[serde(default)]
    colour_policy: ColourPolicy,
    #[serde(default = "default_max_channel")]
    max_channel: u8,
}

#[derive(Deserialize, Debug)]
struct TomlGamepad {
    #[serde(default = "default_rotate_left")]
    rotate_left: Vec<String>,
    #[serde(default = "default_rotate_right")]
    rotate_right: Vec<String>,
    #[serde(default = "default_step_buttons")]
    step: Vec<String>,
    #[serde(default = "default_toggle_map")]
    toggle_map: Vec<String>,
    #[serde(default = "default_quit")]
    quit: Vec<String>,
}

#[derive(Deserialize, Debug)]
struct TomlGeneral {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default = "default_log_file")]
    log_file: String,
    #[serde(default)]
    maze_file: Option<String>,
    #[serde(default = "default_intro")]
    intro: bool,
}

// ── Defaults ──

fn default_tick_rate() -> u64 { 20 }
fn default_pulse_resolution() -> u64 { 100 }
fn default_slowest_pulse() -> u64 { 1500 }
fn default_turn() -> u64 { 40 }
fn default_step() -> u64 { 80 }
fn default_bump_blink() -> u64 { 25 }
fn default_intro_frame() -> u64 { 90 }
fn default_brightness() -> u8 { 200 }
fn default_max_channel() -> u8 { 255 }

fn default_rotate_left() -> Vec<String> { vec!["Left".into(), "L1".into(), "X".into()] }
fn default_rotate_right() -> Vec<String> { vec!["Right".into(), "R1".into(), "B".into()] }
fn default_step_buttons() -> Vec<String> { vec!["Up".into(), "A".into()] }
fn default_toggle_map() -> Vec<String> { vec!["Y".into()] }
fn default_quit() -> Vec<String> { vec!["Select".into()] }
fn default_log_file() -> String { "mazepulse.log".into() }
fn default_intro() -> bool { true }

impl Default for TomlTiming {
    fn default() -> Self {
        TomlTiming {
            tick_rate_ms: default_tick_rate(),
            pulse_resolution_ms: default_pulse_resolution(),
            slowest_pulse_ms: default_slowest_pulse(),
            turn_ms: default_turn(),
            step_ms: default_step(),
            bump_blink_ms: default_bump_blink(),
            intro_frame_ms: default_intro_frame(),
        }
    }
}

impl Default for TomlDisplay {
    fn default() -> Self {
        TomlDisplay { brightness: default_brightness() }
    }
}

impl Default for TomlLight {
    fn default() -> Self {
        TomlLight {
            colour_policy: ColourPolicy::default(),
            max_channel: default_max_channel(),
        }
    }
}

impl Default for TomlGamepad {
    fn default() -> Self {
        TomlGamepad {
            rotate_left: default_rotate_left(),
            rotate_right: default_rotate_right(),
            step: default_step_buttons(),
            toggle_map: default_toggle_map(),
            quit: default_quit(),
        }
    }
}

impl Default for TomlGeneral {
    fn default() -> Self {
        TomlGeneral {
            seed: None,
            log_file: default_log_file(),
            maze_file: None,
            intro: default_intro(),
        }
    }
}

impl From<TomlConfig> for GameConfig {
    fn from(cfg: TomlConfig) -> Self {
        GameConfig {
            timing: TimingConfig {
                tick_rate_ms: cfg.timing.tick_rate_ms.max(1),
                pulse_resolution_ms: cfg.timing.pulse_resolution_ms,
                slowest_pulse_ms: cfg.timing.slowest_pulse_ms,
                turn_ms: cfg.timing.turn_ms,
                step_ms: cfg.timing.step_ms,
                bump_blink_ms: cfg.timing.bump_blink_ms,
                intro_frame_ms: cfg.timing.intro_frame_ms,
            },
            display: DisplayConfig {
                // zero would switch the display off entirely
                brightness: cfg.display.brightness.max(1),
            },
            light: LightConfig {
                colour_policy: cfg.light.colour_policy,
                max_channel: cfg.light.max_channel,
            },
            gamepad: GamepadConfig {
                rotate_left: cfg.gamepad.rotate_left,
                rotate_right: cfg.gamepad.rotate_right,
                step: cfg.gamepad.step,
                toggle_map: cfg.gamepad.toggle_map,
                quit: cfg.gamepad.quit,
            },
            seed: cfg.general.seed,
            log_file: PathBuf::from(cfg.general.log_file),
            maze_file: cfg.general.maze_file.map(PathBuf::from),
            intro: cfg.general.intro,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        TomlConfig::default().into()
    }
}

// ── Loading ──

impl GameConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys gracefully fall back to defaults. A file
    /// that cannot be used is handed back with the error so the caller can
    /// report it once logging is up.
    pub fn load() -> (Self, Option<(PathBuf, ConfigError)>) {
        GameConfig::load_from(&candidate_dirs())
    }

    /// First `config.toml` found in `dirs` wins.
    pub fn load_from(dirs: &[PathBuf]) -> (Self, Option<(PathBuf, ConfigError)>) {
        for dir in dirs {
            let path = dir.join("config.toml");
            if !path.exists() {
                continue;
            }
            return match GameConfig::from_file(&path) {
                Ok(cfg) => (cfg.resolve_paths(dir), None),
                Err(e) => (GameConfig::default(), Some((path, e))),
            };
        }
        (GameConfig::default(), None)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        GameConfig::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str::<TomlConfig>(text)?.into())
    }

    /// Relative maze paths are taken relative to the config file.
    fn resolve_paths(mut self, base: &Path) -> Self {
        if let Some(maze) = self.maze_file.take() {
            self.maze_file = Some(if maze.is_absolute() { maze } else { base.join(maze) });
        }
        self
    }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}
