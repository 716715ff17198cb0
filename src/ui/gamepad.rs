//! Gamepad input using gilrs.
//!
//! Button mapping is loaded from config.toml via `load_button_config()`.
//! Default mapping:
//!   D-pad Left / L1 / X    →  Rotate left
//!   D-pad Right / R1 / B   →  Rotate right
//!   D-pad Up / A           →  Step forward
//!   Y                      →  Toggle map
//!   Select                 →  Quit

#[cfg(feature = "gamepad")]
use gilrs::{Button, EventType, Gilrs};

use crate::config::GamepadConfig;
use crate::sim::command::Command;

/// Logical button identifiers (one per physical button).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Btn {
    A,       // South
    B,       // East
    X,       // West
    Y,       // North
    L1,      // LeftTrigger
    R1,      // RightTrigger
    Start,
    Select,
    DPadUp,
    DPadLeft,
    DPadRight,
}

const BTN_COUNT: usize = 11;

impl Btn {
    pub fn from_name(s: &str) -> Option<Btn> {
        match s.to_uppercase().as_str() {
            "A" | "SOUTH"  => Some(Btn::A),
            "B" | "EAST"   => Some(Btn::B),
            "X" | "WEST"   => Some(Btn::X),
            "Y" | "NORTH"  => Some(Btn::Y),
            "L1" | "LB" | "LEFTTRIGGER"  => Some(Btn::L1),
            "R1" | "RB" | "RIGHTTRIGGER" => Some(Btn::R1),
            "START" => Some(Btn::Start),
            "SELECT" | "BACK" => Some(Btn::Select),
            "UP" | "DPADUP" => Some(Btn::DPadUp),
            "LEFT" | "DPADLEFT" => Some(Btn::DPadLeft),
            "RIGHT" | "DPADRIGHT" => Some(Btn::DPadRight),
            _ => None,
        }
    }

    #[cfg(feature = "gamepad")]
    fn from_gilrs(btn: Button) -> Option<Btn> {
        match btn {
            Button::South     => Some(Btn::A),
            Button::East      => Some(Btn::B),
            Button::West      => Some(Btn::X),
            Button::North     => Some(Btn::Y),
            Button::LeftTrigger  => Some(Btn::L1),
            Button::RightTrigger => Some(Btn::R1),
            Button::Start     => Some(Btn::Start),
            Button::Select    => Some(Btn::Select),
            Button::DPadUp    => Some(Btn::DPadUp),
            Button::DPadLeft  => Some(Btn::DPadLeft),
            Button::DPadRight => Some(Btn::DPadRight),
            _ => None,
        }
    }
}

/// Action-to-button mapping (loaded from config).
#[derive(Debug)]
struct ActionMap {
    rotate_left: Vec<Btn>,
    rotate_right: Vec<Btn>,
    step: Vec<Btn>,
    toggle_map: Vec<Btn>,
    quit: Vec<Btn>,
}

impl Default for ActionMap {
    fn default() -> Self {
        ActionMap {
            rotate_left:  vec![Btn::DPadLeft, Btn::L1, Btn::X],
            rotate_right: vec![Btn::DPadRight, Btn::R1, Btn::B],
            step:         vec![Btn::DPadUp, Btn::A],
            toggle_map:   vec![Btn::Y],
            quit:         vec![Btn::Select],
        }
    }
}

pub struct GamepadState {
    #[cfg(feature = "gamepad")]
    gilrs: Option<Gilrs>,

    /// Buttons pressed since the last `update`, indexed by Btn.
    just_pressed: [bool; BTN_COUNT],

    action_map: ActionMap,

    pub connected: bool,
}

impl GamepadState {
    pub fn new() -> Self {
        #[cfg(feature = "gamepad")]
        let (gilrs_opt, connected) = match Gilrs::new() {
            Ok(g) => {
                let has_pad = g.gamepads().next().is_some();
                (Some(g), has_pad)
            }
            Err(_) => (None, false),
        };
        #[cfg(not(feature = "gamepad"))]
        let connected = false;

        GamepadState {
            #[cfg(feature = "gamepad")]
            gilrs: gilrs_opt,
            just_pressed: [false; BTN_COUNT],
            action_map: ActionMap::default(),
            connected,
        }
    }

    /// Load button mapping from config. Empty or unrecognised lists keep
    /// the default for that action.
    pub fn load_button_config(&mut self, cfg: &GamepadConfig) {
        fn parse_list(names: &[String], slot: &mut Vec<Btn>) {
            let parsed: Vec<Btn> = names.iter().filter_map(|s| Btn::from_name(s)).collect();
            if !parsed.is_empty() {
                *slot = parsed;
            }
        }
        let map = &mut self.action_map;
        parse_list(&cfg.rotate_left, &mut map.rotate_left);
        parse_list(&cfg.rotate_right, &mut map.rotate_right);
        parse_list(&cfg.step, &mut map.step);
        parse_list(&cfg.toggle_map, &mut map.toggle_map);
        parse_list(&cfg.quit, &mut map.quit);
    }

    pub fn update(&mut self) {
        self.just_pressed = [false; BTN_COUNT];

        #[cfg(feature = "gamepad")]
        self.poll_gilrs();
    }

    /// Drop presses that arrived while feedback was playing.
    pub fn discard_pending(&mut self) {
        self.update();
        self.just_pressed = [false; BTN_COUNT];
    }

    #[cfg(feature = "gamepad")]
    fn poll_gilrs(&mut self) {
        let gilrs = match &mut self.gilrs {
            Some(g) => g,
            None => return,
        };

        let events: Vec<_> = std::iter::from_fn(|| gilrs.next_event()).collect();

        for event in events {
            match event.event {
                EventType::ButtonPressed(btn, _) => {
                    self.connected = true;
                    if let Some(b) = Btn::from_gilrs(btn) {
                        self.just_pressed[b as usize] = true;
                    }
                }
                EventType::Connected => self.connected = true,
                EventType::Disconnected => self.connected = false,
                _ => {}
            }
        }
    }

    fn any_just_pressed(&self, btns: &[Btn]) -> bool {
        btns.iter().any(|&b| self.just_pressed[b as usize])
    }

    /// The first mapped command pressed this frame.
    pub fn command(&self) -> Option<Command> {
        let map = &self.action_map;
        [
            (&map.rotate_left, Command::RotateLeft),
            (&map.rotate_right, Command::RotateRight),
            (&map.step, Command::StepForward),
            (&map.toggle_map, Command::ToggleMap),
        ]
        .into_iter()
        .find(|(btns, _)| self.any_just_pressed(btns))
        .map(|(_, cmd)| cmd)
    }

    pub fn quit_pressed(&self) -> bool {
        self.any_just_pressed(&self.action_map.quit)
    }

    pub fn restart_pressed(&self) -> bool {
        self.any_just_pressed(&[Btn::Start]) || self.any_just_pressed(&self.action_map.step)
    }
}

impl Default for GamepadState {
    fn default() -> Self {
        GamepadState::new()
    }
}
