#![allow(dead_code)]

use mazepulse::{
    device::{bitmap::Bitmap, Actuator, Display, DisplayMode, Indicator},
    domain::{colour::Rgb8, maze::Level},
    sim::session::{GameSession, Settings},
};
use rand::{rngs::SmallRng, SeedableRng};

/// Everything a board was asked to do, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardCall {
    Clear,
    Show(Bitmap),
    Brightness(u8),
    Mode(DisplayMode),
    Colour(Rgb8),
    SoundOn(u16),
    SoundOff,
    Sleep(u64),
}

#[derive(Default)]
pub struct FakeBoard {
    pub calls: Vec<BoardCall>,
}

impl FakeBoard {
    pub fn shown(&self) -> Vec<&Bitmap> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                BoardCall::Show(b) => Some(b),
                _ => None,
            })
            .collect()
    }

    pub fn tones(&self) -> Vec<u16> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                BoardCall::SoundOn(hz) => Some(*hz),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: &BoardCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
}

impl Display for FakeBoard {
    fn clear(&mut self) {
        self.calls.push(BoardCall::Clear);
    }
    fn show(&mut self, frame: &Bitmap) {
        self.calls.push(BoardCall::Show(frame.clone()));
    }
    fn set_brightness(&mut self, level: u8) {
        self.calls.push(BoardCall::Brightness(level));
    }
    fn set_mode(&mut self, mode: DisplayMode) {
        self.calls.push(BoardCall::Mode(mode));
    }
}

impl Indicator for FakeBoard {
    fn set_colour(&mut self, rgb: Rgb8, _reserved: u8) {
        self.calls.push(BoardCall::Colour(rgb));
    }
}

impl Actuator for FakeBoard {
    fn sound_on(&mut self, hertz: u16) {
        self.calls.push(BoardCall::SoundOn(hertz));
    }
    fn sound_off(&mut self) {
        self.calls.push(BoardCall::SoundOff);
    }
    fn sleep(&mut self, ms: u64) {
        self.calls.push(BoardCall::Sleep(ms));
    }
}

pub fn builtin_session() -> GameSession {
    session_for(Level::builtin().unwrap())
}

pub fn session_for(level: Level) -> GameSession {
    GameSession::new(level, Settings::default(), SmallRng::seed_from_u64(7), 0)
}

pub fn parse_level(text: &str) -> Level {
    Level::parse(text).unwrap()
}

/// Seven-by-seven room with a single wall column, a trap and a dark patch.
///
/// ```text
///   0123456
/// 0 9999999
/// 1 9000009
/// 2 9090209
/// 3 9000009
/// 4 9030109
/// 5 9000009
/// 6 9999999
/// ```
pub const ROOM: &str = "\
# Room
@ 3,3 N
* 1,5
9999999
9000009
9090209
9000009
9030109
9000009
9999999
";
