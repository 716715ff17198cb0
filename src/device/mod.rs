//! Contracts for the hardware the game drives: the 5x5 display, the RGB
//! indicator, the tone actuator and the clock. The game logic only talks to
//! these traits; `ui` provides terminal implementations.

pub mod bitmap;
pub mod glyph;
pub mod melody;

use std::time::Instant;

use crate::domain::colour::Rgb8;
use bitmap::Bitmap;

/// How pixel intensities are interpreted.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DisplayMode {
    /// Any non-zero pixel is fully on.
    #[default]
    BlackAndWhite,
    /// Pixels keep their intensity.
    Greyscale,
}

pub trait Display {
    fn clear(&mut self);
    /// Submit a frame for display.
    fn show(&mut self, frame: &Bitmap);
    fn set_brightness(&mut self, level: u8);
    fn set_mode(&mut self, mode: DisplayMode);
}

pub trait Indicator {
    /// The fourth channel is reserved and always passed as zero.
    fn set_colour(&mut self, rgb: Rgb8, reserved: u8);
    fn off(&mut self) {
        self.set_colour(Rgb8::default(), 0);
    }
}

pub trait Actuator {
    /// Keep sounding until `sound_off`.
    fn sound_on(&mut self, hertz: u16);
    fn sound_off(&mut self);
    /// Cooperative delay.
    fn sleep(&mut self, ms: u64);
}

/// Everything the game writes to.
pub trait Board: Display + Indicator + Actuator {}

impl<T: Display + Indicator + Actuator> Board for T {}

pub trait Clock {
    /// Monotonic milliseconds.
    fn now_ms(&self) -> u64;
}

/// Milliseconds since construction.
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock { epoch: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        SystemClock::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}
