//! Sound and animation for game events. Runs after the state change it
//! reports and blocks until done, so the next command sees a quiet board.

use crate::config::TimingConfig;
use crate::device::melody::{self, Tone};
use crate::device::Board;
use crate::domain::colour::{Colour, Rgb8};
use crate::sim::event::GameEvent;
use crate::sim::session::GameSession;
use crate::sim::view;

pub const TURN_HZ: u16 = 660;
pub const STEP_HZ: u16 = 330;
const BUMP_BLINKS: usize = 3;
const WARBLE: [u16; 2] = [880, 587];

pub fn actuate<B: Board + ?Sized>(board: &mut B, session: &GameSession, events: &[GameEvent], timing: &TimingConfig) {
    for event in events {
        match event {
            GameEvent::Turned { .. } => beep(board, TURN_HZ, timing.turn_ms),
            GameEvent::Stepped { .. } => beep(board, STEP_HZ, timing.step_ms),
            GameEvent::Bumped => blink(board, session, timing.bump_blink_ms),
            GameEvent::Redirected { .. } => {
                let tones: Vec<Tone> = WARBLE
                    .iter()
                    .map(|&hertz| Tone { hertz, period_ms: timing.turn_ms })
                    .collect();
                melody::play(board, &tones);
            }
            GameEvent::ViewChanged { .. } => {}
            GameEvent::Won => {
                show_outcome(board, session);
                board.set_colour(Colour::WHITE.to_rgb8(1.0, session.settings.max_channel), 0);
                melody::play(board, melody::VICTORY);
            }
            GameEvent::Died => {
                show_outcome(board, session);
                board.set_colour(Rgb8::default(), 0);
                melody::play(board, melody::DEATH);
            }
        }
    }
}

fn beep<B: Board + ?Sized>(board: &mut B, hertz: u16, ms: u64) {
    board.sound_on(hertz);
    board.sleep(ms);
    board.sound_off();
}

/// Flash the current view off and on.
fn blink<B: Board + ?Sized>(board: &mut B, session: &GameSession, ms: u64) {
    let frame = view::current_frame(session);
    for _ in 0..BUMP_BLINKS {
        board.clear();
        board.sleep(ms);
        board.show(&frame);
        board.sleep(ms);
    }
}

fn show_outcome<B: Board + ?Sized>(board: &mut B, session: &GameSession) {
    if let Some(glyph) = view::outcome_glyph(session.outcome) {
        board.set_brightness(session.settings.brightness);
        board.show(&glyph.bitmap());
    }
}
