//! Tone sequences for the actuator.

use super::Actuator;

/// A rest.
pub const BR: u16 = 0;
pub const G: u16 = 196;
pub const H: u16 = 247;
pub const C1: u16 = 262;
pub const G1: u16 = 392;
pub const A1: u16 = 440;
pub const H1: u16 = 494;
pub const C2: u16 = 523;

pub const T16: u64 = 50;
pub const T8: u64 = 100;
pub const T4: u64 = 200;
pub const T2: u64 = 400;
pub const T1: u64 = 800;

/// Silence between notes.
const GAP_MS: u64 = 30;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tone {
    pub hertz: u16,
    pub period_ms: u64,
}

const fn tone(hertz: u16, period_ms: u64) -> Tone {
    Tone { hertz, period_ms }
}

pub const INTRO: &[Tone] = &[tone(G, T8), tone(C1, T8), tone(G1, T4), tone(C2, T2)];
pub const VICTORY: &[Tone] =
    &[tone(C1, T8), tone(G1, T8), tone(C2, T4), tone(BR, T16), tone(H1, T8), tone(C2, T2)];
pub const DEATH: &[Tone] = &[tone(A1, T4), tone(G1, T4), tone(H, T4), tone(BR, T16), tone(G, T1)];

/// Blocks until the last note has finished.
pub fn play<A: Actuator + ?Sized>(actuator: &mut A, melody: &[Tone]) {
    for t in melody {
        if t.hertz != BR {
            actuator.sound_on(t.hertz);
        } else {
            actuator.sound_off();
        }
        actuator.sleep(t.period_ms);

        actuator.sound_off();
        actuator.sleep(GAP_MS);
    }
}
