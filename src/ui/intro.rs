//! Title animation. Frames are produced on a worker thread and handed to
//! the main loop over a channel; the main loop shows them as they arrive
//! and returns once the worker hangs up. Once started it always runs to
//! the end.

use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::device::bitmap::Bitmap;
use crate::device::glyph::Glyph;
use crate::device::Display;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntroFrame {
    pub frame: Bitmap,
    pub hold_ms: u64,
}

/// Flash twice, show the heart, then scroll it off to the left.
pub fn frames(frame_ms: u64) -> Vec<IntroFrame> {
    let full = Glyph::Full.bitmap();
    let blank = Bitmap::new(full.width(), full.height());
    let heart = Glyph::Heart.bitmap();

    let mut out = Vec::new();
    for _ in 0..2 {
        out.push(IntroFrame { frame: full.clone(), hold_ms: frame_ms });
        out.push(IntroFrame { frame: blank.clone(), hold_ms: frame_ms });
    }
    out.push(IntroFrame { frame: heart.clone(), hold_ms: frame_ms * 4 });
    for dx in 1..=heart.width() as isize {
        out.push(IntroFrame { frame: heart.shifted(dx, 0, 0), hold_ms: frame_ms });
    }
    out
}

pub struct Intro {
    frames: Receiver<Bitmap>,
    worker: JoinHandle<()>,
}

impl Intro {
    pub fn spawn(frame_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let worker = thread::spawn(move || {
            for IntroFrame { frame, hold_ms } in frames(frame_ms) {
                if tx.send(frame).is_err() {
                    break;
                }
                thread::sleep(Duration::from_millis(hold_ms));
            }
        });
        Intro { frames: rx, worker }
    }

    /// Show every frame, returning when the animation is complete.
    pub fn play<D: Display + ?Sized>(self, display: &mut D) {
        for frame in self.frames.iter() {
            display.show(&frame);
        }
        if self.worker.join().is_err() {
            tracing::warn!("intro worker panicked");
        }
    }
}
