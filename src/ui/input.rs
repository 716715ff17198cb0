//! Keyboard input.
//!
//! Each button click becomes at most one command: a key counts as pressed
//! only on its transition from released to held, so auto-repeat does not
//! queue up extra commands. Terminals that report Release events end a hold
//! immediately; others fall back to a timeout.

use std::collections::HashMap;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, poll, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};

/// After this duration without a Press/Repeat event, consider the key released.
/// Only used when the terminal doesn't report Release events.
const HOLD_TIMEOUT: Duration = Duration::from_millis(160);

pub struct InputState {
    /// Timestamp of last Press/Repeat event for each key.
    last_active: HashMap<KeyCode, Instant>,

    /// Keys that went from released to held during the last drain.
    fresh_presses: Vec<KeyCode>,

    /// Raw key events collected during drain, for Ctrl+C handling.
    raw_events: Vec<KeyEvent>,

    /// Whether to honor Release events.
    honor_release: bool,
}

impl InputState {
    pub fn new(subscription: &InputSubscription) -> Self {
        InputState {
            last_active: HashMap::with_capacity(16),
            fresh_presses: Vec::with_capacity(8),
            raw_events: Vec::with_capacity(8),
            honor_release: subscription.enhanced,
        }
    }

    /// Drain all pending terminal events and update key states.
    /// Call this once per frame.
    pub fn drain_events(&mut self) {
        self.fresh_presses.clear();
        self.raw_events.clear();

        while poll(Duration::ZERO).unwrap_or(false) {
            if let Ok(Event::Key(key)) = event::read() {
                self.raw_events.push(key);
                match key.kind {
                    KeyEventKind::Release if self.honor_release => {
                        self.last_active.remove(&key.code);
                    }
                    KeyEventKind::Release => {}
                    _ => {
                        let was_held = self.is_held(key.code);
                        self.last_active.insert(key.code, Instant::now());
                        if !was_held {
                            self.fresh_presses.push(key.code);
                        }
                    }
                }
            }
        }

        let now = Instant::now();
        self.last_active.retain(|_, t| now.duration_since(*t) < HOLD_TIMEOUT);
    }

    /// Throw away everything that arrived since the last drain. Clicks made
    /// while feedback was playing are dropped, not queued.
    pub fn discard_pending(&mut self) {
        while poll(Duration::ZERO).unwrap_or(false) {
            if let Ok(Event::Key(key)) = event::read() {
                if key.kind != KeyEventKind::Release {
                    self.last_active.insert(key.code, Instant::now());
                }
            }
        }
        self.fresh_presses.clear();
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.last_active
            .get(&code)
            .map(|t| t.elapsed() < HOLD_TIMEOUT)
            .unwrap_or(false)
    }

    /// Was this key freshly pressed this frame? (edge trigger)
    pub fn was_pressed(&self, code: KeyCode) -> bool {
        self.fresh_presses.contains(&code)
    }

    pub fn any_pressed(&self, codes: &[KeyCode]) -> bool {
        codes.iter().any(|c| self.was_pressed(*c))
    }

    pub fn ctrl_c_pressed(&self) -> bool {
        self.raw_events.iter().any(|k| {
            k.modifiers.contains(KeyModifiers::CONTROL)
                && (k.code == KeyCode::Char('c') || k.code == KeyCode::Char('C'))
        })
    }
}

/// Keyboard registration for one game run. Asks the terminal for press and
/// release reporting where supported; undone on drop.
pub struct InputSubscription {
    enhanced: bool,
}

impl InputSubscription {
    pub fn register() -> io::Result<Self> {
        let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced {
            execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        tracing::debug!(enhanced, "input registered");
        Ok(InputSubscription { enhanced })
    }
}

impl Drop for InputSubscription {
    fn drop(&mut self) {
        if self.enhanced {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
        }
        tracing::debug!("input released");
    }
}
