//! Tone actuator: a continuous sine tone via rodio, switched on and off.
//!
//! Compile with `--no-default-features` or without "sound" feature
//! to disable audio entirely (the stub SoundEngine does nothing).

#[cfg(feature = "sound")]
mod inner {
    use rodio::source::SineWave;
    use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

    const VOLUME: f32 = 0.2;

    pub struct SoundEngine {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        sink: Option<Sink>,
    }

    impl SoundEngine {
        /// None when no audio device is available.
        pub fn new() -> Option<Self> {
            let (stream, handle) = OutputStream::try_default().ok()?;
            Some(SoundEngine { _stream: stream, handle, sink: None })
        }

        /// Start a tone; replaces any tone already playing.
        pub fn tone_on(&mut self, hertz: u16) {
            self.tone_off();
            match Sink::try_new(&self.handle) {
                Ok(sink) => {
                    sink.append(SineWave::new(hertz as f32).amplify(VOLUME));
                    self.sink = Some(sink);
                }
                Err(e) => tracing::debug!(error = %e, "no sink for tone"),
            }
        }

        pub fn tone_off(&mut self) {
            if let Some(sink) = self.sink.take() {
                sink.stop();
            }
        }
    }
}

// ════════════════════════════════════════════════════════════
//  Public API: no-ops when the sound feature is off
// ════════════════════════════════════════════════════════════

#[cfg(feature = "sound")]
pub use inner::SoundEngine;

#[cfg(not(feature = "sound"))]
pub struct SoundEngine;

#[cfg(not(feature = "sound"))]
impl SoundEngine {
    pub fn new() -> Option<Self> { Some(SoundEngine) }
    pub fn tone_on(&mut self, _hertz: u16) {}
    pub fn tone_off(&mut self) {}
}
