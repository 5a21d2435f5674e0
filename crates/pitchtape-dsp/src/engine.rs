//! Rotating-tape-head pitch shifter.
//!
//! Input is written into a circular history at unity speed. Two read taps,
//! half a grain window apart, trail the write head by a delay that drifts
//! `1 - ratio` samples per frame. Reading a drifting delay resamples the
//! signal by `ratio`, which is the pitch shift. When a tap's delay wraps
//! around the window it jumps; the triangular crossfade has faded that tap
//! to silence by then, and the other tap is at full gain.
//!
//! Duration is preserved: one frame in, one frame out. Latency is the
//! delay of the active tap, at most one window.

use std::sync::Arc;

use crate::control::PitchControl;
use crate::tape_buffer::{Channel, TapeBuffer};
use crate::window::{crossfade_gains, tap_delays, wrap_phase};
use crate::{Error, Result};

/// Grain window length in samples.
pub const DEFAULT_WINDOW_LEN: usize = 2048;

/// Seconds of history kept per channel.
pub const HISTORY_SECONDS: f64 = 2.0;

/// Sample rate assumed until the first [`PitchEngine::prepare`].
pub const DEFAULT_SAMPLE_RATE: f64 = 44100.0;

/// Dual-tap delay-line pitch shifter for mono or stereo audio.
///
/// Call [`prepare`](Self::prepare) before streaming and whenever the sample
/// rate changes. [`process`](Self::process) runs on the audio thread and
/// never allocates, locks or blocks. Pitch changes from other threads go
/// through [`control`](Self::control).
pub struct PitchEngine {
    tape: TapeBuffer,
    control: Arc<PitchControl>,
    window_len: usize,
    read_phase: f32,
    sample_rate: f64,
}

impl PitchEngine {
    pub fn new() -> Self {
        Self::build(DEFAULT_WINDOW_LEN)
    }

    /// Engine with a custom grain window.
    ///
    /// Longer windows smear transients less often but add latency. The
    /// length must be even and at least 2.
    pub fn with_window_len(window_len: usize) -> Result<Self> {
        if window_len < 2 || window_len % 2 != 0 {
            return Err(Error::InvalidWindow(format!(
                "window length {} must be even and >= 2",
                window_len
            )));
        }
        Ok(Self::build(window_len))
    }

    fn build(window_len: usize) -> Self {
        let mut engine = Self {
            tape: TapeBuffer::new(0),
            control: Arc::new(PitchControl::default()),
            window_len,
            read_phase: 0.0,
            sample_rate: DEFAULT_SAMPLE_RATE,
        };
        engine.prepare(DEFAULT_SAMPLE_RATE, 0);
        engine
    }

    /// Allocate history for `sample_rate` and reset all state.
    ///
    /// `sample_rate` must be positive. The block size is not needed by the
    /// algorithm.
    pub fn prepare(&mut self, sample_rate: f64, _block_size: usize) {
        debug_assert!(sample_rate > 0.0, "sample rate must be positive");

        self.sample_rate = sample_rate;
        let capacity = ((sample_rate * HISTORY_SECONDS) as usize).max(self.window_len + 2);
        self.tape.allocate(capacity);
        self.reset();

        tracing::debug!(
            "Prepared pitch engine: {} Hz, {} frames of history, window {}",
            sample_rate,
            capacity,
            self.window_len
        );
    }

    /// Silence the history and rewind the write pointer and read phase.
    pub fn reset(&mut self) {
        self.tape.clear();
        self.read_phase = 0.0;
    }

    /// Set the pitch shift in semitones. No-op if unchanged.
    pub fn set_pitch(&self, semitones: f32) {
        self.control.set_pitch(semitones);
    }

    /// Shared handle for setting the pitch from another thread.
    pub fn control(&self) -> Arc<PitchControl> {
        Arc::clone(&self.control)
    }

    /// Shift one block in place.
    ///
    /// `channels` holds one (mono) or two (stereo) slices of equal length.
    /// Any other channel count is a no-op. The pitch ratio is sampled once
    /// per block.
    pub fn process(&mut self, channels: &mut [&mut [f32]]) {
        debug_assert!(
            matches!(channels.len(), 1 | 2),
            "pitch engine supports mono or stereo only"
        );

        let relative_speed = 1.0 - self.control.ratio();

        match channels {
            [mono] => {
                for sample in mono.iter_mut() {
                    *sample = self.tick(*sample, *sample, relative_speed).0;
                }
            }
            [left, right] => {
                debug_assert_eq!(left.len(), right.len());
                for (l, r) in left.iter_mut().zip(right.iter_mut()) {
                    let (out_l, out_r) = self.tick(*l, *r, relative_speed);
                    *l = out_l;
                    *r = out_r;
                }
            }
            // Unsupported layout: leave every channel and the history untouched.
            _ => {}
        }
    }

    /// Shift a single stereo frame.
    #[inline]
    pub fn process_frame(&mut self, left: f32, right: f32) -> (f32, f32) {
        let relative_speed = 1.0 - self.control.ratio();
        self.tick(left, right, relative_speed)
    }

    #[inline]
    fn tick(&mut self, left: f32, right: f32, relative_speed: f32) -> (f32, f32) {
        self.tape.write(left, right);

        let window = self.window_len as f32;
        self.read_phase = wrap_phase(self.read_phase + relative_speed, window);

        let (delay1, delay2) = tap_delays(self.read_phase, window);
        let (gain1, gain2) = crossfade_gains(self.read_phase, window);

        let out_l = self.tape.read(Channel::Left, delay1) * gain1
            + self.tape.read(Channel::Left, delay2) * gain2;
        let out_r = self.tape.read(Channel::Right, delay1) * gain1
            + self.tape.read(Channel::Right, delay2) * gain2;

        self.tape.advance();

        (out_l, out_r)
    }

    #[inline]
    pub fn read_phase(&self) -> f32 {
        self.read_phase
    }

    #[inline]
    pub fn write_pos(&self) -> usize {
        self.tape.write_pos()
    }

    #[inline]
    pub fn pitch_ratio(&self) -> f32 {
        self.control.ratio()
    }

    #[inline]
    pub fn pitch_semitones(&self) -> f32 {
        self.control.semitones()
    }

    #[inline]
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    /// History capacity per channel, in frames.
    #[inline]
    pub fn buffer_capacity(&self) -> usize {
        self.tape.capacity()
    }

    #[inline]
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Delay of the fully open tap right after a reset: half a window.
    #[inline]
    pub fn latency_samples(&self) -> usize {
        self.window_len / 2
    }
}

impl Default for PitchEngine {
    fn default() -> Self {
        Self::new()
    }
}
