//! Cross-thread pitch handoff.
//!
//! A control thread writes semitones; the audio thread reads the derived
//! ratio once per block. Both values live in atomics, so neither side blocks.

use pitchtape_core::AtomicFloat;

/// Semitone offset → playback-speed ratio, `2^(semitones / 12)`.
#[inline]
pub fn semitones_to_ratio(semitones: f32) -> f32 {
    2.0_f32.powf(semitones / 12.0)
}

/// Shared pitch state of one [`PitchEngine`](crate::PitchEngine).
///
/// Single writer, single reader. A reader may see a value one block late.
#[derive(Debug)]
pub struct PitchControl {
    semitones: AtomicFloat,
    ratio: AtomicFloat,
}

impl PitchControl {
    pub fn new(semitones: f32) -> Self {
        let control = Self {
            semitones: AtomicFloat::new(0.0),
            ratio: AtomicFloat::new(1.0),
        };
        control.set_pitch(semitones);
        control
    }

    /// Set the pitch shift in semitones.
    ///
    /// Recomputes the ratio only when the value changed. No range clamp is
    /// applied; values whose ratio is not a positive finite number are
    /// ignored.
    pub fn set_pitch(&self, semitones: f32) {
        if self.semitones.get_relaxed() == semitones {
            return;
        }

        let ratio = semitones_to_ratio(semitones);
        if !(ratio.is_finite() && ratio > 0.0) {
            return;
        }

        self.semitones.set(semitones);
        self.ratio.set(ratio);
    }

    #[inline]
    pub fn semitones(&self) -> f32 {
        self.semitones.get()
    }

    #[inline]
    pub fn ratio(&self) -> f32 {
        self.ratio.get()
    }
}

impl Default for PitchControl {
    fn default() -> Self {
        Self::new(0.0)
    }
}
