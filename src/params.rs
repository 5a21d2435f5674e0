//! Host-facing parameter set: pitch, mix and bypass.
//!
//! Written by a control thread (UI, automation, state restore) and read by
//! the audio thread once per block. Every cell is a lock-free atomic.

use crate::core::{AtomicFlag, AtomicFloat, ParameterRange};
use crate::{Error, Result};

pub const PITCH_ID: &str = "PITCH";
pub const MIX_ID: &str = "MIX";
pub const BYPASS_ID: &str = "BYPASS";

/// Identifies one parameter of [`PitchParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamId {
    Pitch,
    Mix,
    Bypass,
}

impl ParamId {
    pub fn all() -> &'static [ParamId] {
        &[ParamId::Pitch, ParamId::Mix, ParamId::Bypass]
    }

    /// Stable id used in persisted state and by hosts.
    pub fn id(&self) -> &'static str {
        match self {
            ParamId::Pitch => PITCH_ID,
            ParamId::Mix => MIX_ID,
            ParamId::Bypass => BYPASS_ID,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ParamId::Pitch => "Pitch",
            ParamId::Mix => "Mix",
            ParamId::Bypass => "Bypass",
        }
    }

    pub fn from_id(id: &str) -> Result<Self> {
        match id {
            PITCH_ID => Ok(ParamId::Pitch),
            MIX_ID => Ok(ParamId::Mix),
            BYPASS_ID => Ok(ParamId::Bypass),
            other => Err(Error::UnknownParameter(other.to_string())),
        }
    }

    pub fn range(&self) -> ParameterRange {
        match self {
            // Semitones, two octaves either way
            ParamId::Pitch => ParameterRange::linear(-24.0, 24.0, 0.0),
            ParamId::Mix => ParameterRange::linear(0.0, 1.0, 1.0),
            ParamId::Bypass => ParameterRange::toggle(false),
        }
    }
}

/// Plain copy of all parameter values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamValues {
    pub pitch: f32,
    pub mix: f32,
    pub bypass: bool,
}

impl Default for ParamValues {
    fn default() -> Self {
        Self {
            pitch: ParamId::Pitch.range().default,
            mix: ParamId::Mix.range().default,
            bypass: false,
        }
    }
}

/// Shared parameter set. Wrap in an `Arc` to hand to the control side.
#[derive(Debug)]
pub struct PitchParams {
    pitch: AtomicFloat,
    mix: AtomicFloat,
    bypass: AtomicFlag,
    pitch_range: ParameterRange,
    mix_range: ParameterRange,
    bypass_range: ParameterRange,
}

impl PitchParams {
    pub fn new() -> Self {
        let defaults = ParamValues::default();
        Self {
            pitch: AtomicFloat::new(defaults.pitch),
            mix: AtomicFloat::new(defaults.mix),
            bypass: AtomicFlag::new(defaults.bypass),
            pitch_range: ParamId::Pitch.range(),
            mix_range: ParamId::Mix.range(),
            bypass_range: ParamId::Bypass.range(),
        }
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch.get()
    }

    #[inline]
    pub fn mix(&self) -> f32 {
        self.mix.get()
    }

    #[inline]
    pub fn bypass(&self) -> bool {
        self.bypass.get()
    }

    /// Clamped to `[-24, 24]` semitones.
    pub fn set_pitch(&self, semitones: f32) {
        self.pitch.set(self.pitch_range.clamp(semitones));
    }

    /// Clamped to `[0, 1]`.
    pub fn set_mix(&self, mix: f32) {
        self.mix.set(self.mix_range.clamp(mix));
    }

    pub fn set_bypass(&self, bypass: bool) {
        self.bypass.set(bypass);
    }

    pub fn range(&self, param: ParamId) -> &ParameterRange {
        match param {
            ParamId::Pitch => &self.pitch_range,
            ParamId::Mix => &self.mix_range,
            ParamId::Bypass => &self.bypass_range,
        }
    }

    /// Set a parameter from a host-normalized value in `0..=1`.
    pub fn set_normalized(&self, param: ParamId, normalized: f32) {
        let value = self.range(param).denormalize(normalized);
        match param {
            ParamId::Pitch => self.set_pitch(value),
            ParamId::Mix => self.set_mix(value),
            ParamId::Bypass => self.set_bypass(value >= 0.5),
        }
    }

    /// Current value of a parameter, normalized to `0..=1`.
    pub fn normalized(&self, param: ParamId) -> f32 {
        let value = match param {
            ParamId::Pitch => self.pitch(),
            ParamId::Mix => self.mix(),
            ParamId::Bypass => {
                if self.bypass() {
                    1.0
                } else {
                    0.0
                }
            }
        };
        self.range(param).normalize(value)
    }

    /// [`set_normalized`](Self::set_normalized) addressed by string id.
    pub fn set_normalized_by_id(&self, id: &str, normalized: f32) -> Result<()> {
        self.set_normalized(ParamId::from_id(id)?, normalized);
        Ok(())
    }

    pub fn snapshot(&self) -> ParamValues {
        ParamValues {
            pitch: self.pitch(),
            mix: self.mix(),
            bypass: self.bypass(),
        }
    }

    pub fn apply(&self, values: &ParamValues) {
        self.set_pitch(values.pitch);
        self.set_mix(values.mix);
        self.set_bypass(values.bypass);
    }

    pub fn reset_to_defaults(&self) {
        self.apply(&ParamValues::default());
    }
}

impl Default for PitchParams {
    fn default() -> Self {
        Self::new()
    }
}
