//! Tolerance constants for audio testing.

/// Floating point rounding errors (passthrough, exact gain).
pub const FLOAT_EPSILON: f32 = 1e-6;

/// DSP processing tolerance (interpolation, blended taps).
pub const DSP_EPSILON: f32 = 1e-4;

/// Silence threshold (~-80dB).
pub const SILENCE_THRESHOLD: f32 = 0.0001;
