//! Parameter range and scaling for host automation.
//!
//! Hosts automate parameters as normalized values in `0.0..=1.0`. A
//! [`ParameterRange`] maps those onto the real value the DSP consumes.
//!
//! # Example
//!
//! ```
//! use pitchtape_core::ParameterRange;
//!
//! // Pitch shift: two octaves either way
//! let pitch = ParameterRange::linear(-24.0, 24.0, 0.0);
//!
//! assert_eq!(pitch.denormalize(0.5), 0.0);
//! assert_eq!(pitch.normalize(24.0), 1.0);
//! ```

/// How a parameter value is scaled between normalized (0-1) and real values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterScale {
    /// `real = min + normalized * (max - min)`
    #[default]
    Linear,

    /// On/off toggle (normalized < 0.5 = off, >= 0.5 = on)
    ///
    /// Denormalizes to `min` (off) or `max` (on).
    Toggle,
}

/// Valid range, default and scaling of one parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterRange {
    pub min: f32,
    pub max: f32,
    /// Default real value, always inside `min..=max`.
    pub default: f32,
    pub scale: ParameterScale,
}

impl ParameterRange {
    /// # Panics
    ///
    /// Panics in debug mode if `max <= min`.
    pub fn new(min: f32, max: f32, default: f32, scale: ParameterScale) -> Self {
        debug_assert!(max > min, "max must be greater than min");

        Self {
            min,
            max,
            default: default.clamp(min, max),
            scale,
        }
    }

    pub fn linear(min: f32, max: f32, default: f32) -> Self {
        Self::new(min, max, default, ParameterScale::Linear)
    }

    /// Toggle parameter stored as `0.0` (off) / `1.0` (on).
    pub fn toggle(default_on: bool) -> Self {
        Self::new(
            0.0,
            1.0,
            if default_on { 1.0 } else { 0.0 },
            ParameterScale::Toggle,
        )
    }

    /// Convert a real value to normalized (0.0-1.0).
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let value = self.clamp(value);
        let range = self.span();

        if range <= 0.0 {
            return 0.0;
        }

        match self.scale {
            ParameterScale::Linear => (value - self.min) / range,
            ParameterScale::Toggle => {
                if value >= (self.min + self.max) / 2.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Convert a normalized value (0.0-1.0) to a real value.
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        let normalized = if normalized.is_nan() {
            0.0
        } else {
            normalized.clamp(0.0, 1.0)
        };

        match self.scale {
            ParameterScale::Linear => self.min + normalized * self.span(),
            ParameterScale::Toggle => {
                if normalized >= 0.5 {
                    self.max
                } else {
                    self.min
                }
            }
        }
    }

    /// Clamp a real value into range. NaN maps to the default.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        }
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    #[inline]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}

impl Default for ParameterRange {
    fn default() -> Self {
        Self::linear(0.0, 1.0, 0.5)
    }
}
