//! Persisted plugin state.
//!
//! Only parameter values are stored; engine history is never persisted and
//! is rebuilt by `prepare` / `reset`. The document is a flat JSON object:
//!
//! ```json
//! { "type": "Parameters", "PITCH": 0.0, "MIX": 1.0, "BYPASS": false }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::params::{ParamValues, PitchParams};
use crate::{Error, Result};

/// Tag identifying a parameter-state document.
pub const STATE_TYPE: &str = "Parameters";

fn default_state_type() -> String {
    STATE_TYPE.to_string()
}

fn default_pitch() -> f32 {
    ParamValues::default().pitch
}

fn default_mix() -> f32 {
    ParamValues::default().mix
}

/// Serializable snapshot of all parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginState {
    #[serde(rename = "type", default = "default_state_type")]
    pub state_type: String,

    #[serde(rename = "PITCH", default = "default_pitch")]
    pub pitch: f32,

    #[serde(rename = "MIX", default = "default_mix")]
    pub mix: f32,

    #[serde(rename = "BYPASS", default)]
    pub bypass: bool,
}

impl Default for PluginState {
    fn default() -> Self {
        Self::from_values(&ParamValues::default())
    }
}

impl PluginState {
    pub fn from_values(values: &ParamValues) -> Self {
        Self {
            state_type: STATE_TYPE.to_string(),
            pitch: values.pitch,
            mix: values.mix,
            bypass: values.bypass,
        }
    }

    pub fn capture(params: &PitchParams) -> Self {
        Self::from_values(&params.snapshot())
    }

    pub fn values(&self) -> ParamValues {
        ParamValues {
            pitch: self.pitch,
            mix: self.mix,
            bypass: self.bypass,
        }
    }

    /// Write these values into `params`, clamped to each parameter's range.
    ///
    /// Documents of another type are rejected and `params` is left as is.
    pub fn apply(&self, params: &PitchParams) -> Result<()> {
        if self.state_type != STATE_TYPE {
            warn!("Ignoring state of type '{}'", self.state_type);
            return Err(Error::StateTypeMismatch {
                expected: STATE_TYPE.to_string(),
                found: self.state_type.clone(),
            });
        }

        params.apply(&self.values());
        debug!(
            "Restored state: pitch={} mix={} bypass={}",
            params.pitch(),
            params.mix(),
            params.bypass()
        );
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the current parameter values for the host.
    pub fn save(params: &PitchParams) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&Self::capture(params))?)
    }

    /// Restore parameter values from bytes produced by [`save`](Self::save).
    pub fn load(params: &PitchParams, data: &[u8]) -> Result<()> {
        let state: Self = serde_json::from_slice(data)?;
        state.apply(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_and_apply() {
        let source = PitchParams::new();
        source.set_pitch(-7.0);
        source.set_mix(0.4);
        source.set_bypass(true);

        let state = PluginState::capture(&source);
        let target = PitchParams::new();
        state.apply(&target).unwrap();

        assert_eq!(target.snapshot(), source.snapshot());
    }

    #[test]
    fn test_json_uses_parameter_ids() {
        let state = PluginState::from_values(&ParamValues {
            pitch: 3.0,
            mix: 0.5,
            bypass: true,
        });
        let value: serde_json::Value = serde_json::from_str(&state.to_json().unwrap()).unwrap();

        assert_eq!(value["type"], "Parameters");
        assert_eq!(value["PITCH"], 3.0);
        assert_eq!(value["MIX"], 0.5);
        assert_eq!(value["BYPASS"], true);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let state = PluginState::from_json(r#"{ "PITCH": 12.0 }"#).unwrap();
        assert_eq!(state.state_type, STATE_TYPE);
        assert_eq!(state.pitch, 12.0);
        assert_eq!(state.mix, 1.0);
        assert!(!state.bypass);
    }

    #[test]
    fn test_values_clamped_on_apply() {
        let params = PitchParams::new();
        let state = PluginState::from_json(r#"{ "PITCH": 99.0, "MIX": -3.0 }"#).unwrap();
        state.apply(&params).unwrap();

        assert_eq!(params.pitch(), 24.0);
        assert_eq!(params.mix(), 0.0);
    }

    #[test]
    fn test_type_mismatch_leaves_params() {
        let params = PitchParams::new();
        params.set_pitch(2.0);

        let state = PluginState::from_json(r#"{ "type": "Presets", "PITCH": -5.0 }"#).unwrap();
        let err = state.apply(&params).unwrap_err();

        assert!(matches!(err, Error::StateTypeMismatch { ref found, .. } if found == "Presets"));
        assert_eq!(params.pitch(), 2.0);
    }

    #[test]
    fn test_malformed_json() {
        let params = PitchParams::new();
        let err = PluginState::load(&params, b"{ not json").unwrap_err();
        assert!(matches!(err, Error::State(_)));
    }

    #[test]
    fn test_save_load_bytes() {
        let source = PitchParams::new();
        source.set_pitch(9.5);
        source.set_mix(0.75);

        let bytes = PluginState::save(&source).unwrap();
        let target = PitchParams::new();
        PluginState::load(&target, &bytes).unwrap();

        assert_eq!(target.pitch(), 9.5);
        assert_eq!(target.mix(), 0.75);
        assert!(!target.bypass());
    }
}
