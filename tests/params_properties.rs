//! Host-facing parameter invariants over arbitrary automation values.

use pitchtape::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalized_automation_roundtrips(normalized in 0.0f32..=1.0) {
        let params = PitchParams::new();

        for param in [ParamId::Pitch, ParamId::Mix] {
            params.set_normalized(param, normalized);
            let back = params.normalized(param);
            prop_assert!((back - normalized).abs() < 1e-5, "{:?}: {} -> {}", param, normalized, back);
        }
    }

    #[test]
    fn any_host_value_lands_in_range(pitch in -1000.0f32..1000.0, mix in -10.0f32..10.0) {
        let params = PitchParams::new();
        params.set_pitch(pitch);
        params.set_mix(mix);

        prop_assert!((-24.0..=24.0).contains(&params.pitch()));
        prop_assert!((0.0..=1.0).contains(&params.mix()));
        prop_assert!((0.0..=1.0).contains(&params.normalized(ParamId::Pitch)));
    }

    #[test]
    fn saved_state_restores_values(pitch in -24.0f32..=24.0, mix in 0.0f32..=1.0, bypass in any::<bool>()) {
        let source = PitchParams::new();
        source.apply(&ParamValues { pitch, mix, bypass });

        let bytes = PluginState::save(&source).unwrap();
        let target = PitchParams::new();
        PluginState::load(&target, &bytes).unwrap();

        let restored = target.snapshot();
        prop_assert!((restored.pitch - pitch).abs() < 1e-6);
        prop_assert!((restored.mix - mix).abs() < 1e-6);
        prop_assert_eq!(restored.bypass, bypass);
    }
}

#[test]
fn test_toggle_automation_thresholds_at_half() {
    let params = PitchParams::new();

    params.set_normalized(ParamId::Bypass, 0.49);
    assert!(!params.bypass());
    params.set_normalized(ParamId::Bypass, 0.5);
    assert!(params.bypass());
    assert_eq!(params.normalized(ParamId::Bypass), 1.0);
}
