//! Grain window math for the dual-tap crossfade.
//!
//! The two read taps sit half a window apart. With a triangular window any
//! two points 0.5 apart in the normalized domain have gains summing to 1:
//! for `x < 0.5`, `2x + 2(1 - (x + 0.5)) = 1`.

/// Triangular window over normalized position `x` in `[0, 1)`.
///
/// Rises 0 → 1 over the first half, falls 1 → 0 over the second.
#[inline]
pub fn triangular_gain(x: f32) -> f32 {
    if x < 0.5 {
        x * 2.0
    } else {
        (1.0 - x) * 2.0
    }
}

/// Wrap a read phase into `[0, window_len)`.
///
/// Normal pitch ratios move the phase by less than one window per sample,
/// so the add/subtract loops run at most once. Far-out values (extreme
/// ratios) are reduced with `rem_euclid` first to keep the loops bounded.
#[inline]
pub fn wrap_phase(mut phase: f32, window_len: f32) -> f32 {
    if phase.abs() >= window_len * 4.0 {
        phase = phase.rem_euclid(window_len);
    }
    while phase < 0.0 {
        phase += window_len;
    }
    while phase >= window_len {
        phase -= window_len;
    }
    phase
}

/// Delays of the two taps for a given read phase.
#[inline]
pub fn tap_delays(phase: f32, window_len: f32) -> (f32, f32) {
    let mut second = phase + window_len * 0.5;
    if second >= window_len {
        second -= window_len;
    }
    (phase, second)
}

/// Crossfade gains of the two taps for a given read phase.
#[inline]
pub fn crossfade_gains(phase: f32, window_len: f32) -> (f32, f32) {
    let (d1, d2) = tap_delays(phase, window_len);
    (
        triangular_gain(d1 / window_len),
        triangular_gain(d2 / window_len),
    )
}
