//! Test helpers and fixtures for pitchtape integration tests.
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `FLOAT_EPSILON` (1e-6): Exact operations (passthrough, unity gain)
//! - `DSP_EPSILON` (1e-4): Interpolated / blended output
//! - `SILENCE_THRESHOLD` (0.0001): Silence detection (-80dB)

#![allow(dead_code)]

pub mod tolerances;

use pitchtape::prelude::*;

/// Default test sample rate (matches common hardware)
pub const TEST_SAMPLE_RATE: f64 = 48000.0;

/// Standard buffer size for deterministic testing
pub const TEST_BUFFER_SIZE: usize = 512;

/// Route `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Prepared processor with the given layout at the test sample rate.
pub fn test_processor(layout: ChannelLayout) -> PitchProcessor {
    init_tracing();
    let mut processor = PitchProcessor::builder()
        .build()
        .expect("Failed to build processor");
    processor
        .prepare(EngineConfig::new(TEST_SAMPLE_RATE, TEST_BUFFER_SIZE, layout))
        .expect("Failed to prepare processor");
    processor
}

/// Prepared bare engine at the test sample rate.
pub fn test_engine(semitones: f32) -> PitchEngine {
    let mut engine = PitchEngine::new();
    engine.prepare(TEST_SAMPLE_RATE, TEST_BUFFER_SIZE);
    engine.set_pitch(semitones);
    engine
}

/// Generate a test signal: sine wave at given frequency for specified samples.
pub fn generate_sine(frequency: f64, sample_rate: f64, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate;
            (2.0 * std::f64::consts::PI * frequency * t).sin() as f32
        })
        .collect()
}

/// Generate white noise (random samples in -1..1).
pub fn generate_noise(num_samples: usize, seed: u64) -> Vec<f32> {
    // Simple LCG for reproducible "random" noise
    let mut rng = seed;
    (0..num_samples)
        .map(|_| {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((rng >> 33) as f32 / u32::MAX as f32) * 2.0 - 1.0
        })
        .collect()
}

/// Calculate peak amplitude of a signal.
pub fn peak(samples: &[f32]) -> f32 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f32, |a, b| a.max(b))
}

/// Check if two signals are approximately equal within tolerance.
pub fn signals_approx_equal(a: &[f32], b: &[f32], tolerance: f32) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tolerance)
}

/// Assert that a signal is approximately silent (all values near zero).
pub fn assert_silence(samples: &[f32], tolerance: f32) {
    let max = peak(samples);
    assert!(
        max <= tolerance,
        "Expected silence, but peak amplitude was {}",
        max
    );
}

/// Run a mono signal through the processor block by block.
pub fn run_mono(processor: &mut PitchProcessor, signal: &mut [f32]) {
    for block in signal.chunks_mut(TEST_BUFFER_SIZE) {
        processor.process(&mut [block]);
    }
}

/// Run a mono signal through a bare engine block by block.
pub fn run_engine(engine: &mut PitchEngine, signal: &mut [f32]) {
    for block in signal.chunks_mut(TEST_BUFFER_SIZE) {
        engine.process(&mut [block]);
    }
}
