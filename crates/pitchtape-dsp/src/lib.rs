//! RT-safe pitch shifting: a circular history read by two crossfaded,
//! phase-drifting taps. Pitch changes cross threads through lock-free atomics.

mod error;
pub use error::{Error, Result};

mod control;
pub use control::{semitones_to_ratio, PitchControl};

mod engine;
pub use engine::{PitchEngine, DEFAULT_SAMPLE_RATE, DEFAULT_WINDOW_LEN, HISTORY_SECONDS};

mod tape_buffer;
pub use tape_buffer::{Channel, TapeBuffer};

pub mod window;
pub use window::{crossfade_gains, triangular_gain};
