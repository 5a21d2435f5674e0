//! Shared building blocks for the pitchtape workspace.
//!
//! - [`AtomicFloat`] / [`AtomicFlag`]: lock-free parameter cells for
//!   control thread → audio thread handoff
//! - [`ParameterRange`]: normalized ↔ real value mapping for host automation
//! - [`EngineConfig`]: stream setup (sample rate, block size, channel layout)

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub use config::{ChannelLayout, EngineConfig, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE};

pub(crate) mod lockfree;
pub use lockfree::{AtomicFlag, AtomicFloat};

pub mod parameter;
pub use parameter::{ParameterRange, ParameterScale};
