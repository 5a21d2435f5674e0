//! # pitchtape - real-time pitch shifter
//!
//! A rotating-tape-head pitch shifter: input is written into a circular
//! history and read back by two crossfaded taps whose delay drifts with the
//! pitch ratio. Duration is preserved, work per sample is constant.
//!
//! ## Architecture
//!
//! - **pitchtape-core** - lock-free parameter cells, parameter ranges, stream config
//! - **pitchtape-dsp** - [`PitchEngine`], the circular tape buffer and crossfade window
//! - this crate - [`PitchParams`] (pitch / mix / bypass), [`PitchProcessor`]
//!   (bypass + dry/wet around the engine) and [`PluginState`] persistence
//!
//! ## Quick Start
//!
//! ```
//! use pitchtape::prelude::*;
//!
//! let mut processor = PitchProcessor::builder().build()?;
//! processor.prepare(EngineConfig::new(48000.0, 512, ChannelLayout::Mono))?;
//!
//! // Control thread
//! processor.params().set_pitch(12.0);
//! processor.params().set_mix(0.5);
//!
//! // Audio thread
//! let mut block = vec![0.0f32; 512];
//! processor.process(&mut [&mut block[..]]);
//!
//! // Host save / restore
//! let saved = PluginState::save(processor.params())?;
//! PluginState::load(processor.params(), &saved)?;
//! # Ok::<(), pitchtape::Error>(())
//! ```

/// Re-export of pitchtape-core for direct access
pub use pitchtape_core as core;

/// Re-export of pitchtape-dsp for direct access
pub use pitchtape_dsp as dsp;

pub use pitchtape_core::{AtomicFlag, AtomicFloat, ChannelLayout, EngineConfig, ParameterRange};
pub use pitchtape_dsp::{PitchControl, PitchEngine};

mod error;
pub use error::{Error, Result};

mod builder;
pub use builder::PitchProcessorBuilder;

pub mod params;
pub use params::{ParamId, ParamValues, PitchParams};

mod processor;
pub use processor::PitchProcessor;

pub mod state;
pub use state::PluginState;

pub mod prelude {
    pub use crate::{PitchProcessor, PitchProcessorBuilder};

    pub use crate::params::{ParamId, ParamValues, PitchParams};
    pub use crate::state::PluginState;

    pub use crate::core::{ChannelLayout, EngineConfig};
    pub use crate::dsp::{PitchControl, PitchEngine};
}
