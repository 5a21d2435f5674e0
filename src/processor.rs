//! Effect processor: bypass and dry/wet mix around the pitch engine.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::EngineConfig;
use crate::dsp::PitchEngine;
use crate::params::PitchParams;
use crate::{PitchProcessorBuilder, Result};

/// Host-side wrapper around a [`PitchEngine`].
///
/// Reads [`PitchParams`] once per block. With bypass on, audio passes
/// through untouched. Otherwise the engine output is blended with the dry
/// input: `out = dry * (1 - mix) + wet * mix`.
///
/// # Example
///
/// ```
/// use pitchtape::prelude::*;
///
/// let mut processor = PitchProcessor::builder().build()?;
/// processor.prepare(EngineConfig::new(48000.0, 256, ChannelLayout::Stereo))?;
/// processor.params().set_pitch(7.0);
///
/// let mut left = vec![0.0f32; 256];
/// let mut right = vec![0.0f32; 256];
/// processor.process(&mut [&mut left[..], &mut right[..]]);
/// # Ok::<(), pitchtape::Error>(())
/// ```
pub struct PitchProcessor {
    engine: PitchEngine,
    params: Arc<PitchParams>,
    config: Option<EngineConfig>,
    /// Per-channel dry copy, sized in `prepare`.
    dry: Vec<Vec<f32>>,
}

impl PitchProcessor {
    pub fn builder() -> PitchProcessorBuilder {
        PitchProcessorBuilder::default()
    }

    pub(crate) fn from_parts(engine: PitchEngine, params: Arc<PitchParams>) -> Self {
        Self {
            engine,
            params,
            config: None,
            dry: Vec::new(),
        }
    }

    /// Validate `config`, size the engine history and the dry scratch.
    ///
    /// Allocates. Call from the setup thread, never while `process` runs.
    pub fn prepare(&mut self, config: EngineConfig) -> Result<()> {
        if let Err(e) = config.validate() {
            warn!("Rejected processor config {:?}: {}", config, e);
            return Err(e.into());
        }

        self.engine.prepare(config.sample_rate, config.max_block_size);
        self.dry = vec![vec![0.0; config.max_block_size]; config.channels()];

        debug!(
            "Prepared pitch processor: {} Hz, {} channel(s), max block {}",
            config.sample_rate,
            config.channels(),
            config.max_block_size
        );
        self.config = Some(config);
        Ok(())
    }

    /// Clear engine history (transport stop / seek).
    pub fn reset(&mut self) {
        self.engine.reset();
        debug!("Pitch processor reset");
    }

    /// Process one block in place.
    ///
    /// The channel count must match the prepared layout and the block must
    /// not exceed the prepared maximum; otherwise the block passes through
    /// unchanged.
    pub fn process(&mut self, channels: &mut [&mut [f32]]) {
        let Some(config) = &self.config else {
            debug_assert!(false, "process called before prepare");
            return;
        };

        let frames = channels.first().map_or(0, |c| c.len());
        let fits = channels.len() == config.channels()
            && frames <= config.max_block_size
            && channels.iter().all(|c| c.len() == frames);
        if !fits {
            debug_assert!(false, "block does not match prepared layout");
            return;
        }

        if self.params.bypass() {
            return;
        }

        let mix = self.params.mix();
        for (dry, channel) in self.dry.iter_mut().zip(channels.iter()) {
            dry[..frames].copy_from_slice(&channel[..]);
        }

        self.engine.set_pitch(self.params.pitch());
        self.engine.process(channels);

        let dry_gain = 1.0 - mix;
        for (dry, wet) in self.dry.iter().zip(channels.iter_mut()) {
            for (w, &d) in wet.iter_mut().zip(dry[..frames].iter()) {
                *w = d * dry_gain + *w * mix;
            }
        }
    }

    /// Shared parameters; clone the `Arc` to drive them from another thread.
    pub fn params(&self) -> &Arc<PitchParams> {
        &self.params
    }

    pub fn engine(&self) -> &PitchEngine {
        &self.engine
    }

    pub fn config(&self) -> Option<&EngineConfig> {
        self.config.as_ref()
    }

    pub fn is_prepared(&self) -> bool {
        self.config.is_some()
    }

    /// Latency the host should compensate, in samples.
    pub fn latency_samples(&self) -> usize {
        self.engine.latency_samples()
    }
}
