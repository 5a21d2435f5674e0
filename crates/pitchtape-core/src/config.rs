//! Stream configuration handed to the processor at prepare time.

use crate::{Error, Result};

/// Lowest sample rate the engine accepts.
pub const MIN_SAMPLE_RATE: f64 = 8000.0;
/// Highest sample rate the engine accepts.
pub const MAX_SAMPLE_RATE: f64 = 384000.0;

/// Input/output channel layout. Input always equals output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelLayout {
    Mono,
    #[default]
    Stereo,
}

impl ChannelLayout {
    pub fn channels(&self) -> usize {
        match self {
            ChannelLayout::Mono => 1,
            ChannelLayout::Stereo => 2,
        }
    }

    pub fn from_channels(channels: usize) -> Result<Self> {
        match channels {
            1 => Ok(ChannelLayout::Mono),
            2 => Ok(ChannelLayout::Stereo),
            n => Err(Error::InvalidConfig(format!(
                "unsupported channel count {} (mono or stereo only)",
                n
            ))),
        }
    }
}

/// Configuration for one audio stream.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub sample_rate: f64,
    /// Largest block the host will pass to `process`.
    pub max_block_size: usize,
    pub layout: ChannelLayout,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100.0,
            max_block_size: 512,
            layout: ChannelLayout::Stereo,
        }
    }
}

impl EngineConfig {
    pub fn new(sample_rate: f64, max_block_size: usize, layout: ChannelLayout) -> Self {
        Self {
            sample_rate,
            max_block_size,
            layout,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&self.sample_rate) {
            return Err(Error::InvalidConfig(format!(
                "sample_rate {} out of range ({}-{} Hz)",
                self.sample_rate, MIN_SAMPLE_RATE, MAX_SAMPLE_RATE
            )));
        }
        if self.max_block_size == 0 {
            return Err(Error::InvalidConfig(
                "max_block_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn channels(&self) -> usize {
        self.layout.channels()
    }
}
