//! Builder for configuring and constructing a `PitchProcessor`.

use std::sync::Arc;

use crate::dsp::{PitchEngine, DEFAULT_WINDOW_LEN};
use crate::params::{ParamValues, PitchParams};
use crate::{PitchProcessor, Result};

/// The processor is built unprepared; call
/// [`PitchProcessor::prepare`] with the stream config before processing.
///
/// # Example
///
/// ```
/// use pitchtape::prelude::*;
/// use std::sync::Arc;
///
/// let params = Arc::new(PitchParams::new());
/// let processor = PitchProcessor::builder()
///     .window_len(4096)
///     .params(Arc::clone(&params))
///     .build()?;
///
/// // The control side keeps its own handle
/// params.set_pitch(-12.0);
/// assert_eq!(processor.params().pitch(), -12.0);
/// # Ok::<(), pitchtape::Error>(())
/// ```
pub struct PitchProcessorBuilder {
    window_len: usize,
    params: Option<Arc<PitchParams>>,
    initial: Option<ParamValues>,
}

impl Default for PitchProcessorBuilder {
    fn default() -> Self {
        Self {
            window_len: DEFAULT_WINDOW_LEN,
            params: None,
            initial: None,
        }
    }
}

impl PitchProcessorBuilder {
    /// Default: 2048 samples. Must be even and at least 2.
    pub fn window_len(mut self, samples: usize) -> Self {
        self.window_len = samples;
        self
    }

    /// Share an existing parameter set instead of creating one.
    pub fn params(mut self, params: Arc<PitchParams>) -> Self {
        self.params = Some(params);
        self
    }

    /// Initial parameter values, applied on build.
    pub fn initial_values(mut self, values: ParamValues) -> Self {
        self.initial = Some(values);
        self
    }

    pub fn build(self) -> Result<PitchProcessor> {
        let engine = PitchEngine::with_window_len(self.window_len)?;
        let params = self.params.unwrap_or_default();

        if let Some(values) = &self.initial {
            params.apply(values);
        }
        engine.set_pitch(params.pitch());

        Ok(PitchProcessor::from_parts(engine, params))
    }
}
