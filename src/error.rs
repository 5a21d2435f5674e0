//! Centralized error type for the pitchtape umbrella crate.
//!
//! Wraps subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] pitchtape_core::Error),

    #[error("DSP: {0}")]
    Dsp(#[from] pitchtape_dsp::Error),

    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("State type mismatch: expected '{expected}', found '{found}'")]
    StateTypeMismatch { expected: String, found: String },

    #[error("State: {0}")]
    State(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
