//! Error types for pitchtape-dsp

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    InvalidWindow(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidWindow(msg) => write!(f, "Invalid grain window: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
