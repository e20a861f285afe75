use thiserror::Error;

use ra_core::CoreError;

/// Errors from position sources.  None of them is fatal: the caller reports
/// the message and keeps its last good state.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SourceError {
    #[error("Invalid input. Please enter latitude,longitude.")]
    Malformed(String),

    #[error("Invalid latitude or longitude: {0}")]
    OutOfRange(#[from] CoreError),

    #[error("progress fraction {0} is outside [0, 1]")]
    Fraction(f64),

    #[error("poll interval must be non-zero")]
    ZeroInterval,

    #[error("position fetch failed: {0}")]
    Fetch(String),

    #[error("position payload could not be decoded: {0}")]
    Decode(String),
}

pub type SourceResult<T> = Result<T, SourceError>;
