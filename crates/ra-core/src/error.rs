//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `From`.

use thiserror::Error;

/// Errors produced by `ra-core` validation helpers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("coordinates ({lat}, {lon}) are outside [-90, 90] x [-180, 180]")]
    OutOfRange { lat: f64, lon: f64 },

    #[error("unknown direction {0:?}: expected \"AtoC\" or \"CtoA\"")]
    UnknownDirection(String),
}

/// Shorthand result type for `ra-core`.
pub type CoreResult<T> = Result<T, CoreError>;
