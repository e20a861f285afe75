use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProgressError {
    #[error("near radius must be positive, got {0} m")]
    NonPositiveNear(f64),

    #[error("far radius {far} m must exceed near radius {near} m")]
    FarNotBeyondNear { near: f64, far: f64 },
}

pub type ProgressResult<T> = Result<T, ProgressError>;
