//! Error types for ra-session.

use thiserror::Error;

use ra_source::SourceError;

use crate::SourceMode;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("the route has not been started")]
    NotStarted,

    #[error("{action} is only available in {expected} mode (currently {actual})")]
    WrongMode {
        action:   &'static str,
        expected: SourceMode,
        actual:   SourceMode,
    },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, SessionError>`.
pub type SessionResult<T> = Result<T, SessionError>;
