use thiserror::Error;

use ra_core::CoreError;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("a route needs at least 2 stops, got {0}")]
    TooFewStops(usize),

    #[error("a route needs at least 2 waypoints, got {0}")]
    TooFewWaypoints(usize),

    #[error("duplicate stop name {0:?}")]
    DuplicateStop(String),

    #[error("invalid coordinate: {0}")]
    Coordinate(#[from] CoreError),

    #[error("route parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
