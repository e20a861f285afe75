//! Position payload from the GPS endpoint.

use serde::Deserialize;

use ra_core::GeoPoint;

use crate::{SourceError, SourceResult};

/// Wire shape of one GPS poll:
///
/// ```json
/// { "latitude": 7.1059, "longitude": 124.83141 }
/// { "latitude": null,   "longitude": null }
/// ```
///
/// Missing keys deserialize as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct PositionRecord {
    #[serde(default)]
    pub latitude:  Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// A position reading, distinguishing "no fix" from a real coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionFix {
    Fix(GeoPoint),
    /// The receiver has no fix.  Not a position; never fed to distance
    /// calculations.
    NoFix,
}

impl PositionRecord {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude: Some(latitude), longitude: Some(longitude) }
    }

    /// Decode a JSON body.
    pub fn from_json(body: &str) -> SourceResult<Self> {
        serde_json::from_str(body).map_err(|e| SourceError::Decode(e.to_string()))
    }

    /// Interpret the record.  Either coordinate being `null` is "no fix";
    /// coordinates outside the WGS-84 ranges are an error.
    pub fn to_fix(self) -> SourceResult<PositionFix> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Ok(PositionFix::Fix(GeoPoint::try_new(lat, lon)?)),
            _ => Ok(PositionFix::NoFix),
        }
    }
}
