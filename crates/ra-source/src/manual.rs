//! Manually entered positions.

use ra_core::GeoPoint;

use crate::{SourceError, SourceResult};

/// Parse `"lat,lng"` text, e.g. `"7.1059, 124.83141"`.
///
/// # Errors
///
/// [`SourceError::Malformed`] unless there are exactly two comma-separated
/// numbers; [`SourceError::OutOfRange`] if they fall outside
/// `[-90, 90] × [-180, 180]`.
pub fn parse_coords(input: &str) -> SourceResult<GeoPoint> {
    let mut parts = input.split(',');
    let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(SourceError::Malformed(input.to_owned()));
    };

    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|_| SourceError::Malformed(input.to_owned()))
    };

    Ok(GeoPoint::try_new(parse(lat)?, parse(lon)?)?)
}

/// Validate a slider value.  NaN and values outside `[0, 1]` are rejected
/// rather than clamped, so a broken control is noticed.
pub fn parse_fraction(value: f64) -> SourceResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SourceError::Fraction(value))
    }
}
