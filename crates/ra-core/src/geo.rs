//! Geographic coordinate type and distance/interpolation helpers.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Stop radii are tens of metres,
//! so single precision (~1 m at the equator) would eat a visible share of the
//! 30 m arrival radius.

use crate::{CoreError, CoreResult};

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct a point, rejecting coordinates outside
    /// `[-90, 90] × [-180, 180]` (and NaN).
    pub fn try_new(lat: f64, lon: f64) -> CoreResult<Self> {
        let p = Self { lat, lon };
        if p.is_valid() {
            Ok(p)
        } else {
            Err(CoreError::OutOfRange { lat, lon })
        }
    }

    /// `true` if both components are finite and inside the WGS-84 ranges.
    #[inline]
    pub fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Component-wise linear blend toward `other`.
    ///
    /// Not geodesic, but the error is negligible over the few hundred metres
    /// between consecutive waypoints.  `fraction` is not clamped here.
    ///
    /// Weighted form so that `0.0` and `1.0` reproduce the endpoints exactly.
    #[inline]
    pub fn lerp(self, other: GeoPoint, fraction: f64) -> GeoPoint {
        let keep = 1.0 - fraction;
        GeoPoint {
            lat: self.lat * keep + other.lat * fraction,
            lon: self.lon * keep + other.lon * fraction,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Free-function form of [`GeoPoint::distance_m`].
#[inline]
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    a.distance_m(b)
}

/// Free-function form of [`GeoPoint::lerp`].
#[inline]
pub fn interpolate(a: GeoPoint, b: GeoPoint, fraction: f64) -> GeoPoint {
    a.lerp(b, fraction)
}
