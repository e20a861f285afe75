//! Route representation: named stops plus the waypoint path between them.

use ra_core::{GeoPoint, StopId};

use crate::{RouteError, RouteResult};

/// A named point that can trigger announcements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub name:     String,
    pub position: GeoPoint,
}

impl Stop {
    pub fn new(name: impl Into<String>, position: GeoPoint) -> Self {
        Self { name: name.into(), position }
    }
}

/// Immutable route: stops in canonical `AtoC` order and the physical path.
///
/// Do not construct directly; use [`RouteModel::new`] or
/// [`RouteBuilder`][crate::RouteBuilder], both of which validate the input.
#[derive(Debug, Clone)]
pub struct RouteModel {
    stops:        Vec<Stop>,
    waypoints:    Vec<GeoPoint>,
    /// Path length from `waypoints[0]` to `waypoints[i]`, metres.
    /// Same length as `waypoints`; `cumulative_m[0] == 0`.
    cumulative_m: Vec<f64>,
}

impl RouteModel {
    /// Validate and assemble a route.
    ///
    /// # Errors
    ///
    /// Fewer than 2 stops or waypoints, a duplicate stop name, or any
    /// coordinate outside the WGS-84 ranges.
    pub fn new(stops: Vec<Stop>, waypoints: Vec<GeoPoint>) -> RouteResult<Self> {
        if stops.len() < 2 {
            return Err(RouteError::TooFewStops(stops.len()));
        }
        if waypoints.len() < 2 {
            return Err(RouteError::TooFewWaypoints(waypoints.len()));
        }
        for (i, stop) in stops.iter().enumerate() {
            GeoPoint::try_new(stop.position.lat, stop.position.lon)?;
            if stops[..i].iter().any(|s| s.name == stop.name) {
                return Err(RouteError::DuplicateStop(stop.name.clone()));
            }
        }
        for wp in &waypoints {
            GeoPoint::try_new(wp.lat, wp.lon)?;
        }

        let mut cumulative_m = Vec::with_capacity(waypoints.len());
        let mut total = 0.0;
        cumulative_m.push(total);
        for pair in waypoints.windows(2) {
            total += pair[0].distance_m(pair[1]);
            cumulative_m.push(total);
        }

        Ok(Self { stops, waypoints, cumulative_m })
    }

    // ── Stops ─────────────────────────────────────────────────────────────

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// # Panics
    /// Panics if `id` is out of range.
    #[inline]
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    pub fn last_stop(&self) -> StopId {
        StopId((self.stops.len() - 1) as u32)
    }

    pub fn find_stop(&self, name: &str) -> Option<StopId> {
        self.stops
            .iter()
            .position(|s| s.name == name)
            .map(|i| StopId(i as u32))
    }

    /// Direct haversine distance from `position` to every stop, metres,
    /// indexed by `StopId`.
    pub fn distances_from(&self, position: GeoPoint) -> Vec<f64> {
        self.stops
            .iter()
            .map(|s| position.distance_m(s.position))
            .collect()
    }

    // ── Path ──────────────────────────────────────────────────────────────

    pub fn waypoints(&self) -> &[GeoPoint] {
        &self.waypoints
    }

    pub fn cumulative_m(&self) -> &[f64] {
        &self.cumulative_m
    }

    /// Total path length in metres.
    pub fn length_m(&self) -> f64 {
        self.cumulative_m.last().copied().unwrap_or(0.0)
    }

    /// Map a normalized progress fraction to a point on the path.
    ///
    /// The fraction is spread evenly over waypoint *segments*, not metres:
    /// `index = floor(fraction * (n - 1))` and the remainder is interpolated
    /// between `waypoints[index]` and `waypoints[index + 1]`.  `fraction` is
    /// clamped to `[0, 1]`; `1.0` returns the last waypoint.
    pub fn waypoint_at(&self, fraction: f64) -> GeoPoint {
        let last = self.waypoints.len() - 1;
        let scaled = fraction.clamp(0.0, 1.0) * last as f64;
        let index = scaled.floor() as usize;
        if index >= last {
            return self.waypoints[last];
        }
        let remainder = (scaled - index as f64).min(1.0);
        self.waypoints[index].lerp(self.waypoints[index + 1], remainder)
    }

    /// Point reached after travelling `metres` along the path from the first
    /// waypoint.  Clamped to the path ends.
    pub fn point_at_distance(&self, metres: f64) -> GeoPoint {
        if metres <= 0.0 {
            return self.waypoints[0];
        }
        // First waypoint whose cumulative distance reaches `metres`.
        let upper = self.cumulative_m.partition_point(|&d| d < metres);
        if upper >= self.waypoints.len() {
            return self.waypoints[self.waypoints.len() - 1];
        }
        let lower = upper - 1;
        let span = self.cumulative_m[upper] - self.cumulative_m[lower];
        if span <= 0.0 {
            return self.waypoints[upper];
        }
        let fraction = (metres - self.cumulative_m[lower]) / span;
        self.waypoints[lower].lerp(self.waypoints[upper], fraction)
    }
}
