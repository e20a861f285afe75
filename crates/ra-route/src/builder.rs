//! Fluent construction of a [`RouteModel`].

use ra_core::GeoPoint;

use crate::{RouteModel, RouteResult, Stop};

/// Construct a [`RouteModel`] incrementally, then call [`build`](Self::build).
///
/// Stops are appended in canonical `AtoC` order.  Validation happens once, in
/// `build()`.
///
/// # Example
///
/// ```
/// use ra_core::GeoPoint;
/// use ra_route::RouteBuilder;
///
/// let route = RouteBuilder::new()
///     .add_stop("North", GeoPoint::new(30.70, -88.04))
///     .add_stop("South", GeoPoint::new(30.69, -88.04))
///     .add_waypoint(GeoPoint::new(30.70, -88.04))
///     .add_waypoint(GeoPoint::new(30.69, -88.04))
///     .build()
///     .unwrap();
/// assert_eq!(route.stop_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RouteBuilder {
    stops:     Vec<Stop>,
    waypoints: Vec<GeoPoint>,
}

impl RouteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stop(mut self, name: impl Into<String>, position: GeoPoint) -> Self {
        self.stops.push(Stop::new(name, position));
        self
    }

    pub fn add_waypoint(mut self, point: GeoPoint) -> Self {
        self.waypoints.push(point);
        self
    }

    pub fn waypoints(mut self, points: impl IntoIterator<Item = GeoPoint>) -> Self {
        self.waypoints.extend(points);
        self
    }

    /// Validate and build.  See [`RouteModel::new`] for the error cases.
    pub fn build(self) -> RouteResult<RouteModel> {
        let route = RouteModel::new(self.stops, self.waypoints)?;
        log::debug!(
            "route built: {} stops, {} waypoints, {:.0} m",
            route.stop_count(),
            route.waypoints().len(),
            route.length_m()
        );
        Ok(route)
    }
}

// ── Built-in route ────────────────────────────────────────────────────────────

const DEFAULT_STOPS: [(&str, f64, f64); 3] = [
    ("A", 7.10488, 124.83347),
    ("B", 7.1059,  124.83141),
    ("C", 7.10556, 124.82827),
];

const DEFAULT_PATH: [(f64, f64); 10] = [
    (7.10488, 124.83347),
    (7.10534, 124.83365),
    (7.10564, 124.83245),
    (7.1059,  124.83143),
    (7.1059,  124.83141),
    (7.10624, 124.83011),
    (7.10638, 124.8295),
    (7.10652, 124.829),
    (7.10543, 124.82872),
    (7.10556, 124.82827),
];

/// The three-stop A → B → C campus line used when no route files are given.
pub fn default_route() -> RouteModel {
    let mut b = RouteBuilder::new();
    for (name, lat, lon) in DEFAULT_STOPS {
        b = b.add_stop(name, GeoPoint::new(lat, lon));
    }
    b = b.waypoints(DEFAULT_PATH.iter().map(|&(lat, lon)| GeoPoint::new(lat, lon)));
    // The constants above satisfy every `build` check.
    match b.build() {
        Ok(route) => route,
        Err(e) => unreachable!("built-in route is invalid: {e}"),
    }
}
