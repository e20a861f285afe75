//! CSV route loader.
//!
//! # CSV formats
//!
//! Stops, one row per stop in `AtoC` order:
//!
//! ```csv
//! name,lat,lon
//! A,7.10488,124.83347
//! B,7.1059,124.83141
//! C,7.10556,124.82827
//! ```
//!
//! Waypoints, one row per path vertex:
//!
//! ```csv
//! lat,lon
//! 7.10488,124.83347
//! 7.10534,124.83365
//! ```
//!
//! Coordinates are range-checked here so a bad file fails at startup with the
//! offending row number rather than producing nonsense distances later.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ra_core::GeoPoint;

use crate::{RouteError, RouteModel, RouteResult, Stop};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StopRecord {
    name: String,
    lat:  f64,
    lon:  f64,
}

#[derive(Deserialize)]
struct WaypointRecord {
    lat: f64,
    lon: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a route from a stops file and a waypoints file.
pub fn load_route_csv(stops_path: &Path, waypoints_path: &Path) -> RouteResult<RouteModel> {
    let stops = load_stops_reader(std::fs::File::open(stops_path)?)?;
    let waypoints = load_waypoints_reader(std::fs::File::open(waypoints_path)?)?;
    log::info!(
        "loaded {} stops from {} and {} waypoints from {}",
        stops.len(),
        stops_path.display(),
        waypoints.len(),
        waypoints_path.display()
    );
    RouteModel::new(stops, waypoints)
}

/// Parse `name,lat,lon` rows from any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded route tables.
pub fn load_stops_reader<R: Read>(reader: R) -> RouteResult<Vec<Stop>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut stops = Vec::new();

    for (row, result) in csv_reader.deserialize::<StopRecord>().enumerate() {
        let rec = result.map_err(|e| RouteError::Parse(e.to_string()))?;
        let position = checked_point(rec.lat, rec.lon, row)?;
        stops.push(Stop::new(rec.name, position));
    }

    Ok(stops)
}

/// Parse `lat,lon` rows from any `Read` source.
pub fn load_waypoints_reader<R: Read>(reader: R) -> RouteResult<Vec<GeoPoint>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    csv_reader
        .deserialize::<WaypointRecord>()
        .enumerate()
        .map(|(row, result)| {
            let rec = result.map_err(|e| RouteError::Parse(e.to_string()))?;
            checked_point(rec.lat, rec.lon, row)
        })
        .collect()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `row` is the zero-based data row; reported one-based after the header.
fn checked_point(lat: f64, lon: f64, row: usize) -> RouteResult<GeoPoint> {
    GeoPoint::try_new(lat, lon)
        .map_err(|e| RouteError::Parse(format!("row {}: {e}", row + 2)))
}
