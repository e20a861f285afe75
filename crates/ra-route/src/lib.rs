//! `ra-route` — the static route a vehicle travels.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`model`]   | `Stop`, `RouteModel` (stops + waypoints + cumulative metres) |
//! | [`builder`] | `RouteBuilder`, `default_route()`                           |
//! | [`loader`]  | CSV loading for stop and waypoint files                     |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                              |
//!
//! A route is built once at startup and never mutated.  Stops drive the
//! announcement logic; waypoints only describe the physical path and feed the
//! simulated position source through [`RouteModel::waypoint_at`].

pub mod builder;
pub mod error;
pub mod loader;
pub mod model;


pub use builder::{RouteBuilder, default_route};
pub use error::{RouteError, RouteResult};
pub use loader::{load_route_csv, load_stops_reader, load_waypoints_reader};
pub use model::{RouteModel, Stop};
