//! `ra-source` — where positions come from.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                         |
//! |---------------|------------------------------------------------------------------|
//! | [`record`]    | `PositionRecord` (wire shape), `PositionFix` (fix / no fix)      |
//! | [`manual`]    | `"lat,lng"` text parsing, slider fraction validation             |
//! | [`fetch`]     | `PositionFetcher` trait, `HttpFetcher` (feature = `"http"`)      |
//! | [`poll`]      | `PollSubscription` — scoped 1 Hz poll task, `PollEvent`          |
//! | [`simulated`] | `SimulatedSource` — a vehicle shuttling along the waypoint path  |
//! | [`error`]     | `SourceError`, `SourceResult<T>`                                 |
//!
//! # Feature flags
//!
//! | Flag   | Effect                                                       |
//! |--------|--------------------------------------------------------------|
//! | `http` | Enables `HttpFetcher` via `reqwest` (on by default).         |
//!
//! Nothing in this crate touches progress state.  Every source produces
//! either a validated [`GeoPoint`][ra_core::GeoPoint], an explicit "no fix",
//! or an error the caller reports and otherwise ignores.

pub mod error;
pub mod fetch;
pub mod manual;
pub mod poll;
pub mod record;
pub mod simulated;


pub use error::{SourceError, SourceResult};
#[cfg(feature = "http")]
pub use fetch::HttpFetcher;
pub use fetch::PositionFetcher;
pub use manual::{parse_coords, parse_fraction};
pub use poll::{PollConfig, PollEvent, PollSubscription};
pub use record::{PositionFix, PositionRecord};
pub use simulated::SimulatedSource;
