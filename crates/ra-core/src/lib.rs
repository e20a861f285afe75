//! `ra-core` — foundational types for the `route_announcer` workspace.
//!
//! This crate is a dependency of every other `ra-*` crate.  It has no `ra-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, haversine distance, linear interpolation  |
//! | [`ids`]         | `StopId`                                              |
//! | [`direction`]   | `Direction` enum (`AtoC` / `CtoA`)                    |
//! | [`rng`]         | `JitterRng` for simulated GPS noise                   |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod direction;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use geo::{GeoPoint, distance, interpolate};
pub use ids::StopId;
pub use rng::JitterRng;
