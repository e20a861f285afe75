//! `ra-progress` — where the vehicle is along its route, and what to announce.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`state`]   | `ProgressState`, `Threshold` — the per-traversal progress value   |
//! | [`event`]   | `AnnouncementEvent`, `AnnouncementKind`                           |
//! | [`tracker`] | `ProgressTracker` — `update` / `reverse`, `TrackerConfig`         |
//! | [`error`]   | `ProgressError`, `ProgressResult<T>`                              |
//!
//! # Update model
//!
//! The tracker is a pure function of `(position, state, direction)`:
//!
//! 1. Distances from the position to every stop are computed.
//! 2. `current` is nudged forward while the vehicle sits on it.
//! 3. The `next` stop is tested against the near (30 m) and far (100 m)
//!    radii; a `Threshold` debounce makes each crossing fire once.
//! 4. The caller receives the new state plus at most one event and hands
//!    the event to whatever sink plays or renders it.
//!
//! Nothing here performs I/O; the tracker can be driven from a test, a poll
//! loop, or a slider with identical results.

pub mod error;
pub mod event;
pub mod state;
pub mod tracker;


pub use error::{ProgressError, ProgressResult};
pub use event::{AnnouncementEvent, AnnouncementKind};
pub use state::{ProgressState, Threshold};
pub use tracker::{ProgressTracker, TrackerConfig, UpdateOutcome};
