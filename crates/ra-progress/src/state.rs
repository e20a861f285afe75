//! Per-traversal progress state.

use ra_core::{Direction, StopId};

/// The last proximity radius an announcement fired for.
///
/// Position updates arrive on a fixed cadence and the vehicle may sit inside
/// a radius for several of them; the debounce suppresses repeats until the
/// other radius (or a new stop) is reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Threshold {
    #[default]
    None,
    /// The 100 m "approaching" radius.
    Far,
    /// The 30 m "arrived" radius.
    Near,
}

/// Progress of one vehicle along one traversal of the route.
///
/// A plain value: [`ProgressTracker::update`][crate::ProgressTracker::update]
/// takes one and returns the next, so the state machine can be exercised
/// without any surrounding runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressState {
    /// Stop most recently reached, or the nearest one behind the vehicle.
    pub current: StopId,

    /// Stop being approached.  One step beyond `current` in the active
    /// direction; clamped to the terminal stop once it has been reached.
    pub next: StopId,

    /// Last radius announced, for the stop in `announced_for`.
    pub last_announced: Threshold,

    /// Stop that `last_announced` refers to.  The debounce only suppresses
    /// repeats for this stop, so a fresh approach to the following stop is
    /// never swallowed by the arrival that preceded it.
    pub announced_for: StopId,

    /// Set once the terminal stop of this traversal has been announced.
    /// Cleared only by reversal or a restart.
    pub final_announcement_made: bool,

    /// `true` iff the vehicle was within the near radius of `current` at the
    /// last update.
    pub within_range: bool,
}

impl ProgressState {
    /// Initial state for a traversal in `direction` over `stop_count` stops:
    /// `(0, 1)` for `AtoC`, `(n-1, n-2)` for `CtoA`.
    ///
    /// `stop_count` must be at least 2, which every `RouteModel` guarantees.
    pub fn start(direction: Direction, stop_count: usize) -> Self {
        let current = direction.origin(stop_count);
        let next = direction.step(current, stop_count).unwrap_or(current);
        Self {
            current,
            next,
            last_announced: Threshold::None,
            announced_for: next,
            final_announcement_made: false,
            within_range: false,
        }
    }

    /// `true` if `threshold` was already announced for `stop`.
    #[inline]
    pub fn debounced(&self, threshold: Threshold, stop: StopId) -> bool {
        self.last_announced == threshold && self.announced_for == stop
    }

    /// `true` once `next` has been clamped to the terminal stop and
    /// announced.
    pub fn is_finished(&self) -> bool {
        self.final_announcement_made && self.current == self.next
    }
}
