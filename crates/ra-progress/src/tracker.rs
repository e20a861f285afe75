//! The progress state machine.

use ra_core::{Direction, GeoPoint, StopId};
use ra_route::RouteModel;

use crate::{
    AnnouncementEvent, AnnouncementKind, ProgressError, ProgressResult, ProgressState, Threshold,
};

/// Proximity radii, metres.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    /// Arrival radius.  Also the `within_range` radius.
    pub near_m: f64,
    /// "Approaching" radius.
    pub far_m:  f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self { near_m: 30.0, far_m: 100.0 }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> ProgressResult<()> {
        if self.near_m.is_nan() || self.near_m <= 0.0 {
            return Err(ProgressError::NonPositiveNear(self.near_m));
        }
        if self.far_m.is_nan() || self.far_m <= self.near_m {
            return Err(ProgressError::FarNotBeyondNear { near: self.near_m, far: self.far_m });
        }
        Ok(())
    }
}

/// Result of one [`ProgressTracker::update`].
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateOutcome {
    pub state:     ProgressState,
    /// At most one event.
    pub events:    Vec<AnnouncementEvent>,
    /// Distance from the position to every stop, metres, indexed by `StopId`.
    pub distances: Vec<f64>,
}

/// Maps positions to progress along a fixed route.
///
/// Owns the route; holds no mutable state of its own.  Every call is a pure
/// function of its arguments.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    route:  RouteModel,
    config: TrackerConfig,
}

impl ProgressTracker {
    /// # Errors
    ///
    /// Returns the [`TrackerConfig::validate`] error for unusable radii.
    pub fn new(route: RouteModel, config: TrackerConfig) -> ProgressResult<Self> {
        config.validate()?;
        Ok(Self { route, config })
    }

    /// Tracker with the default 30 m / 100 m radii.
    pub fn with_defaults(route: RouteModel) -> Self {
        Self { route, config: TrackerConfig::default() }
    }

    pub fn route(&self) -> &RouteModel {
        &self.route
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Initial state for a traversal in `direction`.
    pub fn start(&self, direction: Direction) -> ProgressState {
        ProgressState::start(direction, self.route.stop_count())
    }

    /// Feed one position fix through the state machine.
    ///
    /// The near radius is tested before the far one against the same `next`
    /// stop, so a fix that jumps straight inside 30 m fires only the arrival
    /// and never the skipped "approaching".
    pub fn update(
        &self,
        position:  GeoPoint,
        state:     &ProgressState,
        direction: Direction,
    ) -> UpdateOutcome {
        let stop_count = self.route.stop_count();
        let distances = self.route.distances_from(position);
        let mut s = *state;

        // Track the stop behind the vehicle independently of announcements.
        // `current` may catch up with `next` but never overtake it.
        if distances[s.current.index()] <= self.config.near_m && s.current != s.next {
            if let Some(ahead) = direction.step(s.current, stop_count) {
                s.current = ahead;
            }
        }

        let target = s.next;
        let to_target = distances[target.index()];
        let mut events = Vec::with_capacity(1);

        if to_target <= self.config.near_m && !s.debounced(Threshold::Near, target) {
            if target == direction.terminal(stop_count) {
                if !s.final_announcement_made {
                    events.push(self.event(AnnouncementKind::FinalArrival, target));
                    s.final_announcement_made = true;
                }
            } else {
                events.push(self.event(AnnouncementKind::Arrival, target));
            }
            s.last_announced = Threshold::Near;
            s.announced_for = target;
            s.current = target;
            s.next = direction.step(target, stop_count).unwrap_or(target);
        } else if to_target <= self.config.far_m
            && !s.debounced(Threshold::Far, target)
            && !s.final_announcement_made
        {
            events.push(self.event(AnnouncementKind::Approaching, target));
            s.last_announced = Threshold::Far;
            s.announced_for = target;
        }

        s.within_range = distances[s.current.index()] <= self.config.near_m;

        for e in &events {
            log::debug!("{direction}: {e} ({to_target:.1} m)");
        }

        UpdateOutcome { state: s, events, distances }
    }

    /// `true` when a reversal would take effect: the vehicle is within range
    /// of the terminal stop of `direction`.
    pub fn can_reverse(&self, state: &ProgressState, direction: Direction) -> bool {
        state.within_range && state.current == direction.terminal(self.route.stop_count())
    }

    /// Turn around at the end of the line.
    ///
    /// Resets to the mirrored start pair for the new direction and clears the
    /// debounce and final-arrival flags.  Anywhere else this is a no-op that
    /// returns the inputs unchanged.
    pub fn reverse(&self, state: &ProgressState, direction: Direction) -> (ProgressState, Direction) {
        if !self.can_reverse(state, direction) {
            log::debug!("reverse ignored: {direction} at {} not at the end of the line", state.current);
            return (*state, direction);
        }
        let reversed = direction.reversed();
        let mut s = self.start(reversed);
        // Still parked on the same stop, which is now the origin.
        s.within_range = state.within_range;
        log::info!("direction reversed to {reversed} at stop {}", self.stop_name(s.current));
        (s, reversed)
    }

    fn stop_name(&self, id: StopId) -> &str {
        &self.route.stop(id).name
    }

    fn event(&self, kind: AnnouncementKind, stop: StopId) -> AnnouncementEvent {
        AnnouncementEvent::new(kind, stop, self.stop_name(stop))
    }
}
