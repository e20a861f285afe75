//! `Session` — one vehicle, one route, one position source at a time.

use std::fmt;

use ra_core::{Direction, GeoPoint};
use ra_progress::{ProgressState, ProgressTracker, UpdateOutcome};
use ra_source::{PollEvent, parse_coords, parse_fraction};

use crate::{AnnouncementSink, SessionError, SessionResult};

/// Where positions come from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SourceMode {
    /// Positions arrive from the poll subscription.
    #[default]
    Gps,
    /// Positions come from the progress slider or typed coordinates.
    Demo,
}

impl SourceMode {
    pub fn toggled(self) -> SourceMode {
        match self {
            SourceMode::Gps => SourceMode::Demo,
            SourceMode::Demo => SourceMode::Gps,
        }
    }
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SourceMode::Gps => "GPS",
            SourceMode::Demo => "DEMO",
        })
    }
}

/// Tracking state for a single vehicle.
///
/// Positions are accepted before the route is started (they update the
/// displayed position and distances) but only drive progress afterwards.
#[derive(Debug, Clone)]
pub struct Session {
    tracker:   ProgressTracker,
    direction: Direction,
    progress:  Option<ProgressState>,
    mode:      SourceMode,
    position:  Option<GeoPoint>,
    fix_lost:  bool,
    fraction:  f64,
    distances: Vec<f64>,
}

impl Session {
    pub fn new(tracker: ProgressTracker) -> Self {
        Self {
            tracker,
            direction: Direction::default(),
            progress:  None,
            mode:      SourceMode::default(),
            position:  None,
            fix_lost:  false,
            fraction:  0.0,
            distances: Vec::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// `None` until [`start_route`][Self::start_route].
    pub fn progress(&self) -> Option<&ProgressState> {
        self.progress.as_ref()
    }

    pub fn is_started(&self) -> bool {
        self.progress.is_some()
    }

    pub fn mode(&self) -> SourceMode {
        self.mode
    }

    /// Last known position.  Survives "no fix" reports.
    pub fn position(&self) -> Option<GeoPoint> {
        self.position
    }

    /// `true` when the most recent poll reported no fix.
    pub fn fix_lost(&self) -> bool {
        self.fix_lost
    }

    /// Last slider value applied in demo mode.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Distance to every stop from the last known position.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    // ── Control ───────────────────────────────────────────────────────────

    /// Begin a traversal in `direction`, discarding any earlier progress.
    pub fn start_route<S: AnnouncementSink>(&mut self, direction: Direction, sink: &mut S) {
        self.direction = direction;
        self.progress = Some(self.tracker.start(direction));
        log::info!("route started {direction}");
        sink.on_start(direction);
    }

    /// Switch between GPS and demo input.  Progress is kept.
    pub fn set_mode(&mut self, mode: SourceMode) {
        if mode != self.mode {
            log::info!("source mode {} -> {mode}", self.mode);
            self.mode = mode;
        }
    }

    pub fn can_reverse(&self) -> bool {
        self.progress.as_ref().is_some_and(|s| self.tracker.can_reverse(s, self.direction))
    }

    /// Reverse direction at the end of the line.
    ///
    /// Returns `Ok(false)` when the vehicle is not at the terminal stop; the
    /// request is ignored.
    pub fn reverse<S: AnnouncementSink>(&mut self, sink: &mut S) -> SessionResult<bool> {
        let state = self.progress.as_ref().ok_or(SessionError::NotStarted)?;
        if !self.tracker.can_reverse(state, self.direction) {
            return Ok(false);
        }
        let (state, direction) = self.tracker.reverse(state, self.direction);
        self.progress = Some(state);
        self.direction = direction;
        sink.on_reverse(direction);
        Ok(true)
    }

    // ── Position input ────────────────────────────────────────────────────

    /// Feed a validated position.  Returns the tracker outcome once the route
    /// has started, `None` before.
    pub fn apply_position<S: AnnouncementSink>(
        &mut self,
        position: GeoPoint,
        sink:     &mut S,
    ) -> Option<UpdateOutcome> {
        self.position = Some(position);
        self.fix_lost = false;

        let Some(state) = self.progress.as_ref() else {
            self.distances = self.tracker.route().distances_from(position);
            return None;
        };

        let outcome = self.tracker.update(position, state, self.direction);
        self.progress = Some(outcome.state);
        self.distances.clone_from(&outcome.distances);
        for event in &outcome.events {
            sink.announce(event);
        }
        Some(outcome)
    }

    /// Apply one poll outcome.
    ///
    /// A fix is applied as a position.  "No fix" keeps the last known
    /// position and flags it as stale.  A failed fetch changes nothing.
    pub fn apply_poll_event<S: AnnouncementSink>(
        &mut self,
        event: &PollEvent,
        sink:  &mut S,
    ) -> Option<UpdateOutcome> {
        match event {
            PollEvent::Fix(p) => self.apply_position(*p, sink),
            PollEvent::NoFix => {
                self.fix_lost = true;
                None
            }
            PollEvent::Failed(msg) => {
                log::debug!("ignoring failed poll: {msg}");
                None
            }
        }
    }

    /// Demo mode: place the vehicle at `fraction` of the way along the
    /// waypoint path.
    ///
    /// # Errors
    ///
    /// [`SessionError::WrongMode`] outside demo mode, or the
    /// [`parse_fraction`] error for a value outside `[0, 1]`.  Either way
    /// nothing changes.
    pub fn set_fraction<S: AnnouncementSink>(
        &mut self,
        fraction: f64,
        sink:     &mut S,
    ) -> SessionResult<Option<UpdateOutcome>> {
        self.require_demo("the progress slider")?;
        let fraction = parse_fraction(fraction)?;
        self.fraction = fraction;
        let position = self.tracker.route().waypoint_at(fraction);
        Ok(self.apply_position(position, sink))
    }

    /// Demo mode: apply a typed `"lat,lng"` position.
    ///
    /// # Errors
    ///
    /// [`SessionError::WrongMode`] outside demo mode, or the
    /// [`parse_coords`] error for malformed or out-of-range text.  Either way
    /// nothing changes.
    pub fn set_coords<S: AnnouncementSink>(
        &mut self,
        text: &str,
        sink: &mut S,
    ) -> SessionResult<Option<UpdateOutcome>> {
        self.require_demo("manual coordinates")?;
        let position = parse_coords(text)?;
        Ok(self.apply_position(position, sink))
    }

    // ── Status ────────────────────────────────────────────────────────────

    /// `"{d}m from BUS STOP {name}"` for the current stop, once the route
    /// has started and a position is known.
    pub fn status_line(&self) -> Option<String> {
        let state = self.progress.as_ref()?;
        let d = self.distances.get(state.current.index())?;
        let name = &self.tracker.route().stop(state.current).name;
        Some(format!("{}m from BUS STOP {name}", d.round()))
    }

    fn require_demo(&self, action: &'static str) -> SessionResult<()> {
        if self.mode != SourceMode::Demo {
            return Err(SessionError::WrongMode {
                action,
                expected: SourceMode::Demo,
                actual:   self.mode,
            });
        }
        Ok(())
    }
}
