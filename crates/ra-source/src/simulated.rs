//! A simulated vehicle for demos and offline runs.

use ra_core::{GeoPoint, JitterRng};
use ra_route::RouteModel;

use crate::{PositionFetcher, PositionFix, PositionRecord, SourceResult};

/// Shuttles back and forth along a route's waypoint path.
///
/// Each reading advances the slider fraction by `step`.  At either end the
/// vehicle holds position for `dwell` readings, then turns around.  Optional
/// jitter and fix dropouts imitate a real receiver.
#[derive(Clone)]
pub struct SimulatedSource {
    route:     RouteModel,
    fraction:  f64,
    step:      f64,
    dwell:     u32,
    held:      u32,
    jitter_m:  f64,
    dropout_p: f64,
    rng:       JitterRng,
}

impl SimulatedSource {
    /// Start at the first waypoint, moving forward by `step` per reading.
    pub fn new(route: RouteModel, step: f64) -> Self {
        Self {
            route,
            fraction:  0.0,
            step:      step.abs().clamp(1e-6, 1.0),
            dwell:     3,
            held:      0,
            jitter_m:  0.0,
            dropout_p: 0.0,
            rng:       JitterRng::new(0),
        }
    }

    /// Readings to hold at each end of the line before turning.
    pub fn dwell(mut self, readings: u32) -> Self {
        self.dwell = readings;
        self
    }

    /// Random offset of up to `metres` on each axis, seeded for reproducibility.
    pub fn jitter(mut self, metres: f64, seed: u64) -> Self {
        self.jitter_m = metres.max(0.0);
        self.rng = JitterRng::new(seed);
        self
    }

    /// Probability that a reading reports no fix.
    pub fn dropout(mut self, probability: f64) -> Self {
        self.dropout_p = probability.clamp(0.0, 1.0);
        self
    }

    /// Slider position of the next reading.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Produce one reading and advance.
    pub fn next_fix(&mut self) -> PositionFix {
        let point = self.route.waypoint_at(self.fraction);
        self.advance();

        if self.dropout_p > 0.0 && self.rng.gen_bool(self.dropout_p) {
            return PositionFix::NoFix;
        }
        PositionFix::Fix(self.rng.jitter(point, self.jitter_m))
    }

    fn advance(&mut self) {
        let at_end = (self.step > 0.0 && self.fraction >= 1.0)
            || (self.step < 0.0 && self.fraction <= 0.0);
        if at_end {
            if self.held < self.dwell {
                self.held += 1;
                return;
            }
            self.held = 0;
            self.step = -self.step;
        }
        self.fraction = (self.fraction + self.step).clamp(0.0, 1.0);
    }
}

impl PositionFetcher for SimulatedSource {
    async fn fetch(&mut self) -> SourceResult<PositionRecord> {
        Ok(match self.next_fix() {
            PositionFix::Fix(GeoPoint { lat, lon }) => PositionRecord::new(lat, lon),
            PositionFix::NoFix => PositionRecord::default(),
        })
    }
}
