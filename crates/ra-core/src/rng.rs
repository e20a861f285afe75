//! Deterministic RNG for simulated GPS noise.
//!
//! The simulated position source perturbs interpolated waypoints so that demo
//! runs exercise the threshold debounce the way a real receiver does.  Runs
//! are reproducible for a given seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::GeoPoint;
use crate::geo::EARTH_RADIUS_M;

/// Metres per degree of latitude on the mean-radius sphere.
const METRES_PER_DEG_LAT: f64 = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

/// Seeded RNG that offsets positions by a bounded random amount.
#[derive(Clone)]
pub struct JitterRng(SmallRng);

impl JitterRng {
    pub fn new(seed: u64) -> Self {
        JitterRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Offset `point` by up to `max_m` metres north/south and east/west.
    ///
    /// `max_m <= 0` returns `point` unchanged.
    pub fn jitter(&mut self, point: GeoPoint, max_m: f64) -> GeoPoint {
        if max_m <= 0.0 {
            return point;
        }
        let north_m = self.0.gen_range(-max_m..=max_m);
        let east_m  = self.0.gen_range(-max_m..=max_m);

        let metres_per_deg_lon = METRES_PER_DEG_LAT * point.lat.to_radians().cos().max(1e-6);
        GeoPoint {
            lat: (point.lat + north_m / METRES_PER_DEG_LAT).clamp(-90.0, 90.0),
            lon: (point.lon + east_m / metres_per_deg_lon).clamp(-180.0, 180.0),
        }
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
