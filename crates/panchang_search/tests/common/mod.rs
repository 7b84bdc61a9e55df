//! Synthetic ephemerides with exactly known anga boundaries.

#![allow(dead_code)]

use panchang_ephem::{Body, Ephemeris, EphemerisError};
use panchang_time::Instant;

/// Mean elongation rate in degrees per day.
pub const ELONGATION_RATE: f64 = 360.0 / 29.530_588_853;
const SUN_RATE: f64 = 0.985_647;

fn days(instant: Instant) -> f64 {
    instant.seconds_since(Instant::J2000) / 86_400.0
}

/// Uniform motion, except that the elongation covers
/// `[zone_start_deg, zone_end_deg)` in `zone_days` during its first pass.
#[derive(Debug, Clone, Copy)]
pub struct PiecewiseEphemeris {
    pub zone_start_deg: f64,
    pub zone_end_deg: f64,
    pub zone_days: f64,
}

impl PiecewiseEphemeris {
    /// Days after J2000 at which the zone opens.
    pub fn zone_opens(&self) -> f64 {
        self.zone_start_deg / ELONGATION_RATE
    }

    pub fn elongation(&self, d: f64) -> f64 {
        let open = self.zone_opens();
        if d < open {
            ELONGATION_RATE * d
        } else if d < open + self.zone_days {
            let frac = (d - open) / self.zone_days;
            self.zone_start_deg + (self.zone_end_deg - self.zone_start_deg) * frac
        } else {
            self.zone_end_deg + ELONGATION_RATE * (d - open - self.zone_days)
        }
    }
}

impl Ephemeris for PiecewiseEphemeris {
    fn tropical_longitude(&self, body: Body, instant: Instant) -> Result<f64, EphemerisError> {
        let d = days(instant);
        let sun = SUN_RATE * d;
        match body {
            Body::Sun => Ok(sun.rem_euclid(360.0)),
            Body::Moon => Ok((sun + self.elongation(d)).rem_euclid(360.0)),
            _ => Ok(0.0),
        }
    }
}

/// Moon locked 5° ahead of the Sun: no tithi boundary ever occurs.
#[derive(Debug, Clone, Copy)]
pub struct FrozenEphemeris;

impl Ephemeris for FrozenEphemeris {
    fn tropical_longitude(&self, body: Body, instant: Instant) -> Result<f64, EphemerisError> {
        let sun = SUN_RATE * days(instant);
        match body {
            Body::Moon => Ok((sun + 5.0).rem_euclid(360.0)),
            _ => Ok(sun.rem_euclid(360.0)),
        }
    }
}
