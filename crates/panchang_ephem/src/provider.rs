//! The ephemeris contract and its analytic implementation.

use panchang_time::Instant;

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg};
use crate::body::Body;
use crate::error::EphemerisError;
use crate::fundamental::normalize_deg;
use crate::lunar::moon_longitude_deg;
use crate::planets::{VALID_JD_RANGE, planet_longitude_deg};
use crate::solar::sun_longitude_deg;

/// Source of geocentric ecliptic longitudes.
///
/// Implementations must be pure: the same `(body, instant)` always yields
/// the same value, and longitudes advance monotonically (modulo the 360°
/// wrap) for the Sun and Moon.
pub trait Ephemeris: Send + Sync {
    /// Tropical longitude (mean equinox of date) in degrees [0, 360).
    fn tropical_longitude(&self, body: Body, instant: Instant) -> Result<f64, EphemerisError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn tropical_longitude(&self, body: Body, instant: Instant) -> Result<f64, EphemerisError> {
        (**self).tropical_longitude(body, instant)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for Box<E> {
    fn tropical_longitude(&self, body: Body, instant: Instant) -> Result<f64, EphemerisError> {
        (**self).tropical_longitude(body, instant)
    }
}

/// Closed-form ephemeris; see the crate docs for the theories used.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

/// Julian Date bounds accepted for the Sun and Moon (years 1000..3000).
const LUNISOLAR_JD_RANGE: (f64, f64) = (2_086_302.5, 2_816_787.5);

impl AnalyticEphemeris {
    pub const fn new() -> Self {
        Self
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn tropical_longitude(&self, body: Body, instant: Instant) -> Result<f64, EphemerisError> {
        let jd = instant.jd_utc();
        if !jd.is_finite() {
            return Err(EphemerisError::NonFiniteInstant);
        }
        let (lo, hi) = match body {
            Body::Sun | Body::Moon => LUNISOLAR_JD_RANGE,
            _ => VALID_JD_RANGE,
        };
        if !(lo..=hi).contains(&jd) {
            return Err(EphemerisError::EpochOutOfRange { body, jd_utc: jd });
        }

        let t = instant.centuries_tt();
        match body {
            Body::Sun => Ok(sun_longitude_deg(t)),
            Body::Moon => Ok(moon_longitude_deg(t)),
            _ => planet_longitude_deg(body, t).ok_or_else(|| {
                EphemerisError::Provider(format!("no elements for {}", body.name()))
            }),
        }
    }
}

/// Sidereal Sun and Moon longitudes at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealPosition {
    /// Sidereal Sun longitude in degrees [0, 360).
    pub sun: f64,
    /// Sidereal Moon longitude in degrees [0, 360).
    pub moon: f64,
}

/// Sidereal longitude of one body in degrees [0, 360).
pub fn sidereal_longitude(
    eph: &dyn Ephemeris,
    body: Body,
    instant: Instant,
    system: AyanamshaSystem,
) -> Result<f64, EphemerisError> {
    let tropical = eph.tropical_longitude(body, instant)?;
    Ok(normalize_deg(
        tropical - ayanamsha_deg(system, instant.centuries_tt()),
    ))
}

/// Sidereal Sun and Moon longitudes, the input to every anga.
pub fn sidereal_position(
    eph: &dyn Ephemeris,
    instant: Instant,
    system: AyanamshaSystem,
) -> Result<SiderealPosition, EphemerisError> {
    let aya = ayanamsha_deg(system, instant.centuries_tt());
    let sun = eph.tropical_longitude(Body::Sun, instant)?;
    let moon = eph.tropical_longitude(Body::Moon, instant)?;
    Ok(SiderealPosition {
        sun: normalize_deg(sun - aya),
        moon: normalize_deg(moon - aya),
    })
}
