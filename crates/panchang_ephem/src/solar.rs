//! Geocentric solar longitude.
//!
//! Low-precision theory from Meeus, *Astronomical Algorithms* (2nd ed.),
//! chapter 25: geometric mean longitude plus equation of centre, corrected
//! for annual aberration. Referred to the mean equinox of date; nutation is
//! left out so that Sun and Moon share one frame. Accuracy is ~0.01°.

use crate::fundamental::normalize_deg;

/// Constant of annual aberration applied to the geometric longitude (deg).
const ABERRATION_DEG: f64 = -0.005_694;

/// Sun's apparent ecliptic longitude in degrees [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn sun_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t2;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t2).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    normalize_deg(l0 + c + ABERRATION_DEG)
}
