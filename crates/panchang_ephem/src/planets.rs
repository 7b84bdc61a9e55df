//! Geocentric longitudes of Mercury through Saturn.
//!
//! Keplerian elements and rates from E. M. Standish, "Keplerian Elements
//! for Approximate Positions of the Major Planets" (JPL), Table 1, valid
//! 1800–2050 AD, referred to the J2000 ecliptic and equinox. The geocentric
//! J2000 longitude is carried to the mean equinox of date with the general
//! precession in longitude.

use crate::body::Body;
use crate::fundamental::{general_precession_longitude_deg, normalize_deg};

/// Julian Date bounds of the element table (1800-01-01 .. 2050-12-31).
pub const VALID_JD_RANGE: (f64, f64) = (2_378_496.5, 2_470_172.5);

/// Osculating-element row: `[a, e, I, L, ϖ, Ω]` (au, -, deg ×4).
type Elements = [f64; 6];

/// `(elements at J2000, rates per Julian century)`.
#[rustfmt::skip]
static MERCURY: (Elements, Elements) = (
    [0.38709927, 0.20563593, 7.00497902, 252.25032350, 77.45779628, 48.33076593],
    [0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081],
);
#[rustfmt::skip]
static VENUS: (Elements, Elements) = (
    [0.72333566, 0.00677672, 3.39467605, 181.97909950, 131.60246718, 76.67984255],
    [0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418],
);
#[rustfmt::skip]
static EM_BARY: (Elements, Elements) = (
    [1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0],
    [0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364, 0.0],
);
#[rustfmt::skip]
static MARS: (Elements, Elements) = (
    [1.52371034, 0.09339410, 1.84969142, -4.55343205, -23.94362959, 49.55953891],
    [0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343],
);
#[rustfmt::skip]
static JUPITER: (Elements, Elements) = (
    [5.20288700, 0.04838624, 1.30439695, 34.39644051, 14.72847983, 100.47390909],
    [-0.00011607, -0.00013253, -0.00183714, 3034.74612775, 0.21252668, 0.20469106],
);
#[rustfmt::skip]
static SATURN: (Elements, Elements) = (
    [9.53667594, 0.05386179, 2.48599187, 49.95424423, 92.59887831, 113.66242448],
    [-0.00125060, -0.00050991, 0.00193609, 1222.49362201, -0.54179478, -0.28867794],
);

fn elements_for(body: Body) -> Option<&'static (Elements, Elements)> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Sun | Body::Moon => None,
    }
}

/// Solve Kepler's equation `E - e sin E = M` (radians) by Newton iteration.
fn eccentric_anomaly(m: f64, e: f64) -> f64 {
    let mut ea = m + e * m.sin();
    for _ in 0..20 {
        let delta = (ea - e * ea.sin() - m) / (1.0 - e * ea.cos());
        ea -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ea
}

/// Heliocentric J2000-ecliptic position in au.
fn heliocentric_xyz(table: &(Elements, Elements), t: f64) -> [f64; 3] {
    let (base, rate) = table;
    let el: [f64; 6] = std::array::from_fn(|i| base[i] + rate[i] * t);
    let [a, e, inc, l, peri, node] = el;

    let m = normalize_deg(l - peri).to_radians();
    let omega = (peri - node).to_radians();
    let (inc, node) = (inc.to_radians(), node.to_radians());

    let ea = eccentric_anomaly(m, e);
    let xp = a * (ea.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ea.sin();

    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = inc.sin_cos();
    [
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        (so * si) * xp + (co * si) * yp,
    ]
}

/// Geocentric ecliptic longitude (mean equinox of date) in degrees [0, 360).
///
/// Returns `None` for bodies without an element set (Sun, Moon).
/// `t` = Julian centuries of TT since J2000.0.
pub fn planet_longitude_deg(body: Body, t: f64) -> Option<f64> {
    let table = elements_for(body)?;
    let p = heliocentric_xyz(table, t);
    let earth = heliocentric_xyz(&EM_BARY, t);
    let lon_j2000 = (p[1] - earth[1]).atan2(p[0] - earth[0]).to_degrees();
    Some(normalize_deg(lon_j2000 + general_precession_longitude_deg(t)))
}
