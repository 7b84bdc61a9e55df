//! Geocentric lunar longitude.
//!
//! Main longitude series of Meeus, *Astronomical Algorithms* (2nd ed.),
//! chapter 47 (Table 47.A, 60 terms) with the three additive terms for
//! Venus, Jupiter and the flattening of the Earth. Referred to the mean
//! equinox of date. Accuracy is ~10″.

use crate::fundamental::normalize_deg;

/// Mean arguments of the lunar theory in degrees: `[L', D, M, M', F]`.
fn mean_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let lp = 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0;
    let mp = 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    [lp, d, m, mp, f]
}

/// Table 47.A longitude terms: `[D, M, M', F, Σl]`, Σl in 1e-6 degree.
#[rustfmt::skip]
static TERMS: [[i32; 5]; 59] = [
    //  D   M   M'  F        Σl
    [   0,  0,  1,  0,  6_288_774],
    [   2,  0, -1,  0,  1_274_027],
    [   2,  0,  0,  0,    658_314],
    [   0,  0,  2,  0,    213_618],
    [   0,  1,  0,  0,   -185_116],
    [   0,  0,  0,  2,   -114_332],
    [   2,  0, -2,  0,     58_793],
    [   2, -1, -1,  0,     57_066],
    [   2,  0,  1,  0,     53_322],
    [   2, -1,  0,  0,     45_758],
    [   0,  1, -1,  0,    -40_923],
    [   1,  0,  0,  0,    -34_720],
    [   0,  1,  1,  0,    -30_383],
    [   2,  0,  0, -2,     15_327],
    [   0,  0,  1,  2,    -12_528],
    [   0,  0,  1, -2,     10_980],
    [   4,  0, -1,  0,     10_675],
    [   0,  0,  3,  0,     10_034],
    [   4,  0, -2,  0,      8_548],
    [   2,  1, -1,  0,     -7_888],
    [   2,  1,  0,  0,     -6_766],
    [   1,  0, -1,  0,     -5_163],
    [   1,  1,  0,  0,      4_987],
    [   2, -1,  1,  0,      4_036],
    [   2,  0,  2,  0,      3_994],
    [   4,  0,  0,  0,      3_861],
    [   2,  0, -3,  0,      3_665],
    [   0,  1, -2,  0,     -2_689],
    [   2,  0, -1,  2,     -2_602],
    [   2, -1, -2,  0,      2_390],
    [   1,  0,  1,  0,     -2_348],
    [   2, -2,  0,  0,      2_236],
    [   0,  1,  2,  0,     -2_120],
    [   0,  2,  0,  0,     -2_069],
    [   2, -2, -1,  0,      2_048],
    [   2,  0,  1, -2,     -1_773],
    [   2,  0,  0,  2,     -1_595],
    [   4, -1, -1,  0,      1_215],
    [   0,  0,  2,  2,     -1_110],
    [   3,  0, -1,  0,       -892],
    [   2,  1,  1,  0,       -810],
    [   4, -1, -2,  0,        759],
    [   0,  2, -1,  0,       -713],
    [   2,  2, -1,  0,       -700],
    [   2,  1, -2,  0,        691],
    [   2, -1,  0, -2,        596],
    [   4,  0,  1,  0,        549],
    [   0,  0,  4,  0,        537],
    [   4, -1,  0,  0,        520],
    [   1,  0, -2,  0,       -487],
    [   2,  1,  0, -2,       -399],
    [   0,  0,  2, -2,       -381],
    [   1,  1,  1,  0,        351],
    [   3,  0, -2,  0,       -340],
    [   4,  0, -3,  0,        330],
    [   2, -1,  2,  0,        327],
    [   0,  2,  1,  0,       -323],
    [   1,  1, -1,  0,        299],
    [   2,  0,  3,  0,        294],
];

/// Moon's ecliptic longitude in degrees [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn moon_longitude_deg(t: f64) -> f64 {
    let [lp, d, m, mp, f] = mean_arguments(t);
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;

    let (d_r, m_r, mp_r, f_r) = (
        d.to_radians(),
        m.to_radians(),
        mp.to_radians(),
        f.to_radians(),
    );

    let mut sigma_l = 0.0_f64;
    for term in &TERMS {
        let arg = term[0] as f64 * d_r
            + term[1] as f64 * m_r
            + term[2] as f64 * mp_r
            + term[3] as f64 * f_r;
        let ecc = match term[1].abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sigma_l += term[4] as f64 * ecc * arg.sin();
    }

    // Venus, Jupiter and flattening terms
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    sigma_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).to_radians().sin() + 318.0 * a2.sin();

    normalize_deg(lp + sigma_l / 1_000_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12.0 TD: λ = 133.162655 deg (before nutation).
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let lon = moon_longitude_deg(t);
        assert!((lon - 133.162655).abs() < 0.001, "moon = {lon}");
    }

    #[test]
    fn mean_motion_about_13_deg_per_day() {
        let mut total = 0.0;
        for day in 0..27 {
            let t0 = day as f64 / 36_525.0;
            let t1 = (day + 1) as f64 / 36_525.0;
            total += normalize_deg(moon_longitude_deg(t1) - moon_longitude_deg(t0));
        }
        let mean = total / 27.0;
        assert!((mean - 13.18).abs() < 0.3, "mean daily motion = {mean}");
    }

    #[test]
    fn always_direct() {
        for hour in 0..(24 * 60) {
            let t0 = hour as f64 / 24.0 / 36_525.0;
            let t1 = (hour as f64 + 1.0) / 24.0 / 36_525.0;
            let d = normalize_deg(moon_longitude_deg(t1) - moon_longitude_deg(t0));
            assert!(d > 0.3 && d < 0.8, "hourly motion {d} at hour {hour}");
        }
    }
}
