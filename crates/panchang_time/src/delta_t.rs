//! ΔT = TT − UT, the drift between uniform dynamical time and Earth rotation.
//!
//! Piecewise polynomials from Espenak & Meeus, *Five Millennium Canon of
//! Solar Eclipses* (NASA TP-2006-214141), for 1900–2150, with the long-term
//! parabola outside that span. UTC is treated as UT1 (|UT1 − UTC| < 0.9 s).

use crate::julian::J2000_JD;

/// Decimal Gregorian year for a Julian Date (UTC).
pub fn jd_utc_to_decimal_year(jd_utc: f64) -> f64 {
    2000.0 + (jd_utc - J2000_JD) / 365.2425
}

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1900.0 || year >= 2150.0 {
        return long_term(year);
    }
    if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else {
        long_term(year) - 0.5628 * (2150.0 - year)
    }
}

fn long_term(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000_near_64s() {
        let dt = delta_t_seconds(2000.0);
        assert!((dt - 63.86).abs() < 0.01, "dt = {dt}");
    }

    #[test]
    fn year_2024_near_70s() {
        let dt = delta_t_seconds(2024.0);
        assert!((dt - 73.9).abs() < 1.0, "dt = {dt}");
    }

    #[test]
    fn continuous_at_2005() {
        let below = delta_t_seconds(2004.9999);
        let above = delta_t_seconds(2005.0);
        assert!((below - above).abs() < 0.2, "{below} vs {above}");
    }

    #[test]
    fn continuous_at_2050() {
        let below = delta_t_seconds(2049.9999);
        let above = delta_t_seconds(2050.0);
        assert!((below - above).abs() < 0.5, "{below} vs {above}");
    }

    #[test]
    fn decimal_year_of_j2000() {
        let y = jd_utc_to_decimal_year(J2000_JD);
        assert!((y - 2000.0).abs() < 1e-12);
    }
}
