//! Geometric sunrise/sunset and twilight.
//!
//! Closed-form solar model from the U.S. Naval Observatory "Almanac for
//! Computers" (1990): day of year gives the mean anomaly, then the true
//! longitude, right ascension, declination and finally the local hour angle
//!
//! `cos H = (cos z − sin δ sin φ) / (cos δ cos φ)`
//!
//! Accuracy is about a minute at mid latitudes. The event is returned as an
//! absolute instant inside the location's local civil day.

use panchang_time::{CivilDate, Instant};

use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};
use crate::util::normalize_360;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Compute one rise/set event for the local civil `date` at `location`.
///
/// Returns [`RiseSetResult::NeverRises`] or [`RiseSetResult::NeverSets`]
/// when the hour-angle cosine leaves [-1, 1]; never NaN.
pub fn compute_rise_set(
    date: CivilDate,
    location: &GeoLocation,
    event: RiseSetEvent,
    config: &RiseSetConfig,
) -> RiseSetResult {
    let n = date.day_of_year() as f64;
    let lng_hour = location.longitude_deg / 15.0;
    let base_hour = if event.is_rising() { 6.0 } else { 18.0 };
    let t = n + (base_hour - lng_hour) / 24.0;

    // Sun's mean anomaly and true longitude
    let m = 0.9856 * t - 3.289;
    let m_rad = m.to_radians();
    let l = normalize_360(m + 1.916 * m_rad.sin() + 0.020 * (2.0 * m_rad).sin() + 282.634);
    let l_rad = l.to_radians();

    // Right ascension, moved into the same quadrant as L
    let mut ra = normalize_360((0.91764 * l_rad.tan()).atan().to_degrees());
    let l_quadrant = (l / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    ra += l_quadrant - ra_quadrant;
    let ra_hours = ra / 15.0;

    let sin_dec = 0.39782 * l_rad.sin();
    let cos_dec = sin_dec.asin().cos();

    let phi = location.latitude_deg.to_radians();
    let zenith = config.zenith_deg(event).to_radians();
    let cos_h = (zenith.cos() - sin_dec * phi.sin()) / (cos_dec * phi.cos());
    if !cos_h.is_finite() || cos_h > 1.0 {
        return RiseSetResult::NeverRises;
    }
    if cos_h < -1.0 {
        return RiseSetResult::NeverSets;
    }

    let h_deg = if event.is_rising() {
        360.0 - cos_h.acos().to_degrees()
    } else {
        cos_h.acos().to_degrees()
    };
    let h_hours = h_deg / 15.0;

    let local_mean_time = h_hours + ra_hours - 0.06571 * t - 6.622;
    let ut_hours = (local_mean_time - lng_hour).rem_euclid(24.0);

    // Place the event inside [local midnight, local midnight + 24h)
    let day_start = location.offset.local_midnight(date);
    let mut instant = Instant::from_jd_utc(date.jd_midnight()).add_seconds(ut_hours * SECONDS_PER_HOUR);
    while instant < day_start {
        instant = instant.add_days(1.0);
    }
    while instant.seconds_since(day_start) >= 86_400.0 {
        instant = instant.add_days(-1.0);
    }

    RiseSetResult::Event { instant, event }
}

/// Sunrise on the local civil `date`.
pub fn sunrise(date: CivilDate, location: &GeoLocation, config: &RiseSetConfig) -> RiseSetResult {
    compute_rise_set(date, location, RiseSetEvent::Sunrise, config)
}

/// Sunset on the local civil `date`.
pub fn sunset(date: CivilDate, location: &GeoLocation, config: &RiseSetConfig) -> RiseSetResult {
    compute_rise_set(date, location, RiseSetEvent::Sunset, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchang_time::UtcOffset;

    fn delhi() -> GeoLocation {
        GeoLocation {
            latitude_deg: 28.6139,
            longitude_deg: 77.2090,
            offset: UtcOffset::from_minutes(330).unwrap(),
        }
    }

    fn event_instant(r: RiseSetResult) -> Instant {
        match r {
            RiseSetResult::Event { instant, .. } => instant,
            other => panic!("expected event, got {other:?}"),
        }
    }

    #[test]
    fn delhi_equinox_sunrise() {
        // 2024-03-20 sunrise in New Delhi: 06:24 IST = 00:54 UTC
        let date = CivilDate::new(2024, 3, 20).unwrap();
        let rise = event_instant(sunrise(date, &delhi(), &RiseSetConfig::default()));
        let expected = Instant::from_utc(&panchang_time::UtcTime::new(2024, 3, 20, 0, 54, 0.0));
        let diff_min = rise.seconds_since(expected) / 60.0;
        assert!(diff_min.abs() < 5.0, "sunrise off by {diff_min} min: {rise}");
    }

    #[test]
    fn sunset_after_sunrise() {
        let date = CivilDate::new(2024, 6, 21).unwrap();
        let cfg = RiseSetConfig::default();
        let rise = event_instant(sunrise(date, &delhi(), &cfg));
        let set = event_instant(sunset(date, &delhi(), &cfg));
        assert!(rise < set);
        let hours = set.seconds_since(rise) / 3600.0;
        assert!((13.0..14.5).contains(&hours), "day length {hours} h");
    }

    #[test]
    fn twilight_brackets_sunrise() {
        let date = CivilDate::new(2024, 1, 10).unwrap();
        let cfg = RiseSetConfig::default();
        let dawn = event_instant(compute_rise_set(date, &delhi(), RiseSetEvent::CivilDawn, &cfg));
        let astro = event_instant(compute_rise_set(
            date,
            &delhi(),
            RiseSetEvent::AstronomicalDawn,
            &cfg,
        ));
        let rise = event_instant(sunrise(date, &delhi(), &cfg));
        assert!(astro < dawn && dawn < rise);
    }

    #[test]
    fn polar_night_and_midnight_sun() {
        let tromso = GeoLocation {
            latitude_deg: 69.65,
            longitude_deg: 18.96,
            offset: UtcOffset::from_minutes(60).unwrap(),
        };
        let cfg = RiseSetConfig::default();
        let winter = CivilDate::new(2024, 12, 21).unwrap();
        let summer = CivilDate::new(2024, 6, 21).unwrap();
        assert_eq!(sunrise(winter, &tromso, &cfg), RiseSetResult::NeverRises);
        assert_eq!(sunset(summer, &tromso, &cfg), RiseSetResult::NeverSets);
    }

    #[test]
    fn western_sunset_stays_in_local_day() {
        // Los Angeles sunset falls after 00:00 UTC of the next day.
        let la = GeoLocation {
            latitude_deg: 34.05,
            longitude_deg: -118.24,
            offset: UtcOffset::from_minutes(-8 * 60).unwrap(),
        };
        let date = CivilDate::new(2024, 1, 15).unwrap();
        let set = event_instant(sunset(date, &la, &RiseSetConfig::default()));
        assert_eq!(la.offset.civil_date_of(set), date);
        let utc = set.to_utc();
        assert_eq!((utc.month, utc.day), (1, 16));
    }
}
