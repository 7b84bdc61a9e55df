//! Day assembly: the ruling angas of a sunrise-to-sunrise civil day.
//!
//! Activity is always a half-open test on absolute instants: a segment
//! ending exactly at a sunrise belongs to the following day.

use panchang_base::{
    GeoLocation, RiseSetResult, Tithi, Vaar, ayana_from_sidereal_longitude,
    nakshatra_from_longitude, sunrise, sunset,
};
use panchang_ephem::{Ephemeris, sidereal_position};
use panchang_time::{CivilDate, Instant};
use tracing::debug;

use crate::anga::{resolve_anga, segments_between};
use crate::anga_types::{AngaKind, AngaSegment};
use crate::config::PanchangConfig;
use crate::day_types::{DayRecord, DayTithi, TithiStatus};
use crate::error::SearchError;
use crate::masa::{masa_at, telugu_year};
use crate::scan::check_plausible;

/// The segment active at `instant`, if any.
pub fn segment_at(segments: &[AngaSegment], instant: Instant) -> Option<&AngaSegment> {
    segments.iter().find(|s| s.contains(instant))
}

/// Classify the tithi of the day `[sunrise, next_sunrise)`.
///
/// `segments` must cover both sunrises. A segment lying strictly between
/// them, touching neither, is kshaya and the sunrise tithi stays primary; a
/// sunrise tithi still active at the next sunrise is vriddhi.
pub fn assemble_tithi(
    sunrise: Instant,
    next_sunrise: Instant,
    segments: &[AngaSegment],
) -> Result<DayTithi, SearchError> {
    if sunrise.total_cmp(&next_sunrise).is_ge() {
        return Err(SearchError::InvalidInput(format!(
            "sunrise {sunrise} not before next sunrise {next_sunrise}"
        )));
    }
    let primary = *segment_at(segments, sunrise).ok_or_else(|| {
        SearchError::InvalidInput(format!("no tithi segment spans sunrise {sunrise}"))
    })?;

    let kshaya = segments
        .iter()
        .find(|s| s.start > sunrise && s.end < next_sunrise)
        .copied();

    let status = if kshaya.is_some() {
        TithiStatus::Kshaya
    } else if primary.contains(next_sunrise) {
        TithiStatus::Vriddhi
    } else {
        TithiStatus::Normal
    };

    Ok(DayTithi {
        primary,
        status,
        kshaya,
    })
}

fn require_sunrise(result: RiseSetResult, date: CivilDate) -> Result<Instant, SearchError> {
    result.instant().ok_or(SearchError::NoSunrise { date })
}

/// Sunrise on `date` and on the following day.
pub fn sunrise_bracket(
    date: CivilDate,
    location: &GeoLocation,
    config: &PanchangConfig,
) -> Result<(Instant, Instant), SearchError> {
    let rise = require_sunrise(sunrise(date, location, &config.riseset), date)?;
    let next_date = date.succ();
    let next = require_sunrise(sunrise(next_date, location, &config.riseset), next_date)?;
    Ok((rise, next))
}

/// Assemble the full record for one civil day at one location.
pub fn day_record(
    eph: &dyn Ephemeris,
    date: CivilDate,
    location: &GeoLocation,
    config: &PanchangConfig,
) -> Result<DayRecord, SearchError> {
    location.validate()?;
    let (rise, next_rise) = sunrise_bracket(date, location, config)?;
    let set = sunset(date, location, &config.riseset).instant();
    let aya = config.ayanamsha;
    let search = &config.search;

    let tithi_segments = segments_between(eph, AngaKind::Tithi, rise, next_rise, aya, search)?;
    let tithi = assemble_tithi(rise, next_rise, &tithi_segments)?;
    check_plausible(&tithi.primary, search)?;
    if tithi.status != TithiStatus::Normal {
        debug!(%date, status = tithi.status.name(), "tithi edge case");
    }

    let nakshatra = resolve_anga(eph, AngaKind::Nakshatra, rise, aya, search)?;
    let yoga = resolve_anga(eph, AngaKind::Yoga, rise, aya, search)?;
    let karana = resolve_anga(eph, AngaKind::Karana, rise, aya, search)?;
    for seg in [&nakshatra, &yoga, &karana] {
        check_plausible(seg, search)?;
    }

    let pos = sidereal_position(eph, rise, aya)?;
    let nakshatra_pada = nakshatra_from_longitude(pos.moon).pada;
    let masa = masa_at(eph, rise, aya, search)?;

    let paksha = Tithi::from_index(tithi.primary.index)
        .map(Tithi::paksha)
        .ok_or_else(|| SearchError::InvalidInput(format!("tithi {}", tithi.primary.index)))?;

    Ok(DayRecord {
        date,
        sunrise: rise,
        sunset: set,
        next_sunrise: next_rise,
        tithi,
        paksha,
        nakshatra,
        nakshatra_pada,
        yoga,
        karana,
        telugu_year: telugu_year(&masa, location.offset),
        ayana: ayana_from_sidereal_longitude(pos.sun),
        ritu: masa.masa.ritu(),
        vaar: Vaar::from_index(date.weekday_index()),
        masa,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hours: f64) -> Instant {
        Instant::J2000.add_seconds(hours * 3600.0)
    }

    fn seg(index: u8, from_h: f64, to_h: f64) -> AngaSegment {
        AngaSegment::new(AngaKind::Tithi, index, at(from_h), at(to_h))
    }

    #[test]
    fn normal_day() {
        let segs = [seg(4, -10.0, 12.0), seg(5, 12.0, 35.0)];
        let day = assemble_tithi(at(6.0), at(30.0), &segs).unwrap();
        assert_eq!(day.status, TithiStatus::Normal);
        assert_eq!(day.primary.index, 4);
        assert_eq!(day.kshaya, None);
    }

    #[test]
    fn kshaya_between_sunrises() {
        // Sunrises at 06:00 and 30:00; tithi 6 runs 08:00-20:00
        let segs = [seg(5, -12.0, 8.0), seg(6, 8.0, 20.0), seg(7, 20.0, 44.0)];
        let day = assemble_tithi(at(6.0), at(30.0), &segs).unwrap();
        assert_eq!(day.status, TithiStatus::Kshaya);
        assert_eq!(day.primary.index, 5);
        assert_eq!(day.kshaya.map(|s| s.index), Some(6));
    }

    #[test]
    fn vriddhi_spans_both_sunrises() {
        let segs = [seg(9, 2.0, 31.0)];
        let day = assemble_tithi(at(6.0), at(30.0), &segs).unwrap();
        assert_eq!(day.status, TithiStatus::Vriddhi);
        assert_eq!(day.primary.index, 9);
    }

    #[test]
    fn segment_ending_at_sunrise_belongs_to_next_day() {
        let segs = [seg(1, -20.0, 6.0), seg(2, 6.0, 29.0), seg(3, 29.0, 50.0)];
        let day = assemble_tithi(at(6.0), at(30.0), &segs).unwrap();
        assert_eq!(day.primary.index, 2);
        assert_eq!(day.status, TithiStatus::Normal);
    }

    #[test]
    fn segment_touching_next_sunrise_is_not_kshaya() {
        let segs = [seg(1, 0.0, 10.0), seg(2, 10.0, 30.0), seg(3, 30.0, 50.0)];
        let day = assemble_tithi(at(6.0), at(30.0), &segs).unwrap();
        assert_eq!(day.status, TithiStatus::Normal);
        assert_eq!(day.primary.index, 1);
    }

    #[test]
    fn missing_sunrise_segment_rejected() {
        let segs = [seg(1, 8.0, 20.0)];
        assert!(matches!(
            assemble_tithi(at(6.0), at(30.0), &segs),
            Err(SearchError::InvalidInput(_))
        ));
        assert!(assemble_tithi(at(6.0), at(6.0), &segs).is_err());
    }
}
