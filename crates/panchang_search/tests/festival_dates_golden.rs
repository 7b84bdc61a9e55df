//! Festival occurrence search over real years.

use panchang_base::{GeoLocation, Masa};
use panchang_ephem::AnalyticEphemeris;
use panchang_search::{PanchangConfig, Panchangam, SearchError};
use panchang_time::{CivilDate, Instant, UtcOffset, UtcTime};

fn engine() -> Panchangam<AnalyticEphemeris> {
    Panchangam::with_builtin_festivals(AnalyticEphemeris::new(), PanchangConfig::default())
        .unwrap()
}

fn hyderabad() -> GeoLocation {
    GeoLocation::new(17.385, 78.4867, UtcOffset::from_minutes(330).unwrap()).unwrap()
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Instant {
    Instant::from_utc(&UtcTime::new(y, mo, d, h, mi, 0.0))
}

#[test]
fn ugadi_2024_once() {
    let p = engine();
    let hits = p
        .festival_dates(
            "ugadi",
            utc(2024, 1, 1, 0, 0),
            utc(2025, 1, 1, 0, 0),
            &hyderabad(),
        )
        .unwrap();
    assert_eq!(hits.len(), 1);
    let ugadi = &hits[0];
    assert_eq!(ugadi.masa.masa, Masa::Chaitra);
    let off = ugadi.start.seconds_since(utc(2024, 4, 8, 18, 21));
    assert!(off.abs() < 180.0, "start off by {off} s");
    let hours = ugadi.end.seconds_since(ugadi.start) / 3600.0;
    assert!((19.0..27.0).contains(&hours));

    // The day-level matcher agrees on the civil day
    let day = p.day(CivilDate::new(2024, 4, 9).unwrap(), &hyderabad()).unwrap();
    assert!(ugadi.start <= day.sunrise && day.sunrise < ugadi.end);
}

#[test]
fn purnima_every_lunation() {
    let p = engine();
    let hits = p
        .festival_dates(
            "purnima",
            utc(2024, 1, 1, 0, 0),
            utc(2025, 1, 1, 0, 0),
            &hyderabad(),
        )
        .unwrap();
    assert_eq!(hits.len(), 12);
    for pair in hits.windows(2) {
        let gap = pair[1].start.seconds_since(pair[0].start) / 86_400.0;
        assert!((28.5..30.5).contains(&gap), "gap {gap} days");
    }
}

#[test]
fn holi_in_phalguna_2024() {
    let p = engine();
    let hits = p
        .festival_dates(
            "holi",
            utc(2024, 1, 1, 0, 0),
            utc(2024, 12, 31, 0, 0),
            &hyderabad(),
        )
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert!(hits[0].start <= utc(2024, 3, 25, 0, 0) && utc(2024, 3, 25, 0, 0) < hits[0].end);
}

#[test]
fn adhika_rule_only_in_2023() {
    let p = engine();
    let in_2023 = p
        .festival_dates(
            "adhika-purnima",
            utc(2023, 1, 1, 0, 0),
            utc(2024, 1, 1, 0, 0),
            &hyderabad(),
        )
        .unwrap();
    assert_eq!(in_2023.len(), 1);
    assert_eq!(in_2023[0].masa.masa, Masa::Shravana);
    assert!(in_2023[0].masa.adhika);
    let in_2024 = p
        .festival_dates(
            "adhika-purnima",
            utc(2024, 1, 1, 0, 0),
            utc(2025, 1, 1, 0, 0),
            &hyderabad(),
        )
        .unwrap();
    assert!(in_2024.is_empty());
}

#[test]
fn unknown_festival_rejected() {
    let p = engine();
    let err = p
        .festival_dates(
            "no-such-day",
            utc(2024, 1, 1, 0, 0),
            utc(2024, 2, 1, 0, 0),
            &hyderabad(),
        )
        .unwrap_err();
    assert!(matches!(err, SearchError::InvalidInput(_)));
}
