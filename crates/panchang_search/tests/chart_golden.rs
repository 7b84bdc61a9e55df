//! Rashi chart checks.

use panchang_base::{GeoLocation, Graha, Rashi};
use panchang_ephem::{AnalyticEphemeris, AyanamshaSystem, NodeMode, sidereal_position};
use panchang_search::{PanchangConfig, grid_for_day, grid_for_instant};
use panchang_time::{CivilDate, Instant, UtcOffset, UtcTime};

fn rashi_of(chart: &[panchang_search::GrahaPosition], graha: Graha) -> u8 {
    chart.iter().find(|p| p.graha == graha).unwrap().rashi_index
}

#[test]
fn ketu_opposite_rahu() {
    let eph = AnalyticEphemeris::new();
    for mode in [NodeMode::Mean, NodeMode::True] {
        for i in 0..200 {
            let at = Instant::J2000.add_days(i as f64 * 37.3);
            let chart = grid_for_instant(&eph, at, AyanamshaSystem::Lahiri, mode).unwrap();
            let rahu = chart.iter().find(|p| p.graha == Graha::Rahu).unwrap();
            let ketu = chart.iter().find(|p| p.graha == Graha::Ketu).unwrap();
            let diff = (ketu.sidereal_longitude - rahu.sidereal_longitude).rem_euclid(360.0);
            assert!((diff - 180.0).abs() < 1e-9, "diff {diff}");
            assert_eq!((ketu.rashi_index + 12 - rahu.rashi_index) % 12, 6);
        }
    }
}

#[test]
fn nine_grahas_in_order() {
    let eph = AnalyticEphemeris::new();
    let chart =
        grid_for_instant(&eph, Instant::J2000, AyanamshaSystem::Lahiri, NodeMode::True).unwrap();
    let order: Vec<Graha> = chart.iter().map(|p| p.graha).collect();
    assert_eq!(order, Graha::all().to_vec());
    for p in &chart {
        assert!((0.0..360.0).contains(&p.sidereal_longitude));
        assert_eq!(p.rashi_index, (p.sidereal_longitude / 30.0).floor() as u8);
        assert!((1..=4).contains(&p.pada));
    }
}

#[test]
fn j2000_placements() {
    // Sun ~280.4° tropical (Dhanu sidereal), Jupiter ~25.3° and Saturn
    // ~40.2° tropical (both Mesha sidereal).
    let eph = AnalyticEphemeris::new();
    let chart =
        grid_for_instant(&eph, Instant::J2000, AyanamshaSystem::Lahiri, NodeMode::True).unwrap();
    assert_eq!(rashi_of(&chart, Graha::Surya), Rashi::Dhanu.index());
    assert_eq!(rashi_of(&chart, Graha::Guru), Rashi::Mesha.index());
    assert_eq!(rashi_of(&chart, Graha::Shani), Rashi::Mesha.index());
}

#[test]
fn day_chart_defaults_to_sunrise() {
    let eph = AnalyticEphemeris::new();
    let cfg = PanchangConfig::default();
    let loc = GeoLocation::new(17.385, 78.4867, UtcOffset::from_minutes(330).unwrap()).unwrap();
    let date = CivilDate::new(2024, 4, 9).unwrap();
    let chart = grid_for_day(&eph, date, &loc, None, &cfg).unwrap();
    let rise = panchang_base::sunrise(date, &loc, &cfg.riseset).instant().unwrap();
    let pos = sidereal_position(&eph, rise, cfg.ayanamsha).unwrap();
    let sun = chart.iter().find(|p| p.graha == Graha::Surya).unwrap();
    assert!((sun.sidereal_longitude - pos.sun).abs() < 1e-12);

    let noon = Instant::from_utc(&UtcTime::new(2024, 4, 9, 6, 30, 0.0));
    let at_noon = grid_for_day(&eph, date, &loc, Some(noon), &cfg).unwrap();
    let moon_rise = chart.iter().find(|p| p.graha == Graha::Chandra).unwrap();
    let moon_noon = at_noon.iter().find(|p| p.graha == Graha::Chandra).unwrap();
    let moved = (moon_noon.sidereal_longitude - moon_rise.sidereal_longitude).rem_euclid(360.0);
    assert!((2.0..5.0).contains(&moved), "moon moved {moved}°");
}
