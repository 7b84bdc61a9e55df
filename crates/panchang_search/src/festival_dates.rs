//! Festival date search: the inverse of the day-level matcher.
//!
//! A rule's tithi and nakshatra segments, taken from year scans at the
//! observer's location, are intersected with the lunations whose name and
//! adhika flag it accepts. Each qualifying conjunction is reported once
//! with its own `[start, end)`, however many civil days it touches.

use panchang_base::{FestivalRule, GeoLocation, Nakshatra, Tithi};
use panchang_ephem::Ephemeris;
use panchang_time::Instant;
use tracing::debug;

use crate::anga_types::AngaKind;
use crate::config::PanchangConfig;
use crate::error::SearchError;
use crate::masa::{MasaInfo, masas_between};
use crate::scan::scan_year;

/// One window in which a festival rule is satisfied.
#[derive(Debug, Clone, PartialEq)]
pub struct FestivalOccurrence {
    /// Id of the matched rule.
    pub festival: String,
    pub start: Instant,
    pub end: Instant,
    pub tithi: Option<Tithi>,
    pub nakshatra: Option<Nakshatra>,
    pub masa: MasaInfo,
}

type Window = (Instant, Instant);

fn overlap(a: Window, b: Window) -> Option<Window> {
    let start = if a.0 > b.0 { a.0 } else { b.0 };
    let end = if a.1 < b.1 { a.1 } else { b.1 };
    (start < end).then_some((start, end))
}

/// Windows overlapping `[from, to)` where one anga axis of the rule holds.
///
/// Built from the local civil years spanning the range, so segments the
/// scanner drops as implausible never qualify.
fn axis_windows(
    eph: &dyn Ephemeris,
    kind: AngaKind,
    index: u8,
    from: Instant,
    to: Instant,
    location: &GeoLocation,
    config: &PanchangConfig,
) -> Result<Vec<Window>, SearchError> {
    let offset = location.offset;
    let first_year = offset.civil_date_of(from).year();
    let last_year = offset.civil_date_of(to.add_seconds(-1.0)).year();

    let mut windows: Vec<Window> = Vec::new();
    for year in first_year..=last_year {
        let scan = scan_year(eph, kind, year, location, config.ayanamsha, &config.search)?;
        for seg in &scan.segments {
            if seg.index != index || seg.end <= from || seg.start >= to {
                continue;
            }
            // Adjacent years both report the segment straddling New Year
            let repeated = windows
                .last()
                .is_some_and(|w| seg.start.seconds_since(w.0).abs() < config.search.dedup_seconds);
            if !repeated {
                windows.push((seg.start, seg.end));
            }
        }
    }
    Ok(windows)
}

fn intersect_all(a: &[Window], b: &[Window]) -> Vec<Window> {
    a.iter()
        .flat_map(|x| b.iter().filter_map(move |y| overlap(*x, *y)))
        .collect()
}

/// Every occurrence of `rule` overlapping `[from, to)` at `location`, in
/// time order.
///
/// Slivers shorter than the dedup threshold, left where two independent
/// searches locate the same new moon a fraction of a second apart, are
/// discarded.
pub fn festival_dates(
    eph: &dyn Ephemeris,
    rule: &FestivalRule,
    from: Instant,
    to: Instant,
    location: &GeoLocation,
    config: &PanchangConfig,
) -> Result<Vec<FestivalOccurrence>, SearchError> {
    location.validate()?;
    if from.total_cmp(&to).is_ge() {
        return Err(SearchError::InvalidInput(format!(
            "empty window {from} .. {to}"
        )));
    }
    let masas = masas_between(eph, from, to, config.ayanamsha, &config.search)?;
    let wanted_masa = rule.amanta_masa();
    let lunations: Vec<&MasaInfo> = masas
        .iter()
        .filter(|m| m.adhika == rule.leap_month)
        .filter(|m| wanted_masa.is_none_or(|w| w == m.masa.index()))
        .collect();
    if lunations.is_empty() {
        return Ok(Vec::new());
    }

    let mut windows: Option<Vec<Window>> = None;
    if let Some(t) = rule.tithi {
        windows = Some(axis_windows(eph, AngaKind::Tithi, t, from, to, location, config)?);
    }
    if let Some(n) = rule.nakshatra {
        let nak = axis_windows(eph, AngaKind::Nakshatra, n, from, to, location, config)?;
        windows = Some(match windows {
            Some(w) => intersect_all(&w, &nak),
            None => nak,
        });
    }

    let min_seconds = config.search.dedup_seconds;
    let mut out = Vec::new();
    for masa in lunations {
        let month = (masa.start, masa.end);
        let hits: Vec<Window> = match &windows {
            Some(w) => w.iter().filter_map(|x| overlap(*x, month)).collect(),
            None => vec![month],
        };
        for (start, end) in hits {
            if end.seconds_since(start) < min_seconds {
                continue;
            }
            out.push(FestivalOccurrence {
                festival: rule.id.clone(),
                start,
                end,
                tithi: rule.tithi.and_then(Tithi::from_index),
                nakshatra: rule.nakshatra.and_then(Nakshatra::from_index),
                masa: *masa,
            });
        }
    }
    out.sort_by(|a, b| a.start.total_cmp(&b.start));
    debug!(festival = %rule.id, found = out.len(), "festival dates");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(a: f64, b: f64) -> Window {
        (
            Instant::J2000.add_seconds(a),
            Instant::J2000.add_seconds(b),
        )
    }

    #[test]
    fn overlap_is_half_open() {
        assert_eq!(overlap(w(0.0, 10.0), w(5.0, 20.0)), Some(w(5.0, 10.0)));
        assert_eq!(overlap(w(0.0, 10.0), w(10.0, 20.0)), None);
    }

    #[test]
    fn intersections_pairwise() {
        let tithis = [w(0.0, 10.0), w(30.0, 40.0)];
        let naks = [w(8.0, 32.0)];
        assert_eq!(
            intersect_all(&tithis, &naks),
            vec![w(8.0, 10.0), w(30.0, 32.0)]
        );
    }
}
