//! Anga resolution: which tithi/nakshatra/yoga/karana is active at an
//! instant, and when that unit starts and ends.
//!
//! Each anga is a fixed-width slice of a monotone angle: Moon−Sun
//! elongation for tithi and karana, sidereal Moon for nakshatra, sidereal
//! Sun + Moon for yoga. Boundaries are roots of
//! `normalize(angle(t) − k·width)`, bracketed by a coarse scan and refined
//! by bisection.

use panchang_base::{
    karana_from_elongation, nakshatra_from_longitude, normalize_360, tithi_from_elongation,
    yoga_from_sum,
};
use panchang_ephem::{AyanamshaSystem, Ephemeris, sidereal_position};
use panchang_time::Instant;

use crate::anga_types::{AngaKind, AngaSegment, SearchDirection};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::search_util::{find_zero_crossing, normalize_to_pm180};

/// The angle an anga slices, in degrees [0, 360).
///
/// Ayanamsha cancels for tithi and karana but not for nakshatra or yoga.
pub fn anga_longitude(
    eph: &dyn Ephemeris,
    kind: AngaKind,
    instant: Instant,
    ayanamsha: AyanamshaSystem,
) -> Result<f64, SearchError> {
    let pos = sidereal_position(eph, instant, ayanamsha)?;
    Ok(match kind {
        AngaKind::Tithi | AngaKind::Karana => normalize_360(pos.moon - pos.sun),
        AngaKind::Nakshatra => pos.moon,
        AngaKind::Yoga => normalize_360(pos.moon + pos.sun),
    })
}

/// Cycle position for an angle value.
fn position_of(kind: AngaKind, value_deg: f64) -> u8 {
    match kind {
        AngaKind::Tithi => tithi_from_elongation(value_deg).tithi_index,
        AngaKind::Nakshatra => nakshatra_from_longitude(value_deg).nakshatra_index,
        AngaKind::Yoga => yoga_from_sum(value_deg).yoga_index,
        AngaKind::Karana => karana_from_elongation(value_deg).position,
    }
}

/// Cycle position active at `instant` (Karana 0..59, others their index).
pub fn position_at(
    eph: &dyn Ephemeris,
    kind: AngaKind,
    instant: Instant,
    ayanamsha: AyanamshaSystem,
) -> Result<u8, SearchError> {
    Ok(position_of(kind, anga_longitude(eph, kind, instant, ayanamsha)?))
}

fn step_days(kind: AngaKind) -> f64 {
    kind.mean_duration_days() / 4.0
}

/// Instant where the anga angle crosses `target_deg`, searching from
/// `from` in `direction` for at most the configured bracket window.
pub fn find_boundary(
    eph: &dyn Ephemeris,
    kind: AngaKind,
    from: Instant,
    target_deg: f64,
    direction: SearchDirection,
    ayanamsha: AyanamshaSystem,
    config: &SearchConfig,
) -> Result<Instant, SearchError> {
    search(
        eph,
        kind,
        from,
        target_deg,
        direction,
        config.bracket_window_days,
        ayanamsha,
        config,
    )
}

/// Crossing of `target_deg` nearest a predicted instant.
///
/// Looks forward when the angle has not reached the target at `guess`,
/// backward otherwise, within the configured scan window.
pub(crate) fn find_boundary_near(
    eph: &dyn Ephemeris,
    kind: AngaKind,
    guess: Instant,
    target_deg: f64,
    ayanamsha: AyanamshaSystem,
    config: &SearchConfig,
) -> Result<Instant, SearchError> {
    let offset = normalize_to_pm180(anga_longitude(eph, kind, guess, ayanamsha)? - target_deg);
    let direction = if offset < 0.0 {
        SearchDirection::Forward
    } else {
        SearchDirection::Backward
    };
    search(
        eph,
        kind,
        guess,
        target_deg,
        direction,
        config.scan_window_days,
        ayanamsha,
        config,
    )
}

#[allow(clippy::too_many_arguments)]
fn search(
    eph: &dyn Ephemeris,
    kind: AngaKind,
    from: Instant,
    target_deg: f64,
    direction: SearchDirection,
    window_days: f64,
    ayanamsha: AyanamshaSystem,
    config: &SearchConfig,
) -> Result<Instant, SearchError> {
    let f = |t: Instant| -> Result<f64, SearchError> {
        Ok(normalize_to_pm180(
            anga_longitude(eph, kind, t, ayanamsha)? - target_deg,
        ))
    };
    find_zero_crossing(&f, from, direction, step_days(kind), window_days, config)?
        .ok_or(SearchError::UnresolvedBoundary { kind, direction })
}

/// The segment of `kind` active at `instant`, with its start and end.
///
/// Guarantees `start <= instant < end`.
pub fn resolve_anga(
    eph: &dyn Ephemeris,
    kind: AngaKind,
    instant: Instant,
    ayanamsha: AyanamshaSystem,
    config: &SearchConfig,
) -> Result<AngaSegment, SearchError> {
    let position = position_at(eph, kind, instant, ayanamsha)?;
    let width = kind.unit_deg();

    let start = find_boundary(
        eph,
        kind,
        instant,
        position as f64 * width,
        SearchDirection::Backward,
        ayanamsha,
        config,
    )?;
    let end = find_boundary(
        eph,
        kind,
        instant,
        (position as f64 + 1.0) * width,
        SearchDirection::Forward,
        ayanamsha,
        config,
    )?;
    Ok(AngaSegment::new(kind, position, start, end))
}

/// The segment that follows `prev`, located from the predicted duration.
pub fn next_segment(
    eph: &dyn Ephemeris,
    prev: &AngaSegment,
    ayanamsha: AyanamshaSystem,
    config: &SearchConfig,
) -> Result<AngaSegment, SearchError> {
    let kind = prev.kind;
    let position = (prev.position + 1) % kind.positions();
    let target = (position as f64 + 1.0) * kind.unit_deg();
    let guess = prev.end.add_days(kind.mean_duration_days());
    let end = find_boundary_near(eph, kind, guess, target, ayanamsha, config)?;
    if end <= prev.end {
        return Err(SearchError::UnresolvedBoundary {
            kind,
            direction: SearchDirection::Forward,
        });
    }
    Ok(AngaSegment::new(kind, position, prev.end, end))
}

/// Every segment of `kind` overlapping `[from, to)`, in order.
///
/// The first and last segments are reported whole, not clipped.
pub fn segments_between(
    eph: &dyn Ephemeris,
    kind: AngaKind,
    from: Instant,
    to: Instant,
    ayanamsha: AyanamshaSystem,
    config: &SearchConfig,
) -> Result<Vec<AngaSegment>, SearchError> {
    if from.total_cmp(&to).is_ge() {
        return Err(SearchError::InvalidInput(format!(
            "empty window {from} .. {to}"
        )));
    }
    let mut segment = resolve_anga(eph, kind, from, ayanamsha, config)?;
    let mut out = vec![segment];
    while segment.end < to {
        segment = next_segment(eph, &segment, ayanamsha, config)?;
        out.push(segment);
    }
    Ok(out)
}
