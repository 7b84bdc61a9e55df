//! Year boundary scanner.
//!
//! Walks one anga type across a window by predicting each next boundary
//! from the mean unit duration and refining it with a short local search,
//! so a year costs one search per boundary rather than one per day.

use panchang_base::GeoLocation;
use panchang_ephem::{AyanamshaSystem, Ephemeris};
use panchang_time::{CivilDate, Instant};
use tracing::{debug, warn};

use crate::anga::{next_segment, resolve_anga};
use crate::anga_types::{AngaKind, AngaSegment, SearchDirection};
use crate::config::SearchConfig;
use crate::error::SearchError;

/// Every segment of one anga type across one local civil year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearScan {
    pub kind: AngaKind,
    pub year: i32,
    /// Local midnight opening 1 January.
    pub from: Instant,
    /// Local midnight opening 1 January of the following year.
    pub to: Instant,
    /// Ascending and contiguous; the first and last segments extend past
    /// the window rather than being clipped.
    pub segments: Vec<AngaSegment>,
    /// Segments discarded for exceeding the sanity limit.
    pub dropped: usize,
    /// Near-duplicate boundaries folded into the preceding segment.
    pub merged: usize,
}

/// Scan one civil year at `location` for every boundary of `kind`.
pub fn scan_year(
    eph: &dyn Ephemeris,
    kind: AngaKind,
    year: i32,
    location: &GeoLocation,
    ayanamsha: AyanamshaSystem,
    config: &SearchConfig,
) -> Result<YearScan, SearchError> {
    location.validate()?;
    let jan1 = CivilDate::new(year, 1, 1)?;
    let next_jan1 = CivilDate::new(year + 1, 1, 1)?;
    let from = location.offset.local_midnight(jan1);
    let to = location.offset.local_midnight(next_jan1);

    let (segments, dropped, merged) = scan_between(eph, kind, from, to, ayanamsha, config)?;
    debug!(
        kind = kind.name(),
        year,
        segments = segments.len(),
        dropped,
        merged,
        "year scan complete"
    );
    Ok(YearScan {
        kind,
        year,
        from,
        to,
        segments,
        dropped,
        merged,
    })
}

type ScanOutput = (Vec<AngaSegment>, usize, usize);

/// Scan `[from, to)`; returns the kept segments, the dropped count and the
/// merged count.
pub fn scan_between(
    eph: &dyn Ephemeris,
    kind: AngaKind,
    from: Instant,
    to: Instant,
    ayanamsha: AyanamshaSystem,
    config: &SearchConfig,
) -> Result<ScanOutput, SearchError> {
    if from.total_cmp(&to).is_ge() {
        return Err(SearchError::InvalidInput(format!(
            "empty window {from} .. {to}"
        )));
    }
    let max_seconds = config.max_segment_days * 86_400.0;
    let span_days = to.seconds_since(from) / 86_400.0;
    // Generous ceiling on searches; real data needs about span / mean duration.
    let budget = (span_days / kind.mean_duration_days() * 2.0).ceil() as usize + 16;

    let mut segments = Vec::new();
    let mut dropped = 0;
    let mut merged = 0;
    let mut searches = 0;

    let mut current = resolve_anga(eph, kind, from, ayanamsha, config)?;
    loop {
        if current.end >= to {
            keep(&mut segments, &mut dropped, current, max_seconds);
            break;
        }

        let mut next = next_segment(eph, &current, ayanamsha, config)?;
        searches += 1;
        while next.duration_seconds() < config.dedup_seconds && searches <= budget {
            warn!(
                kind = kind.name(),
                at = %next.start,
                seconds = next.duration_seconds(),
                "suppressing near-duplicate boundary"
            );
            merged += 1;
            current.end = next.end;
            next = next_segment(eph, &next, ayanamsha, config)?;
            searches += 1;
        }
        if searches > budget {
            return Err(SearchError::UnresolvedBoundary {
                kind,
                direction: SearchDirection::Forward,
            });
        }
        if current.end >= to {
            keep(&mut segments, &mut dropped, current, max_seconds);
            break;
        }

        keep(&mut segments, &mut dropped, current, max_seconds);
        current = next;
    }

    Ok((segments, dropped, merged))
}

fn keep(segments: &mut Vec<AngaSegment>, dropped: &mut usize, seg: AngaSegment, max_seconds: f64) {
    if is_plausible(&seg, max_seconds) {
        segments.push(seg);
    } else {
        *dropped += 1;
    }
}

/// Whether `seg` fits the sanity limit; logs a warning when it does not.
fn is_plausible(seg: &AngaSegment, max_seconds: f64) -> bool {
    let seconds = seg.duration_seconds();
    if seconds > max_seconds {
        warn!(
            kind = seg.kind.name(),
            index = seg.index,
            start = %seg.start,
            hours = seconds / 3600.0,
            "dropping implausibly long segment"
        );
        return false;
    }
    true
}

/// Reject a single segment longer than `config.max_segment_days`.
pub fn check_plausible(seg: &AngaSegment, config: &SearchConfig) -> Result<(), SearchError> {
    if is_plausible(seg, config.max_segment_days * 86_400.0) {
        Ok(())
    } else {
        Err(SearchError::ImplausibleSegment {
            kind: seg.kind,
            start: seg.start,
            end: seg.end,
        })
    }
}
