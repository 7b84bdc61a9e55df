//! Error types for the search layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchang_base::VedicError;
use panchang_ephem::EphemerisError;
use panchang_time::{CivilDate, Instant, TimeError};

use crate::anga_types::{AngaKind, SearchDirection};

/// Errors from boundary search and day assembly.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Error from the ephemeris provider.
    Ephemeris(EphemerisError),
    /// Error from the classification layer.
    Vedic(VedicError),
    /// Error from date/time handling.
    Time(TimeError),
    /// Rejected argument (range, ordering, unknown id).
    InvalidInput(String),
    /// No sign change was bracketed inside the search window.
    UnresolvedBoundary {
        kind: AngaKind,
        direction: SearchDirection,
    },
    /// The Sun does not rise at the location on this date.
    NoSunrise { date: CivilDate },
    /// A segment outlasts the sanity limit and is treated as an ephemeris
    /// failure rather than calendar data.
    ImplausibleSegment {
        kind: AngaKind,
        start: Instant,
        end: Instant,
    },
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Vedic(e) => write!(f, "{e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::UnresolvedBoundary { kind, direction } => write!(
                f,
                "could not bracket {} boundary searching {}",
                kind.name(),
                direction.name()
            ),
            Self::NoSunrise { date } => write!(f, "no sunrise on {date}"),
            Self::ImplausibleSegment { kind, start, end } => write!(
                f,
                "implausible {} segment {start} .. {end} ({:.1} h)",
                kind.name(),
                end.seconds_since(*start) / 3600.0
            ),
        }
    }
}

impl Error for SearchError {}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<VedicError> for SearchError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::InvalidInput(msg) => Self::InvalidInput(msg),
            other => Self::Vedic(other),
        }
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
