//! Error types for panchang classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchang_ephem::EphemerisError;
use panchang_time::TimeError;

/// Errors from the classification layer.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from the ephemeris provider.
    Ephemeris(EphemerisError),
    /// Error from date/time handling.
    Time(TimeError),
    /// Out-of-range latitude, longitude, or anga index.
    InvalidInput(String),
    /// The festival rule table failed to parse or validate.
    FestivalTable(String),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::FestivalTable(msg) => write!(f, "festival table: {msg}"),
        }
    }
}

impl Error for VedicError {}

impl From<EphemerisError> for VedicError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
