//! Error types for ephemeris evaluation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::body::Body;

/// Errors from an ephemeris provider.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The requested epoch lies outside the theory's validity interval.
    EpochOutOfRange { body: Body, jd_utc: f64 },
    /// The instant is NaN or infinite.
    NonFiniteInstant,
    /// Provider-specific failure.
    Provider(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EpochOutOfRange { body, jd_utc } => {
                write!(f, "epoch JD {jd_utc} out of range for {}", body.name())
            }
            Self::NonFiniteInstant => write!(f, "instant is not finite"),
            Self::Provider(msg) => write!(f, "ephemeris provider error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}
