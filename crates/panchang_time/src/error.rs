//! Error types for time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil-date validation or timestamp parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is out of range (month 13, February 30, ...).
    InvalidDate(&'static str),
    /// A UTC offset outside ±18 hours.
    InvalidOffset(i32),
    /// A date or timestamp string could not be parsed.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidOffset(min) => write!(f, "invalid UTC offset: {min} minutes"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
