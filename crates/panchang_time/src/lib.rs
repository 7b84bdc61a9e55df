//! Time handling for the panchang engine.
//!
//! This crate provides:
//! - [`Instant`], an absolute UTC point on a single continuous timeline
//! - [`CivilDate`] and [`UtcOffset`] for mapping civil days onto instants
//! - [`UtcTime`], a broken-down UTC calendar representation
//! - Julian Date ↔ calendar conversions
//! - A ΔT (TT − UT) model so ephemeris formulas can run in Terrestrial Time
//!
//! All engine arithmetic happens on `Instant`; calendar fields are produced
//! only at the boundary.

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod instant;
pub mod julian;
pub mod utc_time;

pub use civil::CivilDate;
pub use delta_t::{delta_t_seconds, jd_utc_to_decimal_year};
pub use error::TimeError;
pub use instant::{Instant, UtcOffset};
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, days_in_month, is_leap_year,
    jd_to_calendar,
};
pub use utc_time::UtcTime;
