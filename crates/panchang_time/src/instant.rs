//! Absolute instants and fixed UTC offsets.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use crate::civil::CivilDate;
use crate::delta_t::{delta_t_seconds, jd_utc_to_decimal_year};
use crate::error::TimeError;
use crate::julian::{J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD};
use crate::utc_time::UtcTime;

/// An absolute point in time on the UTC timeline.
///
/// Stored as seconds past J2000.0 (2000-01-01T12:00:00 UTC), without leap
/// seconds. Every engine computation runs on this single timeline; local
/// offsets are applied only when converting to or from civil dates.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Instant {
    utc_seconds: f64,
}

impl Instant {
    /// The J2000.0 epoch.
    pub const J2000: Self = Self { utc_seconds: 0.0 };

    /// Create an instant from UTC seconds past J2000.0.
    pub const fn from_utc_seconds(s: f64) -> Self {
        Self { utc_seconds: s }
    }

    /// UTC seconds past J2000.0.
    pub const fn as_utc_seconds(self) -> f64 {
        self.utc_seconds
    }

    /// Create an instant from a Julian Date in UTC.
    pub fn from_jd_utc(jd: f64) -> Self {
        Self {
            utc_seconds: (jd - J2000_JD) * SECONDS_PER_DAY,
        }
    }

    /// Julian Date in UTC.
    pub fn jd_utc(self) -> f64 {
        J2000_JD + self.utc_seconds / SECONDS_PER_DAY
    }

    /// Julian Ephemeris Date (TT), applying ΔT.
    pub fn jd_tt(self) -> f64 {
        let jd = self.jd_utc();
        jd + delta_t_seconds(jd_utc_to_decimal_year(jd)) / SECONDS_PER_DAY
    }

    /// Julian centuries of TT since J2000.0.
    pub fn centuries_tt(self) -> f64 {
        (self.jd_tt() - J2000_JD) / 36_525.0
    }

    /// Create an instant from Unix seconds.
    pub fn from_unix_seconds(s: f64) -> Self {
        Self::from_jd_utc(UNIX_EPOCH_JD + s / SECONDS_PER_DAY)
    }

    /// Convert a broken-down UTC time to an instant.
    pub fn from_utc(utc: &UtcTime) -> Self {
        Self::from_jd_utc(utc.to_jd_utc())
    }

    /// Broken-down UTC representation.
    pub fn to_utc(self) -> UtcTime {
        UtcTime::from_jd_utc(self.jd_utc())
    }

    /// Shift by a number of seconds (negative moves backward).
    pub fn add_seconds(self, s: f64) -> Self {
        Self {
            utc_seconds: self.utc_seconds + s,
        }
    }

    /// Shift by a (fractional) number of days.
    pub fn add_days(self, days: f64) -> Self {
        self.add_seconds(days * SECONDS_PER_DAY)
    }

    /// Signed seconds from `earlier` to `self`.
    pub fn seconds_since(self, earlier: Self) -> f64 {
        self.utc_seconds - earlier.utc_seconds
    }

    /// Midpoint between two instants.
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            utc_seconds: 0.5 * (self.utc_seconds + other.utc_seconds),
        }
    }

    /// Total ordering (instants are never NaN in practice).
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.utc_seconds.total_cmp(&other.utc_seconds)
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_utc())
    }
}

/// Fixed offset from UTC, in whole minutes east of Greenwich.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    /// UTC itself.
    pub const UTC: Self = Self { minutes: 0 };

    /// Create an offset; accepts ±18 hours.
    pub fn from_minutes(minutes: i32) -> Result<Self, TimeError> {
        if !(-18 * 60..=18 * 60).contains(&minutes) {
            return Err(TimeError::InvalidOffset(minutes));
        }
        Ok(Self { minutes })
    }

    /// Create an offset from fractional hours (e.g. 5.5 for IST).
    pub fn from_hours(hours: f64) -> Result<Self, TimeError> {
        if !hours.is_finite() {
            return Err(TimeError::InvalidOffset(i32::MAX));
        }
        Self::from_minutes((hours * 60.0).round() as i32)
    }

    /// Minutes east of UTC.
    pub const fn minutes(self) -> i32 {
        self.minutes
    }

    /// Offset in seconds.
    pub fn seconds(self) -> f64 {
        self.minutes as f64 * 60.0
    }

    /// The instant of local midnight starting `date`.
    pub fn local_midnight(self, date: CivilDate) -> Instant {
        Instant::from_jd_utc(date.jd_midnight()).add_seconds(-self.seconds())
    }

    /// The local civil date containing `instant`.
    pub fn civil_date_of(self, instant: Instant) -> CivilDate {
        let local = instant.add_seconds(self.seconds()).to_utc();
        CivilDate::from_parts_unchecked(local.year, local.month, local.day)
    }
}

impl Display for UtcOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.abs();
        write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_is_zero() {
        let i = Instant::from_jd_utc(J2000_JD);
        assert_eq!(i.as_utc_seconds(), 0.0);
        assert_eq!(i, Instant::J2000);
    }

    #[test]
    fn tt_runs_ahead_of_utc() {
        let i = Instant::from_jd_utc(2_460_000.5);
        let dt_s = (i.jd_tt() - i.jd_utc()) * SECONDS_PER_DAY;
        assert!((60.0..80.0).contains(&dt_s), "ΔT = {dt_s}");
    }

    #[test]
    fn unix_epoch_roundtrip() {
        let i = Instant::from_unix_seconds(0.0);
        assert!((i.jd_utc() - UNIX_EPOCH_JD).abs() < 1e-9);
    }

    #[test]
    fn add_and_difference() {
        let a = Instant::J2000;
        let b = a.add_days(1.5);
        assert!((b.seconds_since(a) - 129_600.0).abs() < 1e-9);
        assert!(a < b);
        assert_eq!(a.total_cmp(&b), Ordering::Less);
    }

    #[test]
    fn offset_bounds() {
        assert!(UtcOffset::from_minutes(330).is_ok());
        assert!(UtcOffset::from_minutes(-720).is_ok());
        assert_eq!(
            UtcOffset::from_minutes(19 * 60),
            Err(TimeError::InvalidOffset(1140))
        );
    }

    #[test]
    fn ist_midnight_is_previous_utc_evening() {
        let ist = UtcOffset::from_hours(5.5).unwrap();
        let date = CivilDate::new(2024, 4, 9).unwrap();
        let utc = ist.local_midnight(date).to_utc();
        assert_eq!((utc.year, utc.month, utc.day), (2024, 4, 8));
        assert_eq!((utc.hour, utc.minute), (18, 30));
    }

    #[test]
    fn civil_date_follows_offset() {
        let ist = UtcOffset::from_hours(5.5).unwrap();
        let instant = Instant::from_utc(&UtcTime::new(2024, 4, 8, 20, 0, 0.0));
        assert_eq!(ist.civil_date_of(instant), CivilDate::new(2024, 4, 9).unwrap());
        assert_eq!(
            UtcOffset::UTC.civil_date_of(instant),
            CivilDate::new(2024, 4, 8).unwrap()
        );
    }

    #[test]
    fn offset_display() {
        assert_eq!(UtcOffset::from_minutes(330).unwrap().to_string(), "+05:30");
        assert_eq!(UtcOffset::from_minutes(-300).unwrap().to_string(), "-05:00");
    }
}
