//! Civil (calendar) dates without a time of day.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, days_in_month, jd_to_calendar};

/// A proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Create a validated date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate("month must be 1..=12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate("day out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    pub(crate) const fn from_parts_unchecked(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    pub const fn day(self) -> u32 {
        self.day
    }

    /// Julian Date at 0h UTC of this date.
    pub fn jd_midnight(self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }

    /// The date `n` days later (or earlier for negative `n`).
    pub fn add_days(self, n: i64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(self.jd_midnight() + n as f64);
        Self {
            year,
            month,
            day: day_frac.round() as u32,
        }
    }

    /// The following day.
    pub fn succ(self) -> Self {
        self.add_days(1)
    }

    /// The preceding day.
    pub fn pred(self) -> Self {
        self.add_days(-1)
    }

    /// 1-based day of the year.
    pub fn day_of_year(self) -> u32 {
        (1..self.month)
            .map(|m| days_in_month(self.year, m))
            .sum::<u32>()
            + self.day
    }

    /// Weekday index, 0 = Sunday .. 6 = Saturday.
    pub fn weekday_index(self) -> u8 {
        ((self.jd_midnight() + 1.5).floor() as i64).rem_euclid(7) as u8
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(3, '-');
        let field = |p: Option<&str>| -> Result<i64, TimeError> {
            p.ok_or_else(|| TimeError::Parse(format!("expected YYYY-MM-DD, got {s:?}")))?
                .parse::<i64>()
                .map_err(|e| TimeError::Parse(format!("{s:?}: {e}")))
        };
        let year = field(parts.next())?;
        let month = field(parts.next())?;
        let day = field(parts.next())?;
        let year = i32::try_from(year).map_err(|_| TimeError::InvalidDate("year out of range"))?;
        let month = u32::try_from(month).map_err(|_| TimeError::InvalidDate("month must be 1..=12"))?;
        let day = u32::try_from(day).map_err(|_| TimeError::InvalidDate("day out of range for month"))?;
        Self::new(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_fields() {
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(2024, 13, 1).is_err());
        assert!(CivilDate::new(2024, 4, 0).is_err());
    }

    #[test]
    fn successor_crosses_year() {
        let d = CivilDate::new(2023, 12, 31).unwrap();
        assert_eq!(d.succ(), CivilDate::new(2024, 1, 1).unwrap());
        assert_eq!(d.succ().pred(), d);
    }

    #[test]
    fn add_days_over_leap_day() {
        let d = CivilDate::new(2024, 2, 28).unwrap();
        assert_eq!(d.add_days(2), CivilDate::new(2024, 3, 1).unwrap());
    }

    #[test]
    fn day_of_year_values() {
        assert_eq!(CivilDate::new(2024, 1, 1).unwrap().day_of_year(), 1);
        assert_eq!(CivilDate::new(2024, 12, 31).unwrap().day_of_year(), 366);
        assert_eq!(CivilDate::new(2023, 3, 1).unwrap().day_of_year(), 60);
    }

    #[test]
    fn weekdays() {
        // 2000-01-01 was a Saturday, 2024-04-09 a Tuesday.
        assert_eq!(CivilDate::new(2000, 1, 1).unwrap().weekday_index(), 6);
        assert_eq!(CivilDate::new(2024, 4, 9).unwrap().weekday_index(), 2);
    }

    #[test]
    fn parse_and_display() {
        let d: CivilDate = "2024-04-09".parse().unwrap();
        assert_eq!(d, CivilDate::new(2024, 4, 9).unwrap());
        assert_eq!(d.to_string(), "2024-04-09");
        assert!("2024-04".parse::<CivilDate>().is_err());
        assert!("2024-02-30".parse::<CivilDate>().is_err());
    }
}
