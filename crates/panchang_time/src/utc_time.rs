//! UTC calendar date/time with millisecond display precision.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::civil::CivilDate;
use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

const MS_PER_DAY: i64 = 86_400_000;

/// Broken-down UTC date and time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Julian Date (UTC).
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Break a Julian Date (UTC) into calendar fields, rounded to the millisecond.
    pub fn from_jd_utc(jd_utc: f64) -> Self {
        let ms_total = ((jd_utc + 0.5) * MS_PER_DAY as f64).round() as i64;
        let days = ms_total.div_euclid(MS_PER_DAY);
        let ms_of_day = ms_total.rem_euclid(MS_PER_DAY);
        let (year, month, day_frac) = jd_to_calendar(days as f64 - 0.5);
        let hour = (ms_of_day / 3_600_000) as u32;
        let minute = ((ms_of_day % 3_600_000) / 60_000) as u32;
        let second = (ms_of_day % 60_000) as f64 / 1000.0;
        Self {
            year,
            month,
            day: day_frac.round() as u32,
            hour,
            minute,
            second,
        }
    }

    /// The calendar date part.
    pub fn date(&self) -> Result<CivilDate, TimeError> {
        CivilDate::new(self.year, self.month, self.day)
    }
}

impl Display for UtcTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second.floor() as u32;
        let ms = ((self.second - whole as f64) * 1000.0).round() as u32;
        if ms == 0 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole, ms.min(999)
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm[:ss[.fff]][Z]` (a space may replace `T`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('Z');
        let (date_part, time_part) = s
            .split_once(['T', ' '])
            .ok_or_else(|| TimeError::Parse(format!("expected YYYY-MM-DDThh:mm:ss, got {s:?}")))?;
        let date: CivilDate = date_part.parse()?;

        let mut fields = time_part.split(':');
        let bad = || TimeError::Parse(format!("invalid time of day {time_part:?}"));
        let hour: u32 = fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        let minute: u32 = fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        let second: f64 = match fields.next() {
            Some(sec) => sec.parse().map_err(|_| bad())?,
            None => 0.0,
        };
        if fields.next().is_some() || hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
            return Err(bad());
        }
        Ok(Self::new(
            date.year(),
            date.month(),
            date.day(),
            hour,
            minute,
            second,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn display_milliseconds() {
        let t = UtcTime::new(2024, 1, 15, 12, 30, 45.125);
        assert_eq!(t.to_string(), "2024-01-15T12:30:45.125Z");
    }

    #[test]
    fn jd_roundtrip_has_no_sixty_seconds() {
        let t = UtcTime::new(2024, 3, 20, 23, 59, 59.9996);
        let back = UtcTime::from_jd_utc(t.to_jd_utc());
        assert_eq!((back.year, back.month, back.day), (2024, 3, 21));
        assert_eq!((back.hour, back.minute), (0, 0));
        assert!(back.second < 0.01);
    }

    #[test]
    fn jd_roundtrip_midday() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        let back = UtcTime::from_jd_utc(t.to_jd_utc());
        assert_eq!((back.year, back.month, back.day, back.hour, back.minute), (2024, 3, 20, 12, 30));
        assert!((back.second - 45.5).abs() < 1e-3);
    }

    #[test]
    fn parse_variants() {
        let a: UtcTime = "2024-04-09T06:15:30Z".parse().unwrap();
        assert_eq!((a.hour, a.minute), (6, 15));
        assert!((a.second - 30.0).abs() < 1e-12);
        let b: UtcTime = "2024-04-09 06:15".parse().unwrap();
        assert_eq!(b.second, 0.0);
        assert!("2024-04-09T25:00:00Z".parse::<UtcTime>().is_err());
        assert!("2024-04-09".parse::<UtcTime>().is_err());
    }
}
