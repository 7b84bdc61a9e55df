//! Types for one assembled civil day.

use panchang_base::{Ayana, Paksha, Ritu, Samvatsara, Vaar};
use panchang_time::{CivilDate, Instant};

use crate::anga_types::AngaSegment;
use crate::masa::MasaInfo;

/// How the sunrise-to-sunrise day relates to the tithi sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TithiStatus {
    /// One tithi spans sunrise and ends before the next sunrise.
    #[default]
    Normal,
    /// A tithi begins and ends between the two sunrises; it never sees a
    /// sunrise and is omitted from the day sequence.
    Kshaya,
    /// The sunrise tithi is still running at the next sunrise, so it rules
    /// two consecutive days.
    Vriddhi,
}

impl TithiStatus {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Kshaya => "kshaya",
            Self::Vriddhi => "vriddhi",
        }
    }
}

/// The tithi side of a civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTithi {
    /// Tithi active at sunrise; rules the day.
    pub primary: AngaSegment,
    pub status: TithiStatus,
    /// The omitted tithi when `status` is [`TithiStatus::Kshaya`].
    pub kshaya: Option<AngaSegment>,
}

/// Everything known about one civil day at one location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayRecord {
    pub date: CivilDate,
    pub sunrise: Instant,
    /// `None` when the Sun does not set (midnight sun).
    pub sunset: Option<Instant>,
    pub next_sunrise: Instant,
    pub tithi: DayTithi,
    pub paksha: Paksha,
    pub nakshatra: AngaSegment,
    /// Pada (1..4) of the Moon at sunrise.
    pub nakshatra_pada: u8,
    pub yoga: AngaSegment,
    pub karana: AngaSegment,
    pub masa: MasaInfo,
    pub telugu_year: Samvatsara,
    pub ayana: Ayana,
    pub ritu: Ritu,
    pub vaar: Vaar,
}
