//! Types for anga segments and boundary search.

use panchang_base::{
    KARANA_POSITIONS, KARANA_SEGMENT_DEG, Karana, NAKSHATRA_SPAN_DEG, Nakshatra,
    TITHI_SEGMENT_DEG, Tithi, YOGA_SEGMENT_DEG, Yoga,
};
use panchang_time::Instant;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;
/// Mean sidereal month in days.
pub const SIDEREAL_MONTH_DAYS: f64 = 27.321_661_547;
/// Mean sidereal year in days.
pub const SIDEREAL_YEAR_DAYS: f64 = 365.256_363;

/// The four time-varying angas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngaKind {
    /// 12° of Moon−Sun elongation.
    Tithi,
    /// 13°20′ of sidereal Moon longitude.
    Nakshatra,
    /// 13°20′ of sidereal Sun + Moon.
    Yoga,
    /// 6° of Moon−Sun elongation.
    Karana,
}

pub const ALL_ANGA_KINDS: [AngaKind; 4] = [
    AngaKind::Tithi,
    AngaKind::Nakshatra,
    AngaKind::Yoga,
    AngaKind::Karana,
];

impl AngaKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tithi => "tithi",
            Self::Nakshatra => "nakshatra",
            Self::Yoga => "yoga",
            Self::Karana => "karana",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL_ANGA_KINDS
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }

    /// Angular width of one unit in degrees.
    pub const fn unit_deg(self) -> f64 {
        match self {
            Self::Tithi => TITHI_SEGMENT_DEG,
            Self::Nakshatra => NAKSHATRA_SPAN_DEG,
            Self::Yoga => YOGA_SEGMENT_DEG,
            Self::Karana => KARANA_SEGMENT_DEG,
        }
    }

    /// Number of units in one full 360° cycle.
    pub const fn positions(self) -> u8 {
        match self {
            Self::Tithi => 30,
            Self::Nakshatra | Self::Yoga => 27,
            Self::Karana => KARANA_POSITIONS,
        }
    }

    /// Mean rate of the underlying angle in degrees per day.
    pub const fn mean_rate_deg_per_day(self) -> f64 {
        match self {
            Self::Tithi | Self::Karana => 360.0 / SYNODIC_MONTH_DAYS,
            Self::Nakshatra => 360.0 / SIDEREAL_MONTH_DAYS,
            Self::Yoga => 360.0 / SIDEREAL_MONTH_DAYS + 360.0 / SIDEREAL_YEAR_DAYS,
        }
    }

    /// Mean time spent in one unit, in days.
    pub const fn mean_duration_days(self) -> f64 {
        self.unit_deg() / self.mean_rate_deg_per_day()
    }

    /// Name index (Tithi 0..29, Nakshatra/Yoga 0..26, Karana 0..10) of a
    /// cycle position.
    pub fn index_of_position(self, position: u8) -> u8 {
        match self {
            Self::Karana => Karana::at_position(position).index(),
            _ => position % self.positions(),
        }
    }

    /// Canonical name of a cycle position.
    pub fn position_name(self, position: u8) -> &'static str {
        match self {
            Self::Tithi => Tithi::from_index(position % 30).map_or("", Tithi::name),
            Self::Nakshatra => Nakshatra::from_index(position % 27).map_or("", Nakshatra::name),
            Self::Yoga => Yoga::from_index(position % 27).map_or("", Yoga::name),
            Self::Karana => Karana::at_position(position).name(),
        }
    }
}

/// Which way a boundary search walks from its starting instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchDirection {
    Forward,
    Backward,
}

impl SearchDirection {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }

    pub(crate) const fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// One occurrence of an anga unit, active over `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngaSegment {
    pub kind: AngaKind,
    /// Name index: Tithi 0..29, Nakshatra/Yoga 0..26, Karana 0..10.
    pub index: u8,
    /// Position in the 360° cycle; differs from `index` only for Karana (0..59).
    pub position: u8,
    pub start: Instant,
    pub end: Instant,
}

impl AngaSegment {
    pub(crate) fn new(kind: AngaKind, position: u8, start: Instant, end: Instant) -> Self {
        Self {
            kind,
            index: kind.index_of_position(position),
            position,
            start,
            end,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.position_name(self.position)
    }

    /// Whether `instant` lies in `[start, end)`.
    pub fn contains(&self, instant: Instant) -> bool {
        self.start <= instant && instant < self.end
    }

    pub fn duration_seconds(&self) -> f64 {
        self.end.seconds_since(self.start)
    }

    /// Overlap with `[from, to)`, if non-empty.
    pub fn intersect(&self, from: Instant, to: Instant) -> Option<(Instant, Instant)> {
        let start = if self.start > from { self.start } else { from };
        let end = if self.end < to { self.end } else { to };
        (start < end).then_some((start, end))
    }
}
