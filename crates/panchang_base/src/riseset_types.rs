//! Types for sunrise/sunset and twilight calculations.

use panchang_time::{Instant, UtcOffset};

use crate::error::VedicError;

/// Observer location with the civil-time offset used to delimit its days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Offset of local civil time from UTC.
    pub offset: UtcOffset,
}

impl GeoLocation {
    /// Create a validated location.
    pub fn new(latitude_deg: f64, longitude_deg: f64, offset: UtcOffset) -> Result<Self, VedicError> {
        let loc = Self {
            latitude_deg,
            longitude_deg,
            offset,
        };
        loc.validate()?;
        Ok(loc)
    }

    /// Reject NaN or out-of-range coordinates.
    pub fn validate(&self) -> Result<(), VedicError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(VedicError::InvalidInput(format!(
                "latitude {} outside [-90, 90]",
                self.latitude_deg
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(VedicError::InvalidInput(format!(
                "longitude {} outside [-180, 180]",
                self.longitude_deg
            )));
        }
        Ok(())
    }
}

/// Rise/set event types, including twilight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Upper limb on the horizon, refraction included.
    Sunrise,
    Sunset,
    /// Sun centre 6° below the horizon.
    CivilDawn,
    CivilDusk,
    /// Sun centre 12° below the horizon.
    NauticalDawn,
    NauticalDusk,
    /// Sun centre 18° below the horizon.
    AstronomicalDawn,
    AstronomicalDusk,
}

impl RiseSetEvent {
    /// Whether this is a morning event.
    pub fn is_rising(self) -> bool {
        matches!(
            self,
            Self::Sunrise | Self::CivilDawn | Self::NauticalDawn | Self::AstronomicalDawn
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
            Self::CivilDawn => "civil dawn",
            Self::CivilDusk => "civil dusk",
            Self::NauticalDawn => "nautical dawn",
            Self::NauticalDusk => "nautical dusk",
            Self::AstronomicalDawn => "astronomical dawn",
            Self::AstronomicalDusk => "astronomical dusk",
        }
    }
}

/// Horizon parameters for sunrise and sunset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.
    pub refraction_arcmin: f64,
    /// Solar semi-diameter in arcminutes. Default: 16.
    pub semidiameter_arcmin: f64,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
        }
    }
}

impl RiseSetConfig {
    /// Zenith distance of the Sun's centre at the event, in degrees.
    ///
    /// 90.8333° for sunrise/sunset with default settings.
    pub fn zenith_deg(&self, event: RiseSetEvent) -> f64 {
        let depression = match event {
            RiseSetEvent::Sunrise | RiseSetEvent::Sunset => {
                (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0
            }
            RiseSetEvent::CivilDawn | RiseSetEvent::CivilDusk => 6.0,
            RiseSetEvent::NauticalDawn | RiseSetEvent::NauticalDusk => 12.0,
            RiseSetEvent::AstronomicalDawn | RiseSetEvent::AstronomicalDusk => 18.0,
        };
        90.0 + depression
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// The event happens at the given instant.
    Event {
        instant: Instant,
        event: RiseSetEvent,
    },
    /// The Sun stays below the event altitude all day (polar night).
    NeverRises,
    /// The Sun stays above the event altitude all day (midnight sun).
    NeverSets,
}

impl RiseSetResult {
    /// The event instant, if there is one.
    pub fn instant(&self) -> Option<Instant> {
        match self {
            Self::Event { instant, .. } => Some(*instant),
            Self::NeverRises | Self::NeverSets => None,
        }
    }
}
