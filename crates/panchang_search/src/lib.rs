//! Panchang search engine: anga boundaries, day assembly, year scans,
//! festival dates and rashi charts.
//!
//! This crate provides:
//! - Anga resolution with bracketed bisection for segment start/end
//! - Day assembly with kshaya/vriddhi tithi classification
//! - Amanta masa (with adhika detection) and the Telugu year
//! - Near-linear year boundary scanning
//! - Festival occurrence search over tithi/nakshatra/masa windows
//! - Sidereal rashi charts for the nine grahas
//! - [`Panchangam`], the composition root tying these together
//!
//! All instants are absolute UTC; civil dates are interpreted with the
//! location's fixed offset.

pub mod anga;
pub mod anga_types;
pub mod chart;
pub mod config;
pub mod day;
pub mod day_types;
pub mod error;
pub mod festival_dates;
pub mod masa;
pub mod panchangam;
pub mod scan;
pub(crate) mod search_util;

pub use anga::{
    anga_longitude, find_boundary, next_segment, position_at, resolve_anga, segments_between,
};
pub use anga_types::{
    ALL_ANGA_KINDS, AngaKind, AngaSegment, SIDEREAL_MONTH_DAYS, SIDEREAL_YEAR_DAYS,
    SYNODIC_MONTH_DAYS, SearchDirection,
};
pub use chart::{GrahaPosition, grid_for_day, grid_for_instant};
pub use config::{PanchangConfig, SearchConfig};
pub use day::{assemble_tithi, day_record, segment_at, sunrise_bracket};
pub use day_types::{DayRecord, DayTithi, TithiStatus};
pub use error::SearchError;
pub use festival_dates::{FestivalOccurrence, festival_dates};
pub use masa::{
    MasaInfo, masa_at, masa_for_lunation, masas_between, next_masa, next_new_moon,
    prev_new_moon, telugu_year,
};
pub use panchangam::Panchangam;
pub use scan::{YearScan, check_plausible, scan_between, scan_year};
