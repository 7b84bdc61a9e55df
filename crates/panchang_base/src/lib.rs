//! Panchang classification math built on the ephemeris layer.
//!
//! This crate provides:
//! - The five angas: tithi, nakshatra (with pada), yoga, karana, vaar
//! - Rashi, masa, ritu, ayana and the 60-year samvatsara cycle
//! - Sunrise/sunset and twilight calculations
//! - Dina-adhipati (day ruler) computation
//! - The festival rule table and day-level matcher
//!
//! Everything here is a pure function of its inputs; searching for anga
//! boundaries in time lives in `panchang_search`.

pub mod dina_adhipati;
pub mod error;
pub mod festival;
pub mod graha;
pub mod karana;
pub mod masa;
pub mod nakshatra;
pub mod rashi;
pub mod riseset;
pub mod riseset_types;
pub mod samvatsara;
pub mod tithi;
pub mod util;
pub mod vaar;
pub mod yoga;

pub use dina_adhipati::{ALL_METHODS, DinaAdhipatiResult, RulerMethod, compute_ruler};
pub use error::VedicError;
pub use festival::{
    BUILTIN_FESTIVALS_TOML, CalculationBasis, FestivalQuery, FestivalRule, FestivalTable,
};
pub use graha::{ALL_GRAHAS, Graha};
pub use karana::{
    ALL_KARANAS, KARANA_POSITIONS, KARANA_SEGMENT_DEG, Karana, KaranaPosition,
    karana_from_elongation,
};
pub use masa::{
    ALL_MASAS, ALL_RITUS, Ayana, Masa, Ritu, ayana_from_sidereal_longitude,
    masa_from_new_moon_rashis, masa_from_rashi_index,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_DEG, Nakshatra, NakshatraInfo, PADA_SPAN_DEG,
    nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Dms, RASHI_SPAN_DEG, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude};
pub use riseset::{compute_rise_set, sunrise, sunset};
pub use riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};
pub use samvatsara::{SAMVATSARA_EPOCH_YEAR, Samvatsara};
pub use tithi::{ALL_TITHIS, Paksha, TITHI_SEGMENT_DEG, Tithi, TithiPosition, tithi_from_elongation};
pub use util::normalize_360;
pub use vaar::{ALL_VAARS, Vaar};
pub use yoga::{ALL_YOGAS, YOGA_SEGMENT_DEG, Yoga, YogaPosition, yoga_from_sum};
