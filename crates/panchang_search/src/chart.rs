//! Rashi chart: the sidereal sign of each of the nine grahas.

use panchang_base::{
    ALL_GRAHAS, GeoLocation, Graha, Nakshatra, Rashi, nakshatra_from_longitude, normalize_360,
    rashi_from_longitude, sunrise,
};
use panchang_ephem::{
    AyanamshaSystem, Ephemeris, LunarNode, NodeMode, ayanamsha_deg, lunar_node_deg,
    sidereal_longitude,
};
use panchang_time::{CivilDate, Instant};

use crate::config::PanchangConfig;
use crate::error::SearchError;

/// One graha's sidereal placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaPosition {
    pub graha: Graha,
    /// Sidereal longitude in degrees [0, 360).
    pub sidereal_longitude: f64,
    pub rashi: Rashi,
    /// `floor(sidereal_longitude / 30)`.
    pub rashi_index: u8,
    /// Degrees within the rashi [0, 30).
    pub degrees_in_rashi: f64,
    pub nakshatra: Nakshatra,
    /// Pada 1..4.
    pub pada: u8,
}

impl GrahaPosition {
    fn from_longitude(graha: Graha, sidereal_longitude: f64) -> Self {
        let rashi = rashi_from_longitude(sidereal_longitude);
        let nak = nakshatra_from_longitude(sidereal_longitude);
        Self {
            graha,
            sidereal_longitude,
            rashi: rashi.rashi,
            rashi_index: rashi.rashi_index,
            degrees_in_rashi: rashi.degrees_in_rashi,
            nakshatra: nak.nakshatra,
            pada: nak.pada,
        }
    }
}

/// Positions of all nine grahas at `instant`, in [`ALL_GRAHAS`] order.
///
/// Ketu is placed exactly opposite Rahu rather than computed on its own.
pub fn grid_for_instant(
    eph: &dyn Ephemeris,
    instant: Instant,
    ayanamsha: AyanamshaSystem,
    node_mode: NodeMode,
) -> Result<Vec<GrahaPosition>, SearchError> {
    let t = instant.centuries_tt();
    let rahu = normalize_360(
        lunar_node_deg(LunarNode::Rahu, t, node_mode) - ayanamsha_deg(ayanamsha, t),
    );
    let ketu = normalize_360(rahu + 180.0);

    ALL_GRAHAS
        .iter()
        .map(|&graha| {
            let lon = match (graha, graha.body()) {
                (Graha::Rahu, _) => rahu,
                (Graha::Ketu, _) => ketu,
                (_, Some(body)) => sidereal_longitude(eph, body, instant, ayanamsha)?,
                (_, None) => {
                    return Err(SearchError::InvalidInput(format!(
                        "no body for {}",
                        graha.name()
                    )));
                }
            };
            Ok(GrahaPosition::from_longitude(graha, lon))
        })
        .collect()
}

/// Chart at sunrise on `date`, or at `at` when given.
pub fn grid_for_day(
    eph: &dyn Ephemeris,
    date: CivilDate,
    location: &GeoLocation,
    at: Option<Instant>,
    config: &PanchangConfig,
) -> Result<Vec<GrahaPosition>, SearchError> {
    location.validate()?;
    let instant = match at {
        Some(i) => i,
        None => sunrise(date, location, &config.riseset)
            .instant()
            .ok_or(SearchError::NoSunrise { date })?,
    };
    grid_for_instant(eph, instant, config.ayanamsha, config.node_mode)
}
