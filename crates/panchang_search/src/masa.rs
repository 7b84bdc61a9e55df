//! Lunar month (amanta) and Telugu year determination.
//!
//! A month runs new moon to new moon and is named from the Sun's sidereal
//! rashi at its closing new moon. When the Sun stays in one rashi across
//! the whole lunation the month is adhika and takes the following name.

use panchang_base::{Masa, Samvatsara, masa_from_new_moon_rashis, rashi_from_longitude};
use panchang_ephem::{AyanamshaSystem, Body, Ephemeris, sidereal_longitude};
use panchang_time::{Instant, UtcOffset};

use crate::anga::{anga_longitude, find_boundary_near};
use crate::anga_types::{AngaKind, SYNODIC_MONTH_DAYS};
use crate::config::SearchConfig;
use crate::error::SearchError;

/// One lunation with its month name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasaInfo {
    pub masa: Masa,
    /// Whether this is an adhika (intercalary) month.
    pub adhika: bool,
    /// Opening new moon.
    pub start: Instant,
    /// Closing new moon.
    pub end: Instant,
}

impl MasaInfo {
    pub fn name(&self) -> &'static str {
        self.masa.name()
    }

    /// Whether `instant` lies in `[start, end)`.
    pub fn contains(&self, instant: Instant) -> bool {
        self.start <= instant && instant < self.end
    }
}

fn elongation_rate() -> f64 {
    360.0 / SYNODIC_MONTH_DAYS
}

/// Last new moon at or before `instant`.
pub fn prev_new_moon(
    eph: &dyn Ephemeris,
    instant: Instant,
    ayanamsha: AyanamshaSystem,
    config: &SearchConfig,
) -> Result<Instant, SearchError> {
    let elong = anga_longitude(eph, AngaKind::Tithi, instant, ayanamsha)?;
    let guess = instant.add_days(-elong / elongation_rate());
    let nm = find_boundary_near(eph, AngaKind::Tithi, guess, 0.0, ayanamsha, config)?;
    if nm > instant {
        // guess landed before an earlier conjunction; step one lunation back
        let earlier = nm.add_days(-SYNODIC_MONTH_DAYS);
        return find_boundary_near(eph, AngaKind::Tithi, earlier, 0.0, ayanamsha, config);
    }
    Ok(nm)
}

/// First new moon strictly after `instant`.
pub fn next_new_moon(
    eph: &dyn Ephemeris,
    instant: Instant,
    ayanamsha: AyanamshaSystem,
    config: &SearchConfig,
) -> Result<Instant, SearchError> {
    let elong = anga_longitude(eph, AngaKind::Tithi, instant, ayanamsha)?;
    let guess = instant.add_days((360.0 - elong) / elongation_rate());
    let nm = find_boundary_near(eph, AngaKind::Tithi, guess, 0.0, ayanamsha, config)?;
    if nm <= instant {
        let later = nm.add_days(SYNODIC_MONTH_DAYS);
        return find_boundary_near(eph, AngaKind::Tithi, later, 0.0, ayanamsha, config);
    }
    Ok(nm)
}

fn sun_rashi_index(
    eph: &dyn Ephemeris,
    instant: Instant,
    ayanamsha: AyanamshaSystem,
) -> Result<u8, SearchError> {
    let sun = sidereal_longitude(eph, Body::Sun, instant, ayanamsha)?;
    Ok(rashi_from_longitude(sun).rashi_index)
}

/// Name the lunation bounded by two consecutive new moons.
pub fn masa_for_lunation(
    eph: &dyn Ephemeris,
    start: Instant,
    end: Instant,
    ayanamsha: AyanamshaSystem,
) -> Result<MasaInfo, SearchError> {
    let (masa, adhika) = masa_from_new_moon_rashis(
        sun_rashi_index(eph, start, ayanamsha)?,
        sun_rashi_index(eph, end, ayanamsha)?,
    );
    Ok(MasaInfo {
        masa,
        adhika,
        start,
        end,
    })
}

/// The lunar month containing `instant`.
pub fn masa_at(
    eph: &dyn Ephemeris,
    instant: Instant,
    ayanamsha: AyanamshaSystem,
    config: &SearchConfig,
) -> Result<MasaInfo, SearchError> {
    let start = prev_new_moon(eph, instant, ayanamsha, config)?;
    let end = next_new_moon(eph, instant, ayanamsha, config)?;
    masa_for_lunation(eph, start, end, ayanamsha)
}

/// The lunar month following `prev`.
pub fn next_masa(
    eph: &dyn Ephemeris,
    prev: &MasaInfo,
    ayanamsha: AyanamshaSystem,
    config: &SearchConfig,
) -> Result<MasaInfo, SearchError> {
    let end = next_new_moon(eph, prev.end.add_days(1.0), ayanamsha, config)?;
    masa_for_lunation(eph, prev.end, end, ayanamsha)
}

/// Every lunation overlapping `[from, to)`, in order.
pub fn masas_between(
    eph: &dyn Ephemeris,
    from: Instant,
    to: Instant,
    ayanamsha: AyanamshaSystem,
    config: &SearchConfig,
) -> Result<Vec<MasaInfo>, SearchError> {
    if from.total_cmp(&to).is_ge() {
        return Err(SearchError::InvalidInput(format!(
            "empty window {from} .. {to}"
        )));
    }
    let mut masa = masa_at(eph, from, ayanamsha, config)?;
    let mut out = vec![masa];
    while masa.end < to {
        masa = next_masa(eph, &masa, ayanamsha, config)?;
        out.push(masa);
    }
    Ok(out)
}

/// Telugu year (samvatsara) of the lunar year containing `masa`.
///
/// The year opens with Chaitra; its samvatsara is named from the civil year
/// in which that Chaitra began. Walking back `masa.index()` mean lunations
/// from the month's start lands inside the opening Chaitra, close enough
/// that the civil year is never ambiguous.
pub fn telugu_year(masa: &MasaInfo, offset: UtcOffset) -> Samvatsara {
    let back = -(masa.masa.index() as f64) * SYNODIC_MONTH_DAYS;
    let year_start = masa.start.add_days(back);
    Samvatsara::from_year(offset.civil_date_of(year_start).year())
}
