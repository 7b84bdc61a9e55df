//! Composition root: one ephemeris, one configuration, one festival table.

use panchang_base::{
    DinaAdhipatiResult, FestivalQuery, FestivalRule, FestivalTable, GeoLocation, RiseSetEvent,
    RiseSetResult, RulerMethod, compute_rise_set, compute_ruler,
};
use panchang_ephem::{Ephemeris, SiderealPosition, sidereal_position};
use panchang_time::{CivilDate, Instant};

use crate::anga::{resolve_anga, segments_between};
use crate::anga_types::{AngaKind, AngaSegment};
use crate::chart::{GrahaPosition, grid_for_day, grid_for_instant};
use crate::config::PanchangConfig;
use crate::day::day_record;
use crate::day_types::DayRecord;
use crate::error::SearchError;
use crate::festival_dates::{FestivalOccurrence, festival_dates};
use crate::masa::{MasaInfo, masa_at};
use crate::scan::{YearScan, scan_year};

/// The panchang engine.
///
/// Stateless apart from what it is built with; share it freely across
/// threads when `E` allows.
#[derive(Debug, Clone)]
pub struct Panchangam<E: Ephemeris> {
    ephemeris: E,
    config: PanchangConfig,
    festivals: FestivalTable,
}

impl<E: Ephemeris> Panchangam<E> {
    /// Build an engine; the configuration is validated once here.
    pub fn new(
        ephemeris: E,
        config: PanchangConfig,
        festivals: FestivalTable,
    ) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            ephemeris,
            config,
            festivals,
        })
    }

    /// Engine with the built-in festival table.
    pub fn with_builtin_festivals(ephemeris: E, config: PanchangConfig) -> Result<Self, SearchError> {
        Self::new(ephemeris, config, FestivalTable::builtin()?)
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    pub fn config(&self) -> &PanchangConfig {
        &self.config
    }

    pub fn festivals(&self) -> &FestivalTable {
        &self.festivals
    }

    /// Sidereal Sun and Moon longitudes.
    pub fn position(&self, instant: Instant) -> Result<SiderealPosition, SearchError> {
        Ok(sidereal_position(
            &self.ephemeris,
            instant,
            self.config.ayanamsha,
        )?)
    }

    /// The `kind` segment active at `instant`.
    pub fn resolve(&self, kind: AngaKind, instant: Instant) -> Result<AngaSegment, SearchError> {
        resolve_anga(
            &self.ephemeris,
            kind,
            instant,
            self.config.ayanamsha,
            &self.config.search,
        )
    }

    /// Every `kind` segment overlapping `[from, to)`.
    pub fn segments_between(
        &self,
        kind: AngaKind,
        from: Instant,
        to: Instant,
    ) -> Result<Vec<AngaSegment>, SearchError> {
        segments_between(
            &self.ephemeris,
            kind,
            from,
            to,
            self.config.ayanamsha,
            &self.config.search,
        )
    }

    /// A rise/set or twilight event on the local civil `date`.
    pub fn rise_set(
        &self,
        date: CivilDate,
        location: &GeoLocation,
        event: RiseSetEvent,
    ) -> Result<RiseSetResult, SearchError> {
        location.validate()?;
        Ok(compute_rise_set(date, location, event, &self.config.riseset))
    }

    pub fn sunrise(&self, date: CivilDate, location: &GeoLocation) -> Result<RiseSetResult, SearchError> {
        self.rise_set(date, location, RiseSetEvent::Sunrise)
    }

    pub fn sunset(&self, date: CivilDate, location: &GeoLocation) -> Result<RiseSetResult, SearchError> {
        self.rise_set(date, location, RiseSetEvent::Sunset)
    }

    /// Lunar month containing `instant`.
    pub fn masa(&self, instant: Instant) -> Result<MasaInfo, SearchError> {
        masa_at(
            &self.ephemeris,
            instant,
            self.config.ayanamsha,
            &self.config.search,
        )
    }

    /// Full record for one civil day.
    pub fn day(&self, date: CivilDate, location: &GeoLocation) -> Result<DayRecord, SearchError> {
        day_record(&self.ephemeris, date, location, &self.config)
    }

    /// Every boundary of `kind` across the local civil `year`.
    pub fn scan_year(
        &self,
        year: i32,
        location: &GeoLocation,
        kind: AngaKind,
    ) -> Result<YearScan, SearchError> {
        scan_year(
            &self.ephemeris,
            kind,
            year,
            location,
            self.config.ayanamsha,
            &self.config.search,
        )
    }

    /// Rules matching a day given by indices, in precedence order.
    pub fn festivals_for_day(
        &self,
        tithi: u8,
        masa: u8,
        nakshatra: u8,
        leap_month: bool,
    ) -> Result<Vec<&FestivalRule>, SearchError> {
        Ok(self
            .festivals
            .festivals_for_day(tithi, masa, nakshatra, leap_month)?)
    }

    /// Rules matching an assembled day, including its kshaya tithi.
    pub fn festivals_on(&self, day: &DayRecord) -> Result<Vec<&FestivalRule>, SearchError> {
        let query = FestivalQuery {
            tithi: day.tithi.primary.index,
            masa: day.masa.masa.index(),
            nakshatra: day.nakshatra.index,
            leap_month: day.masa.adhika,
            kshaya_tithi: day.tithi.kshaya.map(|s| s.index),
        };
        Ok(self.festivals.festivals_matching(&query)?)
    }

    /// Occurrences of the rule `festival_id` overlapping `[from, to)` at
    /// `location`.
    pub fn festival_dates(
        &self,
        festival_id: &str,
        from: Instant,
        to: Instant,
        location: &GeoLocation,
    ) -> Result<Vec<FestivalOccurrence>, SearchError> {
        let rule = self.festivals.get(festival_id).ok_or_else(|| {
            SearchError::InvalidInput(format!("unknown festival {festival_id}"))
        })?;
        festival_dates(&self.ephemeris, rule, from, to, location, &self.config)
    }

    /// Chart at an explicit instant.
    pub fn chart(&self, instant: Instant) -> Result<Vec<GrahaPosition>, SearchError> {
        grid_for_instant(
            &self.ephemeris,
            instant,
            self.config.ayanamsha,
            self.config.node_mode,
        )
    }

    /// Chart at sunrise on `date`, or at `at` when given.
    pub fn chart_for_day(
        &self,
        date: CivilDate,
        location: &GeoLocation,
        at: Option<Instant>,
    ) -> Result<Vec<GrahaPosition>, SearchError> {
        grid_for_day(&self.ephemeris, date, location, at, &self.config)
    }

    /// Ruler of an assembled day, counting from `start_nakshatra`.
    pub fn ruler_for_day(
        &self,
        day: &DayRecord,
        start_nakshatra: Option<u8>,
        method: RulerMethod,
    ) -> Result<DinaAdhipatiResult, SearchError> {
        Ok(compute_ruler(
            start_nakshatra,
            day.nakshatra.index as i32,
            day.tithi.primary.index as i32 + 1,
            day.vaar.number(),
            method,
        )?)
    }
}
