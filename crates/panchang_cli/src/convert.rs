//! Pure conversion functions: command-line and TOML values -> engine types.

use std::path::Path;

use anyhow::{Context, Result, bail};

use panchang_base::{FestivalTable, GeoLocation, RiseSetConfig, RulerMethod};
use panchang_ephem::{AyanamshaSystem, NodeMode};
use panchang_search::{AngaKind, PanchangConfig, SearchConfig};
use panchang_time::{CivilDate, Instant, UtcOffset, UtcTime};

use crate::cli::LocationArgs;
use crate::config::{LocationToml, PanchangToml, RiseSetToml, SearchToml};

/// Reads the config file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<PanchangToml> {
    let Some(path) = path else {
        return Ok(PanchangToml::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

pub fn parse_ayanamsha(s: &str) -> Result<AyanamshaSystem> {
    match AyanamshaSystem::from_name(s) {
        Some(system) => Ok(system),
        None => {
            let valid: Vec<&str> = AyanamshaSystem::all().iter().map(|a| a.name()).collect();
            bail!("unknown ayanamsha: {s:?} (valid: {})", valid.join(", "))
        }
    }
}

pub fn parse_node_mode(s: &str) -> Result<NodeMode> {
    match NodeMode::from_name(s) {
        Some(mode) => Ok(mode),
        None => bail!("unknown node mode: {s:?} (mean or true)"),
    }
}

pub fn parse_ruler_method(s: &str) -> Result<RulerMethod> {
    match RulerMethod::from_name(s) {
        Some(method) => Ok(method),
        None => bail!("unknown ruler method: {s:?} (main, sulabha or mathantara)"),
    }
}

pub fn parse_anga_kind(s: &str) -> Result<AngaKind> {
    match AngaKind::from_name(s) {
        Some(kind) => Ok(kind),
        None => bail!("unknown anga kind: {s:?} (tithi, nakshatra, yoga or karana)"),
    }
}

pub fn parse_date(s: &str) -> Result<CivilDate> {
    s.parse::<CivilDate>()
        .with_context(|| format!("invalid date {s:?}"))
}

pub fn parse_instant(s: &str) -> Result<Instant> {
    let utc = s
        .parse::<UtcTime>()
        .with_context(|| format!("invalid UTC instant {s:?}"))?;
    Ok(Instant::from_utc(&utc))
}

/// Builds a [`RiseSetConfig`] from the TOML horizon settings.
pub fn build_riseset_config(riseset: &RiseSetToml) -> RiseSetConfig {
    RiseSetConfig {
        refraction_arcmin: riseset.refraction_arcmin,
        semidiameter_arcmin: riseset.semidiameter_arcmin,
    }
}

/// Builds a [`SearchConfig`] from the TOML search settings.
pub fn build_search_config(search: &SearchToml) -> SearchConfig {
    SearchConfig {
        bracket_window_days: search.bracket_window_days,
        scan_window_days: search.scan_window_days,
        max_segment_days: search.max_segment_days,
        tolerance_seconds: search.tolerance_seconds,
        max_iterations: search.max_iterations,
        dedup_seconds: search.dedup_seconds,
    }
}

/// Builds and validates a [`PanchangConfig`] from the whole config file.
pub fn build_panchang_config(config: &PanchangToml) -> Result<PanchangConfig> {
    let cfg = PanchangConfig {
        ayanamsha: parse_ayanamsha(&config.ayanamsha)?,
        node_mode: parse_node_mode(&config.node_mode)?,
        riseset: build_riseset_config(&config.riseset),
        search: build_search_config(&config.search),
    };
    cfg.validate().context("invalid engine configuration")?;
    Ok(cfg)
}

/// Builds a [`GeoLocation`], letting command-line flags override the file.
pub fn build_location(file: &LocationToml, args: &LocationArgs) -> Result<GeoLocation> {
    let latitude = args.lat.unwrap_or(file.latitude);
    let longitude = args.lng.unwrap_or(file.longitude);
    let hours = args.offset.unwrap_or(file.utc_offset_hours);
    let offset =
        UtcOffset::from_hours(hours).with_context(|| format!("invalid UTC offset {hours}"))?;
    GeoLocation::new(latitude, longitude, offset).context("invalid location")
}

/// Loads the festival table named in the config, or the built-in one.
pub fn load_festival_table(path: Option<&Path>) -> Result<FestivalTable> {
    let Some(path) = path else {
        return FestivalTable::builtin().context("built-in festival table is invalid");
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read festival table: {}", path.display()))?;
    FestivalTable::from_toml_str(&toml_str)
        .with_context(|| format!("invalid festival table: {}", path.display()))
}
