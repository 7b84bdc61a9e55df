use std::path::PathBuf;

use serde::Deserialize;

/// Top-level `panchang.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanchangToml {
    /// Ayanamsha system name (lahiri, raman, kp, fagan-bradley, ...).
    #[serde(default = "default_ayanamsha")]
    pub ayanamsha: String,

    /// Lunar node model: mean or true.
    #[serde(default = "default_node_mode")]
    pub node_mode: String,

    /// External festival table; the built-in table when absent.
    #[serde(default)]
    pub festival_table: Option<PathBuf>,

    #[serde(default)]
    pub location: LocationToml,

    #[serde(default)]
    pub riseset: RiseSetToml,

    #[serde(default)]
    pub search: SearchToml,
}

impl Default for PanchangToml {
    fn default() -> Self {
        Self {
            ayanamsha: default_ayanamsha(),
            node_mode: default_node_mode(),
            festival_table: None,
            location: LocationToml::default(),
            riseset: RiseSetToml::default(),
            search: SearchToml::default(),
        }
    }
}

fn default_ayanamsha() -> String {
    "lahiri".to_string()
}
fn default_node_mode() -> String {
    "true".to_string()
}

/// Default observer; command-line flags override each field.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: f64,
}

impl Default for LocationToml {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            utc_offset_hours: default_utc_offset_hours(),
        }
    }
}

// Hyderabad.
fn default_latitude() -> f64 {
    17.385
}
fn default_longitude() -> f64 {
    78.4867
}
fn default_utc_offset_hours() -> f64 {
    5.5
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RiseSetToml {
    #[serde(default = "default_refraction_arcmin")]
    pub refraction_arcmin: f64,
    #[serde(default = "default_semidiameter_arcmin")]
    pub semidiameter_arcmin: f64,
}

impl Default for RiseSetToml {
    fn default() -> Self {
        Self {
            refraction_arcmin: default_refraction_arcmin(),
            semidiameter_arcmin: default_semidiameter_arcmin(),
        }
    }
}

fn default_refraction_arcmin() -> f64 {
    34.0
}
fn default_semidiameter_arcmin() -> f64 {
    16.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchToml {
    #[serde(default = "default_bracket_window_days")]
    pub bracket_window_days: f64,
    #[serde(default = "default_scan_window_days")]
    pub scan_window_days: f64,
    #[serde(default = "default_max_segment_days")]
    pub max_segment_days: f64,
    #[serde(default = "default_tolerance_seconds")]
    pub tolerance_seconds: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    #[serde(default = "default_dedup_seconds")]
    pub dedup_seconds: f64,
}

impl Default for SearchToml {
    fn default() -> Self {
        Self {
            bracket_window_days: default_bracket_window_days(),
            scan_window_days: default_scan_window_days(),
            max_segment_days: default_max_segment_days(),
            tolerance_seconds: default_tolerance_seconds(),
            max_iterations: default_max_iterations(),
            dedup_seconds: default_dedup_seconds(),
        }
    }
}

fn default_bracket_window_days() -> f64 {
    3.0
}
fn default_scan_window_days() -> f64 {
    5.0
}
fn default_max_segment_days() -> f64 {
    3.0
}
fn default_tolerance_seconds() -> f64 {
    0.5
}
fn default_max_iterations() -> u32 {
    64
}
fn default_dedup_seconds() -> f64 {
    60.0
}
