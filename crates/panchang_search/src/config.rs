//! Engine configuration.

use panchang_base::RiseSetConfig;
use panchang_ephem::{AyanamshaSystem, NodeMode};

use crate::error::SearchError;

/// Bounds for boundary search and year scanning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// How far a directional search walks before giving up, in days.
    pub bracket_window_days: f64,
    /// How far the scanner searches around a predicted boundary, in days.
    pub scan_window_days: f64,
    /// Segments longer than this are dropped as ephemeris failures, in days.
    pub max_segment_days: f64,
    /// Bisection stops once the bracket is narrower than this, in seconds.
    pub tolerance_seconds: f64,
    /// Hard cap on bisection steps.
    pub max_iterations: u32,
    /// Boundaries closer than this are treated as one, in seconds.
    pub dedup_seconds: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            bracket_window_days: 3.0,
            scan_window_days: 5.0,
            max_segment_days: 3.0,
            tolerance_seconds: 0.5,
            max_iterations: 64,
            dedup_seconds: 60.0,
        }
    }
}

impl SearchConfig {
    /// Reject non-positive or non-finite bounds.
    pub fn validate(&self) -> Result<(), SearchError> {
        let fields = [
            ("bracket_window_days", self.bracket_window_days),
            ("scan_window_days", self.scan_window_days),
            ("max_segment_days", self.max_segment_days),
            ("tolerance_seconds", self.tolerance_seconds),
            ("dedup_seconds", self.dedup_seconds),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(SearchError::InvalidInput(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.max_iterations == 0 {
            return Err(SearchError::InvalidInput(
                "max_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Everything that parameterises a panchang computation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanchangConfig {
    pub ayanamsha: AyanamshaSystem,
    /// Mean or true lunar node for Rahu/Ketu.
    pub node_mode: NodeMode,
    pub riseset: RiseSetConfig,
    pub search: SearchConfig,
}

impl PanchangConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        self.search.validate()?;
        let r = &self.riseset;
        if !(r.refraction_arcmin.is_finite() && r.semidiameter_arcmin.is_finite()) {
            return Err(SearchError::InvalidInput(
                "rise/set horizon parameters must be finite".into(),
            ));
        }
        Ok(())
    }
}
