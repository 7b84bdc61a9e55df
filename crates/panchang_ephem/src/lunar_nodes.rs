//! Lunar node (Rahu/Ketu) longitudes.
//!
//! Mean node: the fifth Delaunay argument Ω (IERS Conventions 2010).
//! True node: mean node plus the five largest periodic terms of Meeus,
//! *Astronomical Algorithms* (2nd ed.), chapter 47.
//!
//! Ketu is never evaluated on its own: it is always Rahu + 180°.

use crate::fundamental::{fundamental_arguments, normalize_deg};

/// Which lunar node to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarNode {
    /// Ascending node.
    Rahu,
    /// Descending node, Rahu + 180°.
    Ketu,
}

/// All node variants.
pub const ALL_NODES: [LunarNode; 2] = [LunarNode::Rahu, LunarNode::Ketu];

impl LunarNode {
    pub const fn all() -> &'static [LunarNode] {
        &ALL_NODES
    }
}

/// Mean or true node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeMode {
    /// Smooth polynomial motion only.
    Mean,
    /// Mean node plus periodic corrections.
    #[default]
    True,
}

/// All node modes.
pub const ALL_MODES: [NodeMode; 2] = [NodeMode::Mean, NodeMode::True];

impl NodeMode {
    pub const fn all() -> &'static [NodeMode] {
        &ALL_MODES
    }

    /// Lower-case name as used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::True => "true",
        }
    }

    /// Parse `"mean"` or `"true"` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_MODES
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Periodic terms of the true node: `[nl, nl', nF, nD, amplitude_deg]`.
#[rustfmt::skip]
static TERMS: [[f64; 5]; 5] = [
    // nl   nl'   nF    nD    amplitude
    [ 0.0,  0.0, -2.0,  2.0, -1.4979],
    [ 0.0,  1.0,  0.0,  0.0, -0.1500],
    [ 0.0,  0.0,  0.0,  2.0,  0.1226],
    [ 0.0,  0.0,  2.0,  0.0,  0.1176],
    [ 2.0,  0.0, -2.0,  0.0, -0.0801],
];

fn node_perturbation_deg(args: &[f64; 5]) -> f64 {
    TERMS
        .iter()
        .map(|term| {
            let angle = term[0] * args[0] + term[1] * args[1] + term[2] * args[2] + term[3] * args[3];
            term[4] * angle.sin()
        })
        .sum()
}

/// Mean Rahu longitude in degrees [0, 360). `t` = TT centuries since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    normalize_deg(fundamental_arguments(t)[4].to_degrees())
}

/// True Rahu longitude in degrees [0, 360).
pub fn true_rahu_deg(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    normalize_deg(args[4].to_degrees() + node_perturbation_deg(&args))
}

/// Longitude of a lunar node (mean equinox of date) in degrees [0, 360).
pub fn lunar_node_deg(node: LunarNode, t: f64, mode: NodeMode) -> f64 {
    let rahu = match mode {
        NodeMode::Mean => mean_rahu_deg(t),
        NodeMode::True => true_rahu_deg(t),
    };
    match node {
        LunarNode::Rahu => rahu,
        LunarNode::Ketu => normalize_deg(rahu + 180.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_rahu_at_j2000() {
        let deg = mean_rahu_deg(0.0);
        assert!((deg - 125.04).abs() < 0.1, "mean Rahu = {deg}");
    }

    #[test]
    fn ketu_exactly_opposite() {
        for &t in &[0.0, 0.1, -0.5, 0.24] {
            for mode in NodeMode::all() {
                let rahu = lunar_node_deg(LunarNode::Rahu, t, *mode);
                let ketu = lunar_node_deg(LunarNode::Ketu, t, *mode);
                let diff = normalize_deg(ketu - rahu);
                assert!((diff - 180.0).abs() < 1e-9, "t={t}: diff = {diff}");
            }
        }
    }

    #[test]
    fn true_node_oscillates_within_two_degrees() {
        for i in 0..100 {
            let t = i as f64 * 0.001;
            let d = normalize_deg(true_rahu_deg(t) - mean_rahu_deg(t) + 180.0) - 180.0;
            assert!(d.abs() < 2.0, "t={t}: true - mean = {d}");
        }
    }

    #[test]
    fn mean_node_regresses() {
        let r1 = mean_rahu_deg(0.0);
        let r2 = mean_rahu_deg(0.01);
        let per_year = normalize_deg(r2 - r1 + 180.0) - 180.0;
        assert!((per_year + 19.34).abs() < 0.5, "rate = {per_year} deg/yr");
    }

    #[test]
    fn mode_names_parse() {
        assert_eq!(NodeMode::from_name("TRUE"), Some(NodeMode::True));
        assert_eq!(NodeMode::from_name("mean"), Some(NodeMode::Mean));
        assert_eq!(NodeMode::from_name("osculating"), None);
    }
}
