//! Ephemeris provider for the panchang engine.
//!
//! The engine only ever needs ecliptic longitudes, so the provider contract
//! is a single object-safe trait, [`Ephemeris`], returning the tropical
//! longitude of a [`Body`] (mean equinox of date) at an [`Instant`].
//! [`AnalyticEphemeris`] implements it with closed-form theories:
//!
//! - Sun: Meeus, *Astronomical Algorithms* ch. 25 (low-precision, ~0.01°)
//! - Moon: Meeus ch. 47 main longitude series (~10″)
//! - Mercury..Saturn: Standish Keplerian elements, 1800–2050 (arc-minutes)
//!
//! Sidereal longitudes are produced by subtracting an [`AyanamshaSystem`]
//! offset; lunar nodes are derived quantities in [`lunar_nodes`].

pub mod ayanamsha;
pub mod body;
pub mod error;
pub mod fundamental;
pub mod lunar;
pub mod lunar_nodes;
pub mod planets;
pub mod provider;
pub mod solar;

pub use ayanamsha::{ALL_SYSTEMS, AyanamshaSystem, ayanamsha_deg};
pub use body::{ALL_BODIES, Body};
pub use error::EphemerisError;
pub use fundamental::{
    fundamental_arguments, general_precession_longitude_arcsec, general_precession_longitude_deg,
    normalize_deg,
};
pub use lunar_nodes::{ALL_MODES, ALL_NODES, LunarNode, NodeMode, lunar_node_deg};
pub use provider::{
    AnalyticEphemeris, Ephemeris, SiderealPosition, sidereal_longitude, sidereal_position,
};
