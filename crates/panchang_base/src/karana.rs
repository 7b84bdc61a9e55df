//! Karana (half-tithi) classification.
//!
//! A synodic month has 60 karanas of 6° elongation. Position 0 is always
//! Kimstughna; positions 1..56 cycle through the seven movable karanas
//! (Bava .. Vishti) eight times; positions 57, 58 and 59 are the fixed
//! Shakuni, Chatushpada and Naga.

use crate::util::{normalize_360, segment_index};

/// Width of one karana in degrees of elongation.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// Number of karana positions in a synodic month.
pub const KARANA_POSITIONS: u8 = 60;

/// The 11 karana names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// All 11 karanas: the seven movable ones, then the four fixed ones.
pub const ALL_KARANAS: [Karana; 11] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Naga,
    Karana::Kimstughna,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// 0-based name index (0..10).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Whether this karana occurs once per month rather than cycling.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }

    pub fn from_index(index: u8) -> Option<Self> {
        ALL_KARANAS.get(index as usize).copied()
    }

    /// The karana occupying a month position (0..59). Out-of-range wraps.
    pub const fn at_position(position: u8) -> Self {
        match position % KARANA_POSITIONS {
            0 => Self::Kimstughna,
            57 => Self::Shakuni,
            58 => Self::Chatushpada,
            59 => Self::Naga,
            p => ALL_KARANAS[((p - 1) % 7) as usize],
        }
    }

    pub const fn all() -> &'static [Karana; 11] {
        &ALL_KARANAS
    }
}

/// Karana lookup result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// Position within the synodic month (0..59).
    pub position: u8,
    /// Degrees elapsed within the karana [0, 6).
    pub degrees_in_karana: f64,
}

/// Classify a Moon−Sun elongation into its karana.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let elong = normalize_360(elongation_deg);
    let position = segment_index(elong, KARANA_SEGMENT_DEG, KARANA_POSITIONS);
    KaranaPosition {
        karana: Karana::at_position(position),
        position,
        degrees_in_karana: (elong - position as f64 * KARANA_SEGMENT_DEG).max(0.0),
    }
}
