//! Tithi (lunar day) and Paksha classification.
//!
//! A tithi is 12° of Moon−Sun elongation; 30 tithis make a synodic month.
//! Indices 0..14 are Shukla paksha (waxing), 15..29 Krishna paksha.

use crate::util::{normalize_360, segment_index};

/// Width of one tithi in degrees of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing half, new moon to full moon.
    Shukla,
    /// Waning half, full moon to new moon.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }

    /// Paksha of a 0-based tithi index.
    pub const fn from_tithi_index(index: u8) -> Self {
        if index < 15 { Self::Shukla } else { Self::Krishna }
    }
}

/// The 30 tithis of a synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

/// All 30 tithis in order (index 0 = Shukla Pratipada).
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

/// Names of the 15 tithis within a paksha; the 15th differs per paksha.
const PAKSHA_TITHI_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

impl Tithi {
    /// 0-based index (0..29).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Tithi for a 0-based index, or `None` when out of range.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_TITHIS.get(index as usize).copied()
    }

    /// Name without the paksha prefix ("Ekadashi", "Purnima").
    pub const fn name(self) -> &'static str {
        match self {
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
            _ => PAKSHA_TITHI_NAMES[(self.index() % 15) as usize],
        }
    }

    pub const fn paksha(self) -> Paksha {
        Paksha::from_tithi_index(self.index())
    }

    /// 1-based number within the paksha (1..15).
    pub const fn number_in_paksha(self) -> u8 {
        self.index() % 15 + 1
    }

    pub const fn all() -> &'static [Tithi; 30] {
        &ALL_TITHIS
    }
}

/// Tithi lookup result for one elongation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// 0-based index (0..29).
    pub tithi_index: u8,
    pub paksha: Paksha,
    /// 1-based number within the paksha (1..15).
    pub tithi_in_paksha: u8,
    /// Degrees elapsed within the tithi [0, 12).
    pub degrees_in_tithi: f64,
}

/// Classify a Moon−Sun elongation (degrees, any range).
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let elong = normalize_360(elongation_deg);
    let idx = segment_index(elong, TITHI_SEGMENT_DEG, 30);
    let tithi = ALL_TITHIS[idx as usize];
    TithiPosition {
        tithi,
        tithi_index: idx,
        paksha: tithi.paksha(),
        tithi_in_paksha: tithi.number_in_paksha(),
        degrees_in_tithi: elong - idx as f64 * TITHI_SEGMENT_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, t) in ALL_TITHIS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
        }
    }

    #[test]
    fn names() {
        assert_eq!(Tithi::ShuklaPratipada.name(), "Pratipada");
        assert_eq!(Tithi::KrishnaEkadashi.name(), "Ekadashi");
        assert_eq!(Tithi::Purnima.name(), "Purnima");
        assert_eq!(Tithi::Amavasya.name(), "Amavasya");
    }

    #[test]
    fn paksha_split() {
        assert_eq!(Paksha::from_tithi_index(14), Paksha::Shukla);
        assert_eq!(Paksha::from_tithi_index(15), Paksha::Krishna);
        assert_eq!(Tithi::Amavasya.number_in_paksha(), 15);
        assert_eq!(Tithi::KrishnaPratipada.number_in_paksha(), 1);
    }

    #[test]
    fn elongation_boundaries() {
        assert_eq!(tithi_from_elongation(0.0).tithi, Tithi::ShuklaPratipada);
        assert_eq!(tithi_from_elongation(11.999).tithi_index, 0);
        assert_eq!(tithi_from_elongation(12.0).tithi_index, 1);
        assert_eq!(tithi_from_elongation(180.0).tithi, Tithi::KrishnaPratipada);
        assert_eq!(tithi_from_elongation(359.9).tithi, Tithi::Amavasya);
        assert_eq!(tithi_from_elongation(-6.0).tithi, Tithi::Amavasya);
    }

    #[test]
    fn degrees_within() {
        let p = tithi_from_elongation(125.0);
        assert_eq!(p.tithi_index, 10);
        assert!((p.degrees_in_tithi - 5.0).abs() < 1e-10);
    }

    #[test]
    fn from_index_bounds() {
        assert_eq!(Tithi::from_index(29), Some(Tithi::Amavasya));
        assert_eq!(Tithi::from_index(30), None);
    }
}
