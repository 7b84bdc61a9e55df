//! Dina-Adhipati: the planetary "ruler of the day".
//!
//! A closed-form count from the starting nakshatra to the day's nakshatra,
//! optionally combined with tithi and weekday, reduced modulo 9 and looked
//! up in one of three traditional tables. Each method owns its own table.

use crate::error::VedicError;
use crate::graha::Graha;

/// Which historical variant of the reckoning to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RulerMethod {
    /// `count * 4 + tithi + weekday`, reduced modulo 9.
    #[default]
    Main,
    /// `count` modulo 9 through the Vimshottari sequence.
    Sulabha,
    /// `count` modulo 9 through the descending planetary-speed sequence.
    Mathantara,
}

/// All methods.
pub const ALL_METHODS: [RulerMethod; 3] = [
    RulerMethod::Main,
    RulerMethod::Sulabha,
    RulerMethod::Mathantara,
];

impl RulerMethod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Sulabha => "sulabha",
            Self::Mathantara => "mathantara",
        }
    }

    /// Parse a method name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_METHODS
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(name.trim()))
    }

    fn table(self) -> &'static [(Graha, &'static str); 9] {
        match self {
            Self::Main => &MAIN_TABLE,
            Self::Sulabha => &SULABHA_TABLE,
            Self::Mathantara => &MATHANTARA_TABLE,
        }
    }
}

/// Remainder 1..9 → ruler and outcome, for [`RulerMethod::Main`].
static MAIN_TABLE: [(Graha, &str); 9] = [
    (Graha::Surya, "Authority and recognition; favourable for dealings with officials"),
    (Graha::Chandra, "Calm mind and good company; favourable for travel"),
    (Graha::Mangal, "Quarrels and haste; avoid disputes"),
    (Graha::Buddh, "Learning and trade prosper"),
    (Graha::Guru, "Auspicious; gains through elders and teachers"),
    (Graha::Shukra, "Comfort, pleasure and gain of goods"),
    (Graha::Shani, "Delays and fatigue; proceed patiently"),
    (Graha::Rahu, "Obstacles and confusion; postpone new ventures"),
    (Graha::Ketu, "Detachment; suited to worship rather than business"),
];

/// Remainder 1..9 → ruler and outcome, for [`RulerMethod::Sulabha`].
static SULABHA_TABLE: [(Graha, &str); 9] = [
    (Graha::Ketu, "Uncertain results; keep plans modest"),
    (Graha::Shukra, "Pleasant day; good for arts and purchases"),
    (Graha::Surya, "Success through effort and status"),
    (Graha::Chandra, "Favourable for family matters"),
    (Graha::Mangal, "Energy runs high; guard against injury"),
    (Graha::Rahu, "Unexpected hindrances"),
    (Graha::Guru, "Wisdom and prosperity"),
    (Graha::Shani, "Hard work with slow reward"),
    (Graha::Buddh, "Good for communication and accounts"),
];

/// Remainder 1..9 → ruler and outcome, for [`RulerMethod::Mathantara`].
static MATHANTARA_TABLE: [(Graha, &str); 9] = [
    (Graha::Shani, "Sluggish progress"),
    (Graha::Guru, "Blessings and sound counsel"),
    (Graha::Mangal, "Courage, but tempers flare"),
    (Graha::Surya, "Honour and vitality"),
    (Graha::Shukra, "Harmony in relationships"),
    (Graha::Buddh, "Sharp intellect; good for study"),
    (Graha::Chandra, "Emotional ease and nourishment"),
    (Graha::Rahu, "Deception possible; verify before trusting"),
    (Graha::Ketu, "Spiritual inclination; material matters stall"),
];

/// Outcome of a day-ruler reckoning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DinaAdhipatiResult {
    /// Inclusive nakshatra count from start to end (1..27).
    pub count: u8,
    /// Remainder after reduction (1..9; a zero remainder counts as 9).
    pub remainder: u8,
    pub planet: Graha,
    pub outcome: &'static str,
    pub method: RulerMethod,
}

/// Compute the ruler of the day.
///
/// * `start_nakshatra` — counting origin, 0..26 (default 0, Ashwini)
/// * `end_nakshatra` — the day's nakshatra, 0..26; anything else is rejected
/// * `tithi` — 1-based tithi number, clamped to 1..30
/// * `weekday` — 1 = Sunday .. 7 = Saturday; other values are reduced
///   modulo 7 onto that scale (0 and 7 are both Saturday)
pub fn compute_ruler(
    start_nakshatra: Option<u8>,
    end_nakshatra: i32,
    tithi: i32,
    weekday: u8,
    method: RulerMethod,
) -> Result<DinaAdhipatiResult, VedicError> {
    let start = start_nakshatra.unwrap_or(0);
    if start > 26 {
        return Err(VedicError::InvalidInput(format!(
            "start nakshatra {start} outside 0..=26"
        )));
    }
    if !(0..=26).contains(&end_nakshatra) {
        return Err(VedicError::InvalidInput(format!(
            "end nakshatra {end_nakshatra} outside 0..=26"
        )));
    }
    let weekday = match weekday % 7 {
        0 => 7,
        w => w,
    };
    let tithi = tithi.clamp(1, 30) as u32;

    let count = ((end_nakshatra as u32 + 27 - start as u32) % 27 + 1) as u8;
    let raw = match method {
        RulerMethod::Main => count as u32 * 4 + tithi + weekday as u32,
        RulerMethod::Sulabha | RulerMethod::Mathantara => count as u32,
    };
    let remainder = match (raw % 9) as u8 {
        0 => 9,
        r => r,
    };
    let (planet, outcome) = method.table()[(remainder - 1) as usize];

    Ok(DinaAdhipatiResult {
        count,
        remainder,
        planet,
        outcome,
        method,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_main() {
        // count = 6, raw = 6*4 + 10 + 3 = 37, 37 % 9 = 1 -> Sun
        let r = compute_ruler(None, 5, 10, 3, RulerMethod::Main).unwrap();
        assert_eq!(r.count, 6);
        assert_eq!(r.remainder, 1);
        assert_eq!(r.planet, Graha::Surya);
    }

    #[test]
    fn zero_remainder_becomes_nine() {
        // count = 9 -> 9 % 9 = 0 -> 9
        let r = compute_ruler(Some(0), 8, 1, 1, RulerMethod::Sulabha).unwrap();
        assert_eq!(r.count, 9);
        assert_eq!(r.remainder, 9);
        assert_eq!(r.planet, Graha::Buddh);
    }

    #[test]
    fn count_wraps_around_the_circle() {
        let r = compute_ruler(Some(20), 2, 1, 1, RulerMethod::Mathantara).unwrap();
        assert_eq!(r.count, 10);
        assert_eq!(r.remainder, 1);
        assert_eq!(r.planet, Graha::Shani);
        let same = compute_ruler(Some(4), 4, 1, 1, RulerMethod::Sulabha).unwrap();
        assert_eq!(same.count, 1);
    }

    #[test]
    fn methods_use_distinct_tables() {
        let a = compute_ruler(None, 0, 1, 1, RulerMethod::Sulabha).unwrap();
        let b = compute_ruler(None, 0, 1, 1, RulerMethod::Mathantara).unwrap();
        assert_eq!(a.remainder, b.remainder);
        assert_ne!(a.planet, b.planet);
        assert!(!std::ptr::eq(
            RulerMethod::Main.table(),
            RulerMethod::Sulabha.table()
        ));
    }

    #[test]
    fn tithi_is_clamped_not_rejected() {
        let low = compute_ruler(None, 5, -4, 3, RulerMethod::Main).unwrap();
        let one = compute_ruler(None, 5, 1, 3, RulerMethod::Main).unwrap();
        assert_eq!(low, one);
        let high = compute_ruler(None, 5, 99, 3, RulerMethod::Main).unwrap();
        let thirty = compute_ruler(None, 5, 30, 3, RulerMethod::Main).unwrap();
        assert_eq!(high, thirty);
    }

    #[test]
    fn rejects_bad_nakshatra() {
        assert!(compute_ruler(None, 27, 1, 1, RulerMethod::Main).is_err());
        assert!(compute_ruler(None, -1, 1, 1, RulerMethod::Main).is_err());
        assert!(compute_ruler(Some(30), 3, 1, 1, RulerMethod::Main).is_err());
    }

    #[test]
    fn weekday_reduced_modulo_seven() {
        let saturday = compute_ruler(None, 3, 1, 7, RulerMethod::Main).unwrap();
        assert_eq!(compute_ruler(None, 3, 1, 0, RulerMethod::Main).unwrap(), saturday);
        assert_eq!(compute_ruler(None, 3, 1, 14, RulerMethod::Main).unwrap(), saturday);
        let sunday = compute_ruler(None, 3, 1, 1, RulerMethod::Main).unwrap();
        assert_eq!(compute_ruler(None, 3, 1, 8, RulerMethod::Main).unwrap(), sunday);
    }

    #[test]
    fn method_names_parse() {
        assert_eq!(RulerMethod::from_name("Main"), Some(RulerMethod::Main));
        assert_eq!(RulerMethod::from_name("mathantara"), Some(RulerMethod::Mathantara));
        assert_eq!(RulerMethod::from_name("other"), None);
    }
}
