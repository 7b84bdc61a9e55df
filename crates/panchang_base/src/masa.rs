//! Masa (lunar month), Ritu (season) and Ayana classification.
//!
//! Months are amanta: new moon to new moon. A month takes the name of the
//! solar sign transit (sankranti) that falls inside it, which is the same
//! as naming it by the Sun's rashi at its closing new moon.

use crate::util::normalize_360;

/// The 12 lunar months starting from Chaitra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashvayuja,
    Kartika,
    Margashira,
    Pausha,
    Magha,
    Phalguna,
}

/// All 12 masas in order (0 = Chaitra).
pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashvayuja,
    Masa::Kartika,
    Masa::Margashira,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashvayuja => "Ashvayuja",
            Self::Kartika => "Kartika",
            Self::Margashira => "Margashira",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    /// 0-based index (Chaitra = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        ALL_MASAS.get(index as usize).copied()
    }

    pub const fn ritu(self) -> Ritu {
        ALL_RITUS[(self.index() / 2) as usize]
    }

    pub const fn all() -> &'static [Masa; 12] {
        &ALL_MASAS
    }
}

/// Month named by the Sun's sidereal rashi at the closing new moon.
///
/// Mesha (0) closes Chaitra, Vrishabha closes Vaishakha, and so on.
pub const fn masa_from_rashi_index(rashi_index: u8) -> Masa {
    ALL_MASAS[(rashi_index % 12) as usize]
}

/// Month name and leap flag from the Sun's rashi at both bounding new moons.
///
/// When no sankranti falls inside the lunation the month is adhika and
/// borrows the name of the month that follows it.
pub const fn masa_from_new_moon_rashis(rashi_at_start: u8, rashi_at_end: u8) -> (Masa, bool) {
    if rashi_at_start % 12 == rashi_at_end % 12 {
        (masa_from_rashi_index(rashi_at_start + 1), true)
    } else {
        (masa_from_rashi_index(rashi_at_end), false)
    }
}

/// The six seasons, two masas each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ritu {
    Vasanta,
    Grishma,
    Varsha,
    Sharad,
    Hemanta,
    Shishira,
}

/// All six ritus starting from Vasanta.
pub const ALL_RITUS: [Ritu; 6] = [
    Ritu::Vasanta,
    Ritu::Grishma,
    Ritu::Varsha,
    Ritu::Sharad,
    Ritu::Hemanta,
    Ritu::Shishira,
];

impl Ritu {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vasanta => "Vasanta",
            Self::Grishma => "Grishma",
            Self::Varsha => "Varsha",
            Self::Sharad => "Sharad",
            Self::Hemanta => "Hemanta",
            Self::Shishira => "Shishira",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Solar half-year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ayana {
    /// Sun from sidereal Makara (270°) to Karka (90°).
    Uttarayana,
    /// Sun from sidereal Karka (90°) to Makara (270°).
    Dakshinayana,
}

impl Ayana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uttarayana => "Uttarayana",
            Self::Dakshinayana => "Dakshinayana",
        }
    }
}

/// Ayana of a sidereal Sun longitude.
pub fn ayana_from_sidereal_longitude(sun_sidereal_deg: f64) -> Ayana {
    let lon = normalize_360(sun_sidereal_deg);
    if !(90.0..270.0).contains(&lon) {
        Ayana::Uttarayana
    } else {
        Ayana::Dakshinayana
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_month_names() {
        assert_eq!(masa_from_new_moon_rashis(11, 0), (Masa::Chaitra, false));
        assert_eq!(masa_from_new_moon_rashis(0, 1), (Masa::Vaishakha, false));
        assert_eq!(masa_from_new_moon_rashis(10, 11), (Masa::Phalguna, false));
    }

    #[test]
    fn adhika_takes_following_name() {
        // 2023: Sun in Karka at both new moons -> Adhika Shravana
        assert_eq!(masa_from_new_moon_rashis(3, 3), (Masa::Shravana, true));
        assert_eq!(masa_from_new_moon_rashis(11, 11), (Masa::Chaitra, true));
    }

    #[test]
    fn ritu_pairs() {
        assert_eq!(Masa::Chaitra.ritu(), Ritu::Vasanta);
        assert_eq!(Masa::Vaishakha.ritu(), Ritu::Vasanta);
        assert_eq!(Masa::Shravana.ritu(), Ritu::Varsha);
        assert_eq!(Masa::Phalguna.ritu(), Ritu::Shishira);
    }

    #[test]
    fn ayana_halves() {
        assert_eq!(ayana_from_sidereal_longitude(0.0), Ayana::Uttarayana);
        assert_eq!(ayana_from_sidereal_longitude(89.9), Ayana::Uttarayana);
        assert_eq!(ayana_from_sidereal_longitude(90.0), Ayana::Dakshinayana);
        assert_eq!(ayana_from_sidereal_longitude(269.9), Ayana::Dakshinayana);
        assert_eq!(ayana_from_sidereal_longitude(270.0), Ayana::Uttarayana);
    }
}
