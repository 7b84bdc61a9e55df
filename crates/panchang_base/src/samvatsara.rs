//! Samvatsara: the 60-year cycle used to name the Telugu year.
//!
//! CE 1987 is Prabhava (order 1). A year begins at Chaitra Shukla
//! Pratipada, so dates before Ugadi belong to the previous samvatsara.

/// Reference epoch: CE 1987 = Prabhava.
pub const SAMVATSARA_EPOCH_YEAR: i32 = 1987;

const NAMES: [&str; 60] = [
    "Prabhava",
    "Vibhava",
    "Shukla",
    "Pramoduta",
    "Prajotpatti",
    "Angirasa",
    "Srimukha",
    "Bhava",
    "Yuva",
    "Dhatu",
    "Eswara",
    "Bahudhanya",
    "Pramadhi",
    "Vikrama",
    "Vrusha",
    "Chitrabhanu",
    "Swabhanu",
    "Tarana",
    "Parthiva",
    "Vyaya",
    "Sarvajit",
    "Sarvadhari",
    "Virodhi",
    "Vikruti",
    "Khara",
    "Nandana",
    "Vijaya",
    "Jaya",
    "Manmatha",
    "Durmukhi",
    "Hevalambi",
    "Vilambi",
    "Vikari",
    "Sharvari",
    "Plava",
    "Shubhakrut",
    "Shobhakrut",
    "Krodhi",
    "Vishvavasu",
    "Parabhava",
    "Plavanga",
    "Keelaka",
    "Saumya",
    "Sadharana",
    "Virodhikrut",
    "Paridhavi",
    "Pramadicha",
    "Ananda",
    "Rakshasa",
    "Nala",
    "Pingala",
    "Kalayukti",
    "Siddharthi",
    "Raudri",
    "Durmati",
    "Dundubhi",
    "Rudhirodgari",
    "Raktakshi",
    "Krodhana",
    "Akshaya",
];

/// A year of the 60-year cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Samvatsara {
    index: u8,
}

impl Samvatsara {
    /// Samvatsara at a 0-based cycle index; wraps modulo 60.
    pub const fn from_index(index: u8) -> Self {
        Self { index: index % 60 }
    }

    /// The samvatsara that begins in the given CE year.
    pub const fn from_year(ce_year: i32) -> Self {
        Self {
            index: (ce_year - SAMVATSARA_EPOCH_YEAR).rem_euclid(60) as u8,
        }
    }

    /// 0-based index (Prabhava = 0).
    pub const fn index(self) -> u8 {
        self.index
    }

    /// 1-based order in the cycle (1..60).
    pub const fn order(self) -> u8 {
        self.index + 1
    }

    pub const fn name(self) -> &'static str {
        NAMES[self.index as usize]
    }
}
