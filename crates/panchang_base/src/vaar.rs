//! Vaar (weekday) and its planetary lord.

use crate::graha::Graha;

/// The seven weekdays starting from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

/// All weekdays (0 = Sunday).
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivara,
    Vaar::Somavara,
    Vaar::Mangalavara,
    Vaar::Budhavara,
    Vaar::Guruvara,
    Vaar::Shukravara,
    Vaar::Shanivara,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivara => "Ravivara",
            Self::Somavara => "Somavara",
            Self::Mangalavara => "Mangalavara",
            Self::Budhavara => "Budhavara",
            Self::Guruvara => "Guruvara",
            Self::Shukravara => "Shukravara",
            Self::Shanivara => "Shanivara",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivara => "Sunday",
            Self::Somavara => "Monday",
            Self::Mangalavara => "Tuesday",
            Self::Budhavara => "Wednesday",
            Self::Guruvara => "Thursday",
            Self::Shukravara => "Friday",
            Self::Shanivara => "Saturday",
        }
    }

    /// 0-based index (Sunday = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based weekday number (Sunday = 1 .. Saturday = 7).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Weekday from a 0-based index; wraps modulo 7.
    pub const fn from_index(index: u8) -> Self {
        ALL_VAARS[(index % 7) as usize]
    }

    /// The graha ruling the day.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Ravivara => Graha::Surya,
            Self::Somavara => Graha::Chandra,
            Self::Mangalavara => Graha::Mangal,
            Self::Budhavara => Graha::Buddh,
            Self::Guruvara => Graha::Guru,
            Self::Shukravara => Graha::Shukra,
            Self::Shanivara => Graha::Shani,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering() {
        assert_eq!(Vaar::Ravivara.number(), 1);
        assert_eq!(Vaar::Shanivara.number(), 7);
        assert_eq!(Vaar::from_index(9), Vaar::Mangalavara);
    }

    #[test]
    fn lords() {
        assert_eq!(Vaar::Somavara.lord(), Graha::Chandra);
        assert_eq!(Vaar::Shanivara.lord(), Graha::Shani);
    }
}
