//! # Century Brackets
//!
//! A PESEL has only two digits for the birth year. The century is folded
//! into the month field (positions 2-3) by adding a fixed offset to the
//! real month:
//!
//! | Encoded month | Century | Offset |
//! |---------------|---------|--------|
//! | 81-92         | 1800    | 80     |
//! | 61-72         | 2200    | 60     |
//! | 41-52         | 2100    | 40     |
//! | 21-32         | 2000    | 20     |
//! | 1-12          | 1900    | 0      |
//!
//! ## Boundary behavior
//!
//! Brackets are selected with a strict `>` cascade against 80, 60, 40 and
//! 20. An encoded value sitting exactly on a threshold therefore lands in
//! the next lower bracket: encoded `80` decodes as month 20 of the 2200s,
//! not month 0 of the 1800s. Consumers depend on this, so it must stay
//! strict.

use serde::{Deserialize, Serialize};

/// The century bracket selected by a PESEL's encoded month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Century {
    /// Born 1800-1899. Encoded month = month + 80.
    #[serde(rename = "1800")]
    C1800,
    /// Born 1900-1999. Encoded month = month.
    #[serde(rename = "1900")]
    C1900,
    /// Born 2000-2099. Encoded month = month + 20.
    #[serde(rename = "2000")]
    C2000,
    /// Born 2100-2199. Encoded month = month + 40.
    #[serde(rename = "2100")]
    C2100,
    /// Born 2200-2299. Encoded month = month + 60.
    #[serde(rename = "2200")]
    C2200,
}

impl Century {
    /// Returns all brackets in chronological order.
    pub fn all() -> &'static [Century] {
        &[Self::C1800, Self::C1900, Self::C2000, Self::C2100, Self::C2200]
    }

    /// Select the bracket for a raw encoded month value.
    ///
    /// Values outside the documented ranges still go through the cascade
    /// (e.g. `99` selects the 1800s); no range check is made here.
    pub fn from_encoded_month(encoded: u32) -> Self {
        if encoded > 80 {
            Self::C1800
        } else if encoded > 60 {
            Self::C2200
        } else if encoded > 40 {
            Self::C2100
        } else if encoded > 20 {
            Self::C2000
        } else {
            Self::C1900
        }
    }

    /// The year added to the two-digit base year.
    pub fn base_year(&self) -> u32 {
        match self {
            Self::C1800 => 1800,
            Self::C1900 => 1900,
            Self::C2000 => 2000,
            Self::C2100 => 2100,
            Self::C2200 => 2200,
        }
    }

    /// The amount added to the real month when encoding.
    pub fn month_offset(&self) -> u32 {
        match self {
            Self::C1800 => 80,
            Self::C1900 => 0,
            Self::C2000 => 20,
            Self::C2100 => 40,
            Self::C2200 => 60,
        }
    }

    /// Decode an encoded month into `(full_year, month)` given the base year.
    pub fn decode(base_year: u32, encoded_month: u32) -> (u32, u32) {
        let century = Self::from_encoded_month(encoded_month);
        (
            base_year + century.base_year(),
            encoded_month - century.month_offset(),
        )
    }
}

impl std::fmt::Display for Century {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s", self.base_year())
    }
}
