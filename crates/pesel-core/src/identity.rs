//! # PESEL Identity Number
//!
//! [`Pesel`] is a validated-format newtype over the 11 digits of a Polish
//! national identification number. The digit layout is:
//!
//! ```text
//!  Y Y M M D D Z Z Z S C
//!  0 1 2 3 4 5 6 7 8 9 10
//! ```
//!
//! - `YY` two-digit birth year, `MM` encoded month (see [`crate::century`]),
//!   `DD` day of month.
//! - `ZZZ` serial, `S` sex digit (even female, odd male).
//! - `C` check digit (see [`crate::checksum`]).
//!
//! ## Invariant
//!
//! A `Pesel` always holds exactly 11 digit values in `0..=9`. The format gate
//! runs once in [`Pesel::parse()`]; every accessor is infallible afterwards.
//! Checksum validity is *not* part of the invariant: a `Pesel` with a wrong
//! check digit is still a well-formed value and [`Pesel::is_valid()`]
//! reports `false`.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::century::Century;
use crate::checksum;
use crate::error::{FormatError, PeselError};

/// Number of digits in a PESEL.
pub const PESEL_LEN: usize = 11;

/// A format-validated PESEL number.
///
/// Serializes as its 11-digit string; deserialization runs the same format
/// gate as [`Pesel::parse()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pesel([u8; PESEL_LEN]);

/// Sex encoded by digit 9 of a PESEL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Even sex digit.
    #[serde(rename = "f")]
    Female,
    /// Odd sex digit.
    #[serde(rename = "m")]
    Male,
}

impl Gender {
    /// `"f"` or `"m"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "f",
            Self::Male => "m",
        }
    }

    fn from_digit(digit: u8) -> Self {
        if digit % 2 == 0 {
            Self::Female
        } else {
            Self::Male
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Pesel {
    /// Parse a PESEL from its textual form.
    ///
    /// The input must be exactly 11 characters, all ASCII digits. Signs,
    /// whitespace and separators are rejected. Leading zeros are
    /// significant and preserved.
    ///
    /// # Errors
    ///
    /// Returns [`PeselError::Format`] if the length is not 11 or any
    /// character is not `0`-`9`.
    pub fn parse(input: &str) -> Result<Self, PeselError> {
        let len = input.chars().count();
        if len != PESEL_LEN {
            return Err(FormatError::WrongLength { len }.into());
        }

        let mut digits = [0u8; PESEL_LEN];
        for (position, (slot, found)) in digits.iter_mut().zip(input.chars()).enumerate() {
            if !found.is_ascii_digit() {
                return Err(FormatError::NonDigit { position, found }.into());
            }
            *slot = found as u8 - b'0';
        }
        Ok(Self(digits))
    }

    /// Access the digit values.
    pub fn digits(&self) -> &[u8; PESEL_LEN] {
        &self.0
    }

    fn pair(&self, at: usize) -> u32 {
        u32::from(self.0[at]) * 10 + u32::from(self.0[at + 1])
    }

    /// Raw month field (positions 2-3), including the century offset.
    pub fn encoded_month(&self) -> u32 {
        self.pair(2)
    }

    /// Century bracket selected by the encoded month.
    pub fn century(&self) -> Century {
        Century::from_encoded_month(self.encoded_month())
    }

    /// Full four-digit birth year.
    pub fn year(&self) -> u32 {
        self.pair(0) + self.century().base_year()
    }

    /// Birth month with the century offset removed.
    ///
    /// No range check: a malformed month field is returned as decoded.
    pub fn month(&self) -> u32 {
        self.encoded_month() - self.century().month_offset()
    }

    /// Day of month (positions 4-5), returned as-is. `00` or `32` are not
    /// rejected; use [`Pesel::birth_date()`] for a calendar-checked date.
    pub fn day(&self) -> u32 {
        self.pair(4)
    }

    /// Same as [`Pesel::year()`].
    pub fn year_of_birth(&self) -> u32 {
        self.year()
    }

    /// The decoded birth date, or `None` if year/month/day is not a real
    /// calendar date.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        let year = i32::try_from(self.year()).ok()?;
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
    }

    /// Sex derived from digit 9.
    pub fn gender(&self) -> Gender {
        Gender::from_digit(self.0[9])
    }

    /// The check digit stored at position 10.
    pub fn check_digit(&self) -> u8 {
        self.0[10]
    }

    /// The check digit computed from positions 0-9.
    pub fn expected_check_digit(&self) -> u8 {
        let mut head = [0u8; 10];
        head.copy_from_slice(&self.0[..10]);
        checksum::check_digit(&head)
    }

    /// Whether the stored check digit matches the weighted sum.
    pub fn is_valid(&self) -> bool {
        self.expected_check_digit() == self.check_digit()
    }
}

impl std::fmt::Display for Pesel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for Pesel {
    type Err = PeselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Pesel {
    type Error = PeselError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Pesel {
    type Error = PeselError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Pesel> for String {
    fn from(p: Pesel) -> Self {
        p.to_string()
    }
}
