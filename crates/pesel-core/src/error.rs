//! # Error Types
//!
//! The only failure in this crate happens at construction time, when the
//! input is not an 11-digit number. Every accessor on a constructed
//! [`Pesel`](crate::Pesel) is infallible, and a checksum mismatch is an
//! ordinary `false` from [`Pesel::is_valid()`](crate::Pesel::is_valid), not
//! an error.

use thiserror::Error;

/// Top-level error type for PESEL handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeselError {
    /// The input is not an 11-digit number.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// The input string failed the format gate.
///
/// Both variants render a message stating that a PESEL must be an
/// 11-digit number, followed by what was actually wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Input length (in characters) was not 11.
    #[error("PESEL must be an 11-digit number, got {len} characters")]
    WrongLength {
        /// Number of characters in the rejected input.
        len: usize,
    },

    /// A character outside `0`-`9` was found.
    #[error("PESEL must be an 11-digit number, found {found:?} at position {position}")]
    NonDigit {
        /// Zero-based character position of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },
}
