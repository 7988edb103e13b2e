//! # pesel-core — PESEL Parsing and Validation
//!
//! Decodes a Polish national identification number (PESEL) into the fields
//! it carries: birth year, month and day, sex, and a weighted check digit.
//!
//! ```
//! use pesel_core::{Gender, Pesel};
//!
//! let pesel: Pesel = "44051401458".parse()?;
//! assert_eq!(pesel.year(), 1944);
//! assert_eq!(pesel.month(), 5);
//! assert_eq!(pesel.day(), 14);
//! assert_eq!(pesel.gender(), Gender::Male);
//! assert!(pesel.is_valid());
//! # Ok::<(), pesel_core::PeselError>(())
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Validate once, at construction.** [`Pesel::parse()`] is the only
//!    fallible operation. It rejects anything that is not exactly 11 ASCII
//!    digits and stores the digit values in a fixed array.
//!
//! 2. **Checksum is a query, not a gate.** A well-formed code with a wrong
//!    check digit is still a `Pesel`; [`Pesel::is_valid()`] says so.
//!
//! 3. **Accessors decode literally.** `month()` and `day()` are not range
//!    checked. [`Pesel::birth_date()`] is the calendar-checked view.
//!
//! ## Crate Policy
//!
//! - No I/O, no logging, no global state.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod century;
pub mod checksum;
pub mod error;
pub mod identity;

// Re-export primary types for ergonomic imports.
pub use century::Century;
pub use checksum::{check_digit, WEIGHTS};
pub use error::{FormatError, PeselError};
pub use identity::{Gender, Pesel, PESEL_LEN};
