//! # pesel-cli — PESEL Command-Line Interface
//!
//! A thin clap-based front end over `pesel-core`. Each invocation handles
//! exactly one code.
//!
//! ## Subcommands
//!
//! - `inspect` — Decode a code and print its fields (text or JSON)
//! - `check` — Verify the check digit, reporting through the exit status
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handlers delegate all decoding to `pesel-core`.

pub mod check;
pub mod inspect;
