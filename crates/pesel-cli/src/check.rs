//! # Check Subcommand
//!
//! Verifies a PESEL's check digit. The result is carried by the exit
//! status so the command composes in shell pipelines.

use anyhow::Context;
use clap::Args;
use pesel_core::Pesel;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// The 11-digit PESEL to check.
    pub pesel: String,

    /// Print nothing; rely on the exit status.
    #[arg(long, short)]
    pub quiet: bool,
}

/// Parse the input and report whether its check digit holds.
pub fn check(input: &str) -> anyhow::Result<bool> {
    let pesel = Pesel::parse(input).with_context(|| format!("cannot check {input:?}"))?;
    let valid = pesel.is_valid();
    tracing::debug!(
        pesel = %pesel,
        expected = pesel.expected_check_digit(),
        found = pesel.check_digit(),
        valid,
        "checked PESEL"
    );
    Ok(valid)
}

/// The line printed on stdout for a verdict, or `None` in quiet mode.
pub fn verdict_line(valid: bool, quiet: bool) -> Option<&'static str> {
    match (quiet, valid) {
        (true, _) => None,
        (false, true) => Some("valid"),
        (false, false) => Some("invalid"),
    }
}

/// Handler for `pesel check`.
///
/// Returns the verdict; the caller maps `false` to a non-zero exit status.
/// A format error is the only `Err`.
pub fn run(args: &CheckArgs) -> anyhow::Result<bool> {
    let valid = check(&args.pesel)?;
    if let Some(line) = verdict_line(valid, args.quiet) {
        println!("{line}");
    }
    Ok(valid)
}
