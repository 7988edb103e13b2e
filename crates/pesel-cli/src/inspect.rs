//! # Inspect Subcommand
//!
//! Decodes one PESEL and prints everything it carries.

use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;
use pesel_core::{Gender, Pesel};
use serde::Serialize;

/// Arguments for the inspect subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// The 11-digit PESEL to decode.
    pub pesel: String,

    /// Print a JSON object instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Decoded fields of a single PESEL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeselReport {
    pub pesel: Pesel,
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub gender: Gender,
    pub valid: bool,
    /// `None` when year/month/day is not a real calendar date.
    pub birth_date: Option<NaiveDate>,
}

impl PeselReport {
    pub fn new(pesel: Pesel) -> Self {
        Self {
            pesel,
            year: pesel.year(),
            month: pesel.month(),
            day: pesel.day(),
            gender: pesel.gender(),
            valid: pesel.is_valid(),
            birth_date: pesel.birth_date(),
        }
    }

    /// Human-readable multi-line rendering.
    pub fn to_text(&self) -> String {
        let birth_date = match self.birth_date {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => "invalid date".to_string(),
        };
        format!(
            "pesel:      {}\nyear:       {}\nmonth:      {}\nday:        {}\ngender:     {}\nvalid:      {}\nbirth date: {}",
            self.pesel, self.year, self.month, self.day, self.gender, self.valid, birth_date
        )
    }
}

/// Parse the input and build its report.
pub fn build_report(input: &str) -> anyhow::Result<PeselReport> {
    let pesel = Pesel::parse(input).with_context(|| format!("cannot decode {input:?}"))?;
    let report = PeselReport::new(pesel);
    tracing::debug!(
        pesel = %report.pesel,
        year = report.year,
        month = report.month,
        day = report.day,
        gender = %report.gender,
        valid = report.valid,
        "decoded PESEL"
    );
    if !report.valid {
        tracing::warn!(
            pesel = %report.pesel,
            expected = pesel.expected_check_digit(),
            found = pesel.check_digit(),
            "check digit mismatch"
        );
    }
    Ok(report)
}

/// Render the report in the requested format.
pub fn render(report: &PeselReport, json: bool) -> anyhow::Result<String> {
    if json {
        serde_json::to_string_pretty(report).context("failed to serialize report")
    } else {
        Ok(report.to_text())
    }
}

/// Handler for `pesel inspect`.
pub fn run(args: &InspectArgs) -> anyhow::Result<()> {
    let report = build_report(&args.pesel)?;
    println!("{}", render(&report, args.json)?);
    Ok(())
}
