//! # Known PESEL Vectors
//!
//! Hardcoded codes with their expected decoded fields. Each vector was
//! worked out by hand from the digit layout and the weighted check digit
//! formula, so a regression in any accessor shows up here as a mismatch
//! against a literal value.

use pesel_core::{Century, FormatError, Gender, Pesel, PeselError};

struct Vector {
    code: &'static str,
    year: u32,
    month: u32,
    day: u32,
    gender: Gender,
    valid: bool,
}

const VECTORS: &[Vector] = &[
    // Weighted sum 102, check digit 8.
    Vector { code: "44051401458", year: 1944, month: 5, day: 14, gender: Gender::Male, valid: true },
    // Weighted sum 120, check digit 0.
    Vector { code: "02250512340", year: 2002, month: 5, day: 5, gender: Gender::Female, valid: true },
    // Weighted sum 0, check digit 0.
    Vector { code: "00000000000", year: 1900, month: 0, day: 0, gender: Gender::Female, valid: true },
    // Weighted sum 396, check digit 4; encoded month 99 falls in the 1800s.
    Vector { code: "99999999994", year: 1899, month: 19, day: 99, gender: Gender::Male, valid: true },
    // Same head, wrong check digit.
    Vector { code: "99999999990", year: 1899, month: 19, day: 99, gender: Gender::Male, valid: false },
    // Weighted sum 0*1+1*3+0*7+1*9+0*1+1*3+0*7+0*9+0*1+0*3 = 15, check digit 5.
    Vector { code: "01010100005", year: 1901, month: 1, day: 1, gender: Gender::Female, valid: true },
    Vector { code: "01010100001", year: 1901, month: 1, day: 1, gender: Gender::Female, valid: false },
];

#[test]
fn test_known_vectors() {
    for v in VECTORS {
        let p = Pesel::parse(v.code).unwrap_or_else(|e| panic!("{}: {e}", v.code));
        assert_eq!(p.year(), v.year, "year of {}", v.code);
        assert_eq!(p.year_of_birth(), v.year, "year_of_birth of {}", v.code);
        assert_eq!(p.month(), v.month, "month of {}", v.code);
        assert_eq!(p.day(), v.day, "day of {}", v.code);
        assert_eq!(p.gender(), v.gender, "gender of {}", v.code);
        assert_eq!(p.is_valid(), v.valid, "validity of {}", v.code);
        assert_eq!(p.to_string(), v.code);
    }
}

#[test]
fn test_century_brackets_across_the_table() {
    let cases = [
        ("85811500000", Century::C1800, 1885, 1),
        ("85121500000", Century::C1900, 1985, 12),
        ("85321500000", Century::C2000, 2085, 12),
        ("85521500000", Century::C2100, 2185, 12),
        ("85721500000", Century::C2200, 2285, 12),
    ];
    for (code, century, year, month) in cases {
        let p = Pesel::parse(code).unwrap();
        assert_eq!(p.century(), century, "{code}");
        assert_eq!(p.year(), year, "{code}");
        assert_eq!(p.month(), month, "{code}");
    }
}

#[test]
fn test_format_gate_rejections() {
    let rejected = [
        ("4405140145", FormatError::WrongLength { len: 10 }),
        ("1234567890a", FormatError::NonDigit { position: 10, found: 'a' }),
        ("4405 401458", FormatError::NonDigit { position: 4, found: ' ' }),
        ("-4405140145", FormatError::NonDigit { position: 0, found: '-' }),
    ];
    for (input, expected) in rejected {
        assert_eq!(Pesel::parse(input), Err(PeselError::Format(expected)), "{input:?}");
    }
}

#[test]
fn test_error_message_mentions_format() {
    let err = Pesel::parse("123").unwrap_err();
    assert!(err.to_string().contains("must be an 11-digit number"));
}

#[test]
fn test_pesel_in_json_document() {
    #[derive(serde::Deserialize)]
    struct Person {
        pesel: Pesel,
    }

    let person: Person = serde_json::from_str(r#"{"pesel": "44051401458"}"#).unwrap();
    assert_eq!(person.pesel.year(), 1944);

    assert!(serde_json::from_str::<Person>(r#"{"pesel": "4405140145"}"#).is_err());
}
