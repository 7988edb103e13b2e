//! # Check Digit
//!
//! The 11th digit of a PESEL is derived from the first ten:
//!
//! ```text
//! sum   = Σ digit[i] * WEIGHTS[i]    for i in 0..10
//! check = (10 - sum mod 10) mod 10
//! ```
//!
//! Every weight is coprime with 10, so changing any single one of the
//! first ten digits always changes the expected check digit. Multi-digit
//! changes (some adjacent transpositions, for instance) can still collide.

/// Position weights for digits 0-9.
pub const WEIGHTS: [u8; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

/// Compute the check digit for the first ten digits of a PESEL.
///
/// Each input element must be a digit value in `0..=9`.
pub fn check_digit(digits: &[u8; 10]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(&d, &w)| u32::from(d) * u32::from(w))
        .sum();
    ((10 - sum % 10) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        // 4*1 + 4*3 + 0*7 + 5*9 + 1*1 + 4*3 + 0*7 + 1*9 + 4*1 + 5*3 = 102
        assert_eq!(check_digit(&[4, 4, 0, 5, 1, 4, 0, 1, 4, 5]), 8);
    }

    #[test]
    fn test_all_zero_gives_zero() {
        assert_eq!(check_digit(&[0; 10]), 0);
    }

    #[test]
    fn test_sum_multiple_of_ten_gives_zero() {
        // 0*1 + 2*3 + 2*7 + 5*9 + 0*1 + 5*3 + 1*7 + 2*9 + 3*1 + 4*3 = 120
        assert_eq!(check_digit(&[0, 2, 2, 5, 0, 5, 1, 2, 3, 4]), 0);
    }

    #[test]
    fn test_all_nines() {
        // 9 * (1+3+7+9+1+3+7+9+1+3) = 9 * 44 = 396
        assert_eq!(check_digit(&[9; 10]), 4);
    }

    #[test]
    fn test_single_digit_change_always_detected() {
        let base = [4, 4, 0, 5, 1, 4, 0, 1, 4, 5];
        let expected = check_digit(&base);
        for pos in 0..10 {
            for d in 0..=9u8 {
                if d == base[pos] {
                    continue;
                }
                let mut altered = base;
                altered[pos] = d;
                assert_ne!(
                    check_digit(&altered),
                    expected,
                    "change at position {pos} to {d} went undetected"
                );
            }
        }
    }

    #[test]
    fn test_result_is_a_digit() {
        for d in 0..=9u8 {
            assert!(check_digit(&[d; 10]) <= 9);
        }
    }
}
