//! Integer minor-unit currency arithmetic.
//!
//! All ledger math happens in whole minor units (cents, paise, ...) so
//! balances reconcile exactly. Conversion to a decimal display value
//! happens only at formatting boundaries.

use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;

/// An amount in minor currency units (e.g. cents)
pub type MinorUnits = i64;

/// Number of minor-unit digits in the display representation
const DISPLAY_SCALE: i64 = 2;

/// Divide `amount` into `shares` equal parts, assigning the division
/// remainder one minor unit at a time to the leading shares. The returned
/// shares always sum to `amount` exactly.
///
/// Callers must ensure `shares > 0`; the engine validates split sets
/// before splitting.
pub fn split_evenly(amount: MinorUnits, shares: usize) -> Vec<MinorUnits> {
    let count = shares as MinorUnits;
    let base = amount / count;
    let remainder = (amount % count) as usize;
    (0..shares)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

/// Convert minor units to a decimal value at display precision
pub fn to_decimal(amount: MinorUnits) -> BigDecimal {
    BigDecimal::new(BigInt::from(amount), DISPLAY_SCALE)
}

/// Format minor units as a plain decimal string, e.g. `4200` -> `"42.00"`
pub fn format_amount(amount: MinorUnits) -> String {
    to_decimal(amount).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_divides_evenly_when_possible() {
        assert_eq!(split_evenly(9000, 3), vec![3000, 3000, 3000]);
    }

    #[test]
    fn split_assigns_remainder_to_leading_shares() {
        assert_eq!(split_evenly(10000, 3), vec![3334, 3333, 3333]);
        assert_eq!(split_evenly(1001, 4), vec![251, 250, 250, 250]);
        assert_eq!(split_evenly(7, 5), vec![2, 2, 1, 1, 1]);
    }

    #[test]
    fn split_shares_always_sum_to_amount() {
        for amount in [1, 7, 99, 100, 12345, 10000] {
            for shares in 1..=8 {
                let parts = split_evenly(amount, shares);
                assert_eq!(parts.len(), shares);
                assert_eq!(parts.iter().sum::<MinorUnits>(), amount);
            }
        }
    }

    #[test]
    fn split_single_share_returns_full_amount() {
        assert_eq!(split_evenly(12345, 1), vec![12345]);
    }

    #[test]
    fn formats_minor_units_at_two_decimals() {
        assert_eq!(format_amount(4200), "42.00");
        assert_eq!(format_amount(5), "0.05");
        assert_eq!(format_amount(-3334), "-33.34");
    }
}
