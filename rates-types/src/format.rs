//! Number formatting for user-facing replies.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount or rate for display.
///
/// Values of magnitude one or more keep 2 fractional digits, smaller values
/// keep 6. Ties round away from zero, trailing zeros and a dangling decimal
/// point are dropped.
pub fn format_amount(value: Decimal) -> String {
    let places = if value.abs() >= Decimal::ONE { 2 } else { 6 };
    value
        .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_half_up_at_two_places() {
        assert_eq!(format_amount(dec!(3.005)), "3.01");
        assert_eq!(format_amount(dec!(3.004)), "3");
    }

    #[test]
    fn test_six_places_below_one() {
        assert_eq!(format_amount(dec!(0.1234567)), "0.123457");
        assert_eq!(format_amount(dec!(0.5)), "0.5");
    }

    #[test]
    fn test_trailing_zeros_stripped() {
        assert_eq!(format_amount(dec!(5.00)), "5");
        assert_eq!(format_amount(dec!(120)), "120");
        assert_eq!(format_amount(dec!(2.50)), "2.5");
        assert_eq!(format_amount(dec!(0.0000001)), "0");
    }

    #[test]
    fn test_negative_values_use_magnitude() {
        assert_eq!(format_amount(dec!(-3.005)), "-3.01");
        assert_eq!(format_amount(dec!(-0.1234567)), "-0.123457");
        assert_eq!(format_amount(dec!(-0.0000001)), "0");
    }
}
