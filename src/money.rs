//! Conversion between decimal currency strings and integer minor units.
//!
//! The payment processor's charge API requires amounts as an integer count
//! of the smallest currency unit (cents), while the accounting platform
//! works with decimal strings. This module converts between the two
//! representations without ever going through floating point.

use rust_decimal::Decimal;

use crate::error::{BillingError, BillingResult};

/// Converts a decimal currency string to integer minor units (cents).
///
/// The input must consist of a whole part followed by a decimal point and
/// exactly two fraction digits (e.g., `"1500.00"`). Anything else — a
/// missing fraction, one or three fraction digits, signs, or non-digit
/// characters — is rejected with [`BillingError::InvalidAmount`]. Inputs
/// like `"10.5"` would otherwise be silently misconverted, so the stricter
/// policy is deliberate.
///
/// # Example
///
/// ```
/// use invoice_gateway::money::to_minor_units;
///
/// assert_eq!(to_minor_units("1500.00").unwrap(), 150000);
/// assert_eq!(to_minor_units("0.05").unwrap(), 5);
/// assert!(to_minor_units("10.5").is_err());
/// ```
pub fn to_minor_units(input: &str) -> BillingResult<u64> {
    let invalid = |message: &str| BillingError::InvalidAmount {
        input: input.to_string(),
        message: message.to_string(),
    };

    let (whole, fraction) = input
        .split_once('.')
        .ok_or_else(|| invalid("expected a decimal point"))?;

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("whole part must be one or more digits"));
    }
    if fraction.len() != 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("fractional part must have exactly two digits"));
    }

    let whole: u64 = whole
        .parse()
        .map_err(|_| invalid("whole part is too large"))?;
    let cents: u64 = fraction
        .parse()
        .map_err(|_| invalid("fractional part is not a number"))?;

    whole
        .checked_mul(100)
        .and_then(|w| w.checked_add(cents))
        .ok_or_else(|| invalid("amount is too large"))
}

/// Renders integer minor units as a decimal currency string.
///
/// Always produces exactly two zero-padded fraction digits; this is the
/// inverse of [`to_minor_units`] for well-formed input.
///
/// # Example
///
/// ```
/// use invoice_gateway::money::to_decimal_string;
///
/// assert_eq!(to_decimal_string(150005), "1500.05");
/// assert_eq!(to_decimal_string(5), "0.05");
/// ```
pub fn to_decimal_string(minor_units: u64) -> String {
    format!("{}.{:02}", minor_units / 100, minor_units % 100)
}

/// Renders a [`Decimal`] balance with exactly two fraction digits.
///
/// Used when presenting a platform-supplied balance to the payment form
/// and the hosted widget, so the amount that comes back on submission is
/// in the canonical shape [`to_minor_units`] accepts.
pub fn decimal_to_string(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_converts_whole_and_cents() {
        assert_eq!(to_minor_units("1500.00").unwrap(), 150000);
        assert_eq!(to_minor_units("150.00").unwrap(), 15000);
        assert_eq!(to_minor_units("0.99").unwrap(), 99);
        assert_eq!(to_minor_units("0.00").unwrap(), 0);
    }

    #[test]
    fn test_rejects_missing_fraction() {
        assert!(to_minor_units("1500").is_err());
        assert!(to_minor_units("1500.").is_err());
    }

    #[test]
    fn test_rejects_wrong_fraction_width() {
        assert!(to_minor_units("10.5").is_err());
        assert!(to_minor_units("10.500").is_err());
    }

    #[test]
    fn test_rejects_signs_and_garbage() {
        assert!(to_minor_units("-10.00").is_err());
        assert!(to_minor_units("+10.00").is_err());
        assert!(to_minor_units(".50").is_err());
        assert!(to_minor_units("ten.00").is_err());
        assert!(to_minor_units("10.0x").is_err());
        assert!(to_minor_units("").is_err());
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(to_minor_units("99999999999999999999.00").is_err());
    }

    #[test]
    fn test_renders_zero_padded_cents() {
        assert_eq!(to_decimal_string(150005), "1500.05");
        assert_eq!(to_decimal_string(150000), "1500.00");
        assert_eq!(to_decimal_string(7), "0.07");
        assert_eq!(to_decimal_string(0), "0.00");
    }

    #[test]
    fn test_decimal_to_string_two_digits() {
        let balance = Decimal::from_str("150").unwrap();
        assert_eq!(decimal_to_string(balance), "150.00");

        let balance = Decimal::from_str("99.9").unwrap();
        assert_eq!(decimal_to_string(balance), "99.90");
    }

    proptest! {
        // Round-trip: any well-formed two-decimal string survives the
        // conversion to minor units and back unchanged.
        #[test]
        fn prop_round_trip(whole in 0u64..1_000_000_000, cents in 0u8..100) {
            let input = format!("{}.{:02}", whole, cents);
            let minor = to_minor_units(&input).unwrap();
            prop_assert_eq!(to_decimal_string(minor), input);
        }

        #[test]
        fn prop_minor_units_match_arithmetic(whole in 0u64..1_000_000_000, cents in 0u8..100) {
            let input = format!("{}.{:02}", whole, cents);
            prop_assert_eq!(to_minor_units(&input).unwrap(), whole * 100 + u64::from(cents));
        }
    }
}
