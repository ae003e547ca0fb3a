//! Common utility functions for payroll calculations.
//!
//! This module provides shared functionality used across the income tax,
//! professional tax and ledger calculations, including rounding to whole
//! currency units and other common operations.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Rounds a decimal value to a whole currency unit using half-up rounding.
///
/// The midpoint is always moved toward positive infinity, so `2.5` becomes
/// `3` and `-2.5` becomes `-2`. Slip amounts are whole numbers, which is why
/// no fractional places are kept.
///
/// # Arguments
///
/// * `value` - The decimal value to round
///
/// # Returns
///
/// The value rounded to zero decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payslip_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1083.33)), dec!(1083));
/// assert_eq!(round_half_up(dec!(1082.5)), dec!(1083));
/// assert_eq!(round_half_up(dec!(-1000)), dec!(-1000));
/// assert_eq!(round_half_up(dec!(-2.5)), dec!(-2)); // Toward +infinity
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    (value + dec!(0.5)).floor()
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payslip_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100), dec!(200)), dec!(200));
/// assert_eq!(max(dec!(-100), dec!(-200)), dec!(-100));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}
