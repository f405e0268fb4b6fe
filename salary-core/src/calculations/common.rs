//! Common utility functions for salary calculations.
//!
//! The engine itself never rounds; [`round_half_up`] is provided for callers
//! that present results.

use rust_decimal::Decimal;

/// Applies a percentage rate to an amount: `amount * (rate / 100)`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(37500), dec!(7.15)), dec!(2681.25));
/// assert_eq!(percent_of(dec!(6000), dec!(30.25)), dec!(1815));
/// ```
pub fn percent_of(
    amount: Decimal,
    rate: Decimal,
) -> Decimal {
    amount * rate / Decimal::ONE_HUNDRED
}

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}
