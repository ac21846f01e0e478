//! Rate application on whole-Rupiah amounts.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Multiplies a Rupiah amount by a rate and rounds to the nearest Rupiah.
///
/// Halves round away from zero. The multiplication is exact decimal
/// arithmetic, so results never drift the way binary floating point can.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::apply_rate;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(apply_rate(6_000_000, dec!(0.0075)), 45_000);
/// assert_eq!(apply_rate(10_547_400, dec!(0.01)), 105_474);
/// assert_eq!(apply_rate(50, dec!(0.01)), 1); // 0.5 rounds up
/// ```
pub fn apply_rate(amount: i64, rate: Decimal) -> i64 {
    let product = (Decimal::from(amount) * rate)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    // Every rate in the engine is below 1, so the product is within i64 range.
    product.to_i64().unwrap_or(if product.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
