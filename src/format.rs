//! Indonesian display formatting for Rupiah amounts and rates.
//!
//! Output follows the `id-ID` locale conventions: `.` as the thousands
//! separator, no decimal places for Rupiah, and a non-breaking space between
//! the currency symbol and the amount.

use rust_decimal::Decimal;

/// Currency symbol prefix, including the non-breaking space.
pub const RUPIAH_PREFIX: &str = "Rp\u{a0}";

/// Formats an amount with `.` thousands separators.
///
/// # Examples
///
/// ```
/// use payroll_engine::format::format_number;
///
/// assert_eq!(format_number(15_500_000), "15.500.000");
/// assert_eq!(format_number(-1_000), "-1.000");
/// assert_eq!(format_number(999), "999");
/// ```
pub fn format_number(amount: i64) -> String {
    let grouped = group_thousands(amount.unsigned_abs());
    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a Rupiah amount for display.
///
/// # Examples
///
/// ```
/// use payroll_engine::format::format_rupiah;
///
/// assert_eq!(format_rupiah(1_000_000), "Rp\u{a0}1.000.000");
/// assert_eq!(format_rupiah(-250_000), "-Rp\u{a0}250.000");
/// ```
pub fn format_rupiah(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{}{}", sign, RUPIAH_PREFIX, group_thousands(amount.unsigned_abs()))
}

/// Formats a fractional rate as a percentage, e.g. `0.0075` as `"0.75%"`.
pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(1_000), "1.000");
        assert_eq!(format_number(100_000), "100.000");
        assert_eq!(format_number(1_234_567_890), "1.234.567.890");
    }

    #[test]
    fn test_format_number_handles_extremes() {
        assert_eq!(format_number(i64::MIN), "-9.223.372.036.854.775.808");
        assert_eq!(format_number(i64::MAX), "9.223.372.036.854.775.807");
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0), "Rp\u{a0}0");
        assert_eq!(format_rupiah(15_500_000), "Rp\u{a0}15.500.000");
        assert!(format_rupiah(1_000_000).contains("1.000.000"));
    }

    #[test]
    fn test_format_rupiah_negative_puts_sign_before_symbol() {
        assert_eq!(format_rupiah(-1_500), "-Rp\u{a0}1.500");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(0.0075)), "0.75%");
        assert_eq!(format_percent(dec!(0.037)), "3.7%");
        assert_eq!(format_percent(dec!(0.13)), "13%");
        assert_eq!(format_percent(Decimal::ZERO), "0%");
    }
}
