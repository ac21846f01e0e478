//! Take-home pay.

use crate::models::CalculatedDeductions;

/// Calculates net salary as gross salary minus every employee-side deduction.
///
/// Employer contributions never reduce take-home pay. The result is not
/// clamped and can be negative when deductions exceed gross salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_all_deductions, calculate_net_salary};
/// use payroll_engine::models::{DeductionsConfig, Earnings, PtkpStatus};
///
/// let earnings = Earnings::with_basic_salary(15_000_000);
/// let deductions = calculate_all_deductions(&earnings, &DeductionsConfig::default(), PtkpStatus::K1);
/// assert_eq!(calculate_net_salary(15_000_000, &deductions), 13_799_526);
/// ```
pub fn calculate_net_salary(gross_salary: i64, deductions: &CalculatedDeductions) -> i64 {
    gross_salary - deductions.total_employee_deductions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtracts_employee_total_only() {
        let deductions = CalculatedDeductions {
            total_employee_deductions: 1_000_000,
            total_employer_contributions: 5_000_000,
            ..CalculatedDeductions::default()
        };
        assert_eq!(calculate_net_salary(10_000_000, &deductions), 9_000_000);
    }

    #[test]
    fn test_negative_net_is_not_clamped() {
        let deductions = CalculatedDeductions {
            total_employee_deductions: 3_000_000,
            ..CalculatedDeductions::default()
        };
        assert_eq!(calculate_net_salary(2_000_000, &deductions), -1_000_000);
    }
}
