//! BPJS Kesehatan (national health insurance) contribution.
//!
//! The contribution base is the gross salary capped at [`BPJS_KESEHATAN_SALARY_CAP`].
//! The employee pays 1% of the base and the employer 4%.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::rounding::apply_rate;
use crate::format::{format_percent, format_rupiah};
use crate::models::{AuditStep, ContributionSplit};

/// Monthly salary ceiling for the Kesehatan contribution base.
pub const BPJS_KESEHATAN_SALARY_CAP: i64 = 12_000_000;

/// Employee share of the contribution base.
pub const BPJS_KESEHATAN_EMPLOYEE_RATE: Decimal = dec!(0.01);

/// Employer share of the contribution base.
pub const BPJS_KESEHATAN_EMPLOYER_RATE: Decimal = dec!(0.04);

const REGULATION: &str = "Perpres 82/2018 jo. Perpres 64/2020";

/// Calculates the BPJS Kesehatan contribution for a monthly gross salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_bpjs_kesehatan;
///
/// let capped = calculate_bpjs_kesehatan(20_000_000);
/// assert_eq!(capped.employee, 120_000);
/// assert_eq!(capped.employer, 480_000);
///
/// let below = calculate_bpjs_kesehatan(10_000_000);
/// assert_eq!(below.employee, 100_000);
/// assert_eq!(below.employer, 400_000);
/// ```
pub fn calculate_bpjs_kesehatan(gross_salary: i64) -> ContributionSplit {
    let base = gross_salary.min(BPJS_KESEHATAN_SALARY_CAP);
    ContributionSplit {
        employee: apply_rate(base, BPJS_KESEHATAN_EMPLOYEE_RATE),
        employer: apply_rate(base, BPJS_KESEHATAN_EMPLOYER_RATE),
    }
}

pub(crate) fn bpjs_kesehatan_audit_step(
    gross_salary: i64,
    split: ContributionSplit,
    step_number: u32,
) -> AuditStep {
    let base = gross_salary.min(BPJS_KESEHATAN_SALARY_CAP);
    let capped = gross_salary > BPJS_KESEHATAN_SALARY_CAP;

    AuditStep {
        step_number,
        rule_id: "bpjs_kesehatan".to_string(),
        rule_name: "BPJS Kesehatan".to_string(),
        regulation_ref: REGULATION.to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary,
            "salary_cap": BPJS_KESEHATAN_SALARY_CAP,
            "contribution_base": base
        }),
        output: serde_json::json!({
            "employee": split.employee,
            "employer": split.employer,
            "total": split.total()
        }),
        reasoning: format!(
            "Base {}{}: employee {} = {}, employer {} = {}",
            format_rupiah(base),
            if capped { " (capped)" } else { "" },
            format_percent(BPJS_KESEHATAN_EMPLOYEE_RATE),
            format_rupiah(split.employee),
            format_percent(BPJS_KESEHATAN_EMPLOYER_RATE),
            format_rupiah(split.employer)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// KES-001: above cap
    #[test]
    fn test_cap_applies_above_threshold() {
        let split = calculate_bpjs_kesehatan(20_000_000);
        assert_eq!(split.employee, 120_000);
        assert_eq!(split.employer, 480_000);
        assert_eq!(split.total(), 600_000);
    }

    /// KES-002: exactly at cap
    #[test]
    fn test_exact_cap_boundary() {
        let split = calculate_bpjs_kesehatan(12_000_000);
        assert_eq!(split.employee, 120_000);
        assert_eq!(split.employer, 480_000);
    }

    /// KES-003: below cap
    #[test]
    fn test_below_cap_uses_gross() {
        let split = calculate_bpjs_kesehatan(10_000_000);
        assert_eq!(split.employee, 100_000);
        assert_eq!(split.employer, 400_000);
    }

    #[test]
    fn test_one_rupiah_over_cap_is_capped() {
        assert_eq!(
            calculate_bpjs_kesehatan(12_000_001),
            calculate_bpjs_kesehatan(12_000_000)
        );
    }

    #[test]
    fn test_shares_rounded_independently() {
        // 4,567,850 * 1% = 45,678.5 and * 4% = 182,714
        let split = calculate_bpjs_kesehatan(4_567_850);
        assert_eq!(split.employee, 45_679);
        assert_eq!(split.employer, 182_714);
    }

    #[test]
    fn test_zero_gross() {
        assert_eq!(calculate_bpjs_kesehatan(0), ContributionSplit::default());
    }

    #[test]
    fn test_audit_step_marks_capped_base() {
        let split = calculate_bpjs_kesehatan(20_000_000);
        let step = bpjs_kesehatan_audit_step(20_000_000, split, 4);
        assert_eq!(step.rule_id, "bpjs_kesehatan");
        assert_eq!(step.input["contribution_base"], 12_000_000);
        assert_eq!(step.output["total"], 600_000);
        assert!(step.reasoning.contains("(capped)"));
    }
}
