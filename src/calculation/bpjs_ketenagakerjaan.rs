//! BPJS Ketenagakerjaan (employment insurance) contributions.
//!
//! Four independent programs make up the family:
//!
//! | Program | Paid by | Rate | Cap |
//! |---------|---------|------|-----|
//! | JKK (work accident) | employer | 0.24%..1.74% by risk level | none |
//! | JKM (death) | employer | 0.30% | none |
//! | JHT (old age) | split | 2% + 3.7% | none |
//! | JP (pension) | split | 1% + 2% | [`JP_SALARY_CAP`] |
//!
//! Each program rounds its own shares; nothing is rounded at the family level.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::rounding::apply_rate;
use crate::format::{format_percent, format_rupiah};
use crate::models::{AuditStep, ContributionSplit, JkkRiskLevel};

/// JKM employer rate.
pub const JKM_RATE: Decimal = dec!(0.003);

/// JHT employee rate.
pub const JHT_EMPLOYEE_RATE: Decimal = dec!(0.02);

/// JHT employer rate.
pub const JHT_EMPLOYER_RATE: Decimal = dec!(0.037);

/// Monthly salary ceiling for the JP contribution base.
pub const JP_SALARY_CAP: i64 = 10_547_400;

/// JP employee rate.
pub const JP_EMPLOYEE_RATE: Decimal = dec!(0.01);

/// JP employer rate.
pub const JP_EMPLOYER_RATE: Decimal = dec!(0.02);

/// Calculates the employer-paid JKK contribution.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_jkk;
/// use payroll_engine::models::JkkRiskLevel;
///
/// assert_eq!(calculate_jkk(10_000_000, JkkRiskLevel::Low), 54_000);
/// assert_eq!(calculate_jkk(10_000_000, JkkRiskLevel::VeryHigh), 174_000);
/// ```
pub fn calculate_jkk(gross_salary: i64, risk_level: JkkRiskLevel) -> i64 {
    apply_rate(gross_salary, risk_level.rate())
}

/// Calculates the employer-paid JKM contribution.
pub fn calculate_jkm(gross_salary: i64) -> i64 {
    apply_rate(gross_salary, JKM_RATE)
}

/// Calculates the JHT contribution. JHT has no salary cap.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_jht;
///
/// let jht = calculate_jht(50_000_000);
/// assert_eq!(jht.employee, 1_000_000);
/// assert_eq!(jht.employer, 1_850_000);
/// ```
pub fn calculate_jht(gross_salary: i64) -> ContributionSplit {
    ContributionSplit {
        employee: apply_rate(gross_salary, JHT_EMPLOYEE_RATE),
        employer: apply_rate(gross_salary, JHT_EMPLOYER_RATE),
    }
}

/// Calculates the JP contribution on the gross salary capped at [`JP_SALARY_CAP`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_jp;
///
/// let capped = calculate_jp(15_000_000);
/// assert_eq!(capped.employee, 105_474);
/// assert_eq!(capped.employer, 210_948);
/// ```
pub fn calculate_jp(gross_salary: i64) -> ContributionSplit {
    let base = gross_salary.min(JP_SALARY_CAP);
    ContributionSplit {
        employee: apply_rate(base, JP_EMPLOYEE_RATE),
        employer: apply_rate(base, JP_EMPLOYER_RATE),
    }
}

pub(crate) fn jkk_audit_step(
    gross_salary: i64,
    risk_level: JkkRiskLevel,
    jkk: i64,
    step_number: u32,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "bpjs_jkk".to_string(),
        rule_name: "BPJS JKK".to_string(),
        regulation_ref: "PP 44/2015".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary,
            "risk_level": risk_level.as_str()
        }),
        output: serde_json::json!({ "employer": jkk }),
        reasoning: format!(
            "{} risk: {} x {} = {}",
            risk_level,
            format_rupiah(gross_salary),
            format_percent(risk_level.rate()),
            format_rupiah(jkk)
        ),
    }
}

pub(crate) fn jkm_audit_step(gross_salary: i64, jkm: i64, step_number: u32) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "bpjs_jkm".to_string(),
        rule_name: "BPJS JKM".to_string(),
        regulation_ref: "PP 44/2015".to_string(),
        input: serde_json::json!({ "gross_salary": gross_salary }),
        output: serde_json::json!({ "employer": jkm }),
        reasoning: format!(
            "{} x {} = {}",
            format_rupiah(gross_salary),
            format_percent(JKM_RATE),
            format_rupiah(jkm)
        ),
    }
}

pub(crate) fn jht_audit_step(
    gross_salary: i64,
    split: ContributionSplit,
    step_number: u32,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "bpjs_jht".to_string(),
        rule_name: "BPJS JHT".to_string(),
        regulation_ref: "PP 46/2015".to_string(),
        input: serde_json::json!({ "gross_salary": gross_salary }),
        output: serde_json::json!({
            "employee": split.employee,
            "employer": split.employer,
            "total": split.total()
        }),
        reasoning: format!(
            "Uncapped: employee {} = {}, employer {} = {}",
            format_percent(JHT_EMPLOYEE_RATE),
            format_rupiah(split.employee),
            format_percent(JHT_EMPLOYER_RATE),
            format_rupiah(split.employer)
        ),
    }
}

pub(crate) fn jp_audit_step(
    gross_salary: i64,
    split: ContributionSplit,
    step_number: u32,
) -> AuditStep {
    let base = gross_salary.min(JP_SALARY_CAP);
    let capped = gross_salary > JP_SALARY_CAP;

    AuditStep {
        step_number,
        rule_id: "bpjs_jp".to_string(),
        rule_name: "BPJS JP".to_string(),
        regulation_ref: "PP 45/2015".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary,
            "salary_cap": JP_SALARY_CAP,
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
            format_percent(JP_EMPLOYEE_RATE),
            format_rupiah(split.employee),
            format_percent(JP_EMPLOYER_RATE),
            format_rupiah(split.employer)
        ),
    }
}
