//! Deduction aggregation.
//!
//! Runs every rule for one employee and month in a fixed order: gross salary,
//! TER category, PPh 21, BPJS Kesehatan, then the four BPJS Ketenagakerjaan
//! programs, then custom deductions. PPh 21 is always computed; each BPJS
//! family is gated as a unit by its toggle in [`DeductionsConfig`].

use serde::Serialize;
use tracing::debug;

use super::bpjs_kesehatan::{bpjs_kesehatan_audit_step, calculate_bpjs_kesehatan};
use super::bpjs_ketenagakerjaan::{
    calculate_jht, calculate_jkk, calculate_jkm, calculate_jp, jht_audit_step, jkk_audit_step,
    jkm_audit_step, jp_audit_step,
};
use super::gross_salary::{calculate_gross_salary, gross_salary_audit_step};
use super::pph21::{calculate_pph21_ter, pph21_audit_step};
use super::ter_category::{category_audit_step, resolve_category};
use crate::format::format_rupiah;
use crate::models::{
    AuditStep, CalculatedDeductions, ContributionSplit, DeductionsConfig, Earnings, PtkpStatus,
};

/// The outcome of a deductions run together with its audit steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionsCalculation {
    /// Gross salary the deductions were computed from.
    pub gross_salary: i64,
    /// The calculated deductions.
    pub deductions: CalculatedDeductions,
    /// One step per rule, in evaluation order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates every deduction and records an audit step for each rule.
///
/// A disabled BPJS family records a single step stating it was skipped, and
/// all of its fields stay zero.
pub fn calculate_deductions_with_audit(
    earnings: &Earnings,
    config: &DeductionsConfig,
    status: PtkpStatus,
) -> DeductionsCalculation {
    let mut steps = Vec::new();
    let mut step_number: u32 = 1;
    let mut next_step = || {
        let current = step_number;
        step_number += 1;
        current
    };

    let gross_salary = calculate_gross_salary(earnings);
    steps.push(gross_salary_audit_step(earnings, gross_salary, next_step()));
    steps.push(category_audit_step(status, next_step()));

    let pph21 = calculate_pph21_ter(gross_salary, status);
    steps.push(pph21_audit_step(gross_salary, status, pph21, next_step()));

    let kesehatan = if config.include_bpjs_kesehatan {
        let split = calculate_bpjs_kesehatan(gross_salary);
        steps.push(bpjs_kesehatan_audit_step(gross_salary, split, next_step()));
        split
    } else {
        steps.push(skipped_step(
            "bpjs_kesehatan",
            "BPJS Kesehatan",
            "includeBpjsKesehatan",
            next_step(),
        ));
        ContributionSplit::default()
    };

    let (jkk, jkm, jht, jp) = if config.include_bpjs_ketenagakerjaan {
        let jkk = calculate_jkk(gross_salary, config.jkk_risk_level);
        steps.push(jkk_audit_step(gross_salary, config.jkk_risk_level, jkk, next_step()));

        let jkm = calculate_jkm(gross_salary);
        steps.push(jkm_audit_step(gross_salary, jkm, next_step()));

        let jht = calculate_jht(gross_salary);
        steps.push(jht_audit_step(gross_salary, jht, next_step()));

        let jp = calculate_jp(gross_salary);
        steps.push(jp_audit_step(gross_salary, jp, next_step()));

        (jkk, jkm, jht, jp)
    } else {
        steps.push(skipped_step(
            "bpjs_ketenagakerjaan",
            "BPJS Ketenagakerjaan",
            "includeBpjsKetenagakerjaan",
            next_step(),
        ));
        (0, 0, ContributionSplit::default(), ContributionSplit::default())
    };

    let custom_deductions = config.custom_deductions.clone();
    let custom_total: i64 = custom_deductions.iter().map(|item| item.amount).sum();
    steps.push(AuditStep {
        step_number: next_step(),
        rule_id: "custom_deductions".to_string(),
        rule_name: "Custom Deductions".to_string(),
        regulation_ref: "Employer policy".to_string(),
        input: serde_json::json!({ "items": custom_deductions }),
        output: serde_json::json!({ "total": custom_total }),
        reasoning: format!(
            "{} custom deduction(s) totalling {}",
            custom_deductions.len(),
            format_rupiah(custom_total)
        ),
    });

    let total_employee_deductions =
        pph21 + kesehatan.employee + jht.employee + jp.employee + custom_total;
    let total_employer_contributions =
        kesehatan.employer + jkk + jkm + jht.employer + jp.employer;

    debug!(
        gross_salary,
        ter_category = %resolve_category(status),
        include_bpjs_kesehatan = config.include_bpjs_kesehatan,
        include_bpjs_ketenagakerjaan = config.include_bpjs_ketenagakerjaan,
        total_employee_deductions,
        total_employer_contributions,
        "Deductions calculated"
    );

    DeductionsCalculation {
        gross_salary,
        deductions: CalculatedDeductions {
            pph21,
            bpjs_kesehatan_employee: kesehatan.employee,
            bpjs_kesehatan_employer: kesehatan.employer,
            bpjs_jkk_employer: jkk,
            bpjs_jkm_employer: jkm,
            bpjs_jht_employee: jht.employee,
            bpjs_jht_employer: jht.employer,
            bpjs_jp_employee: jp.employee,
            bpjs_jp_employer: jp.employer,
            custom_deductions,
            total_employee_deductions,
            total_employer_contributions,
        },
        audit_steps: steps,
    }
}

/// Calculates every deduction for one employee and month.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_all_deductions;
/// use payroll_engine::models::{DeductionsConfig, Earnings, PtkpStatus};
///
/// let deductions = calculate_all_deductions(
///     &Earnings::with_basic_salary(15_000_000),
///     &DeductionsConfig::default(),
///     PtkpStatus::K1,
/// );
/// assert_eq!(deductions.pph21, 675_000);
/// assert_eq!(deductions.bpjs_kesehatan_employee, 120_000);
/// assert_eq!(deductions.total_employee_deductions, 1_200_474);
/// ```
pub fn calculate_all_deductions(
    earnings: &Earnings,
    config: &DeductionsConfig,
    status: PtkpStatus,
) -> CalculatedDeductions {
    calculate_deductions_with_audit(earnings, config, status).deductions
}

fn skipped_step(rule_id: &str, rule_name: &str, toggle: &str, step_number: u32) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        regulation_ref: "Employer configuration".to_string(),
        input: serde_json::json!({ toggle: false }),
        output: serde_json::json!({ "skipped": true }),
        reasoning: format!("{} disabled by {}; contributions set to zero", rule_name, toggle),
    }
}
