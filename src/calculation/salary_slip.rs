//! Salary slip assembly.
//!
//! Combines the gross salary, deductions and net salary for one employee and
//! month into a [`SalarySlipResult`] with labelled slip rows and an audit
//! trace.

use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use super::deductions::calculate_deductions_with_audit;
use super::net_salary::calculate_net_salary;
use crate::error::EngineResult;
use crate::format::format_rupiah;
use crate::models::{
    AuditTrace, AuditWarning, CalculatedDeductions, Earnings, LineItem, SalarySlipRequest,
    SalarySlipResult, SlipLine,
};

/// Slip labels for the fixed earnings components, in [`Earnings::fixed_components`] order.
const EARNING_LABELS: [&str; 9] = [
    "Gaji Pokok",
    "Tunjangan Jabatan",
    "Tunjangan Transport",
    "Tunjangan Makan",
    "Tunjangan Perumahan",
    "Tunjangan Komunikasi",
    "Lembur",
    "Bonus",
    "THR",
];

/// Calculates a complete salary slip.
///
/// The period is validated before anything is computed. Negative line items
/// and a negative net salary are reported as audit warnings; amounts are
/// never clamped.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`](crate::error::EngineError::InvalidPeriod)
/// when the month is outside 1..=12 or the year outside the supported range.
pub fn calculate_salary_slip(request: &SalarySlipRequest) -> EngineResult<SalarySlipResult> {
    let start_time = Instant::now();
    let period_label = request.period.label()?;
    let calculation_id = Uuid::new_v4();

    let calculation = calculate_deductions_with_audit(
        &request.earnings,
        &request.deductions_config,
        request.employee.ptkp_status,
    );
    let gross_salary = calculation.gross_salary;
    let deductions = calculation.deductions;
    let net_salary = calculate_net_salary(gross_salary, &deductions);

    let warnings = collect_warnings(&request.earnings, &deductions, net_salary);
    for warning in &warnings {
        warn!(
            calculation_id = %calculation_id,
            employee_id = %request.employee.employee_id,
            code = %warning.code,
            "{}",
            warning.message
        );
    }

    let earning_lines = earning_lines(&request.earnings);
    let deduction_lines = deduction_lines(&deductions);
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        calculation_id = %calculation_id,
        employee_id = %request.employee.employee_id,
        period = %period_label,
        gross_salary,
        net_salary,
        duration_us,
        "Salary slip calculated"
    );

    Ok(SalarySlipResult {
        calculation_id,
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        company: request.company.clone(),
        employee: request.employee.clone(),
        period: request.period,
        period_label,
        earnings: request.earnings.clone(),
        gross_salary,
        deductions,
        net_salary,
        earning_lines,
        deduction_lines,
        audit_trace: AuditTrace {
            steps: calculation.audit_steps,
            warnings,
            duration_us,
        },
    })
}

fn earning_lines(earnings: &Earnings) -> Vec<SlipLine> {
    let fixed = EARNING_LABELS
        .iter()
        .zip(earnings.fixed_components())
        .map(|(label, (_, amount))| SlipLine::new(*label, amount));
    let other = earnings
        .other_earnings
        .iter()
        .map(|item| SlipLine::new(item.name.clone(), item.amount));

    fixed.chain(other).filter(|line| line.amount > 0).collect()
}

fn deduction_lines(deductions: &CalculatedDeductions) -> Vec<SlipLine> {
    let statutory = [
        SlipLine::new("PPh 21", deductions.pph21),
        SlipLine::new("BPJS Kesehatan", deductions.bpjs_kesehatan_employee),
        SlipLine::new("BPJS JHT (2%)", deductions.bpjs_jht_employee),
        SlipLine::new("BPJS JP (1%)", deductions.bpjs_jp_employee),
    ];
    let custom = deductions
        .custom_deductions
        .iter()
        .map(|item| SlipLine::new(item.name.clone(), item.amount));

    statutory
        .into_iter()
        .chain(custom)
        .filter(|line| line.amount > 0)
        .collect()
}

fn collect_warnings(
    earnings: &Earnings,
    deductions: &CalculatedDeductions,
    net_salary: i64,
) -> Vec<AuditWarning> {
    let negative_items = |kind: &'static str, items: &[LineItem]| {
        items
            .iter()
            .filter(|item| item.amount < 0)
            .map(move |item| AuditWarning {
                code: "NEGATIVE_LINE_ITEM".to_string(),
                message: format!(
                    "{} '{}' has a negative amount of {}",
                    kind,
                    item.name,
                    format_rupiah(item.amount)
                ),
                severity: "medium".to_string(),
            })
            .collect::<Vec<_>>()
    };

    let mut warnings = negative_items("Other earning", &earnings.other_earnings);
    warnings.extend(negative_items("Custom deduction", &deductions.custom_deductions));

    if net_salary < 0 {
        warnings.push(AuditWarning {
            code: "NEGATIVE_NET_SALARY".to_string(),
            message: format!(
                "Net salary is negative: {} exceeds gross salary by {}",
                format_rupiah(deductions.total_employee_deductions),
                format_rupiah(-net_salary)
            ),
            severity: "high".to_string(),
        });
    }

    warnings
}
