//! Calculation result models for the payroll engine.
//!
//! This module contains the [`SalarySlipResult`] type and its associated
//! structures that capture all outputs of a slip calculation, including the
//! labelled slip lines, totals, and the audit trace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CalculatedDeductions, CompanyInfo, DeductionsConfig, Earnings, EmployeeInfo, PayrollPeriod};

/// A single labelled row on a salary slip.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SlipLine;
///
/// let line = SlipLine::new("Gaji Pokok", 10_000_000);
/// assert_eq!(line.label, "Gaji Pokok");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlipLine {
    /// Row label as printed on the slip.
    pub label: String,
    /// Amount in Rupiah.
    pub amount: i64,
}

impl SlipLine {
    /// Creates a new slip line.
    pub fn new(label: impl Into<String>, amount: i64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the regulation behind this rule.
    pub regulation_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag input that was accepted but may need a second look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Everything needed to produce one salary slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalarySlipRequest {
    /// The issuing company.
    pub company: CompanyInfo,
    /// The employee; their PTKP status drives PPh 21.
    pub employee: EmployeeInfo,
    /// The month being paid.
    pub period: PayrollPeriod,
    /// Gross-earnings components.
    pub earnings: Earnings,
    /// Employer deduction settings.
    #[serde(default)]
    pub deductions_config: DeductionsConfig,
}

/// The complete result of a salary slip calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalarySlipResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The issuing company.
    pub company: CompanyInfo,
    /// The employee.
    pub employee: EmployeeInfo,
    /// The month being paid.
    pub period: PayrollPeriod,
    /// Display label of the period, e.g. "Maret 2025".
    pub period_label: String,
    /// The earnings the slip was calculated from.
    pub earnings: Earnings,
    /// Sum of all earnings.
    pub gross_salary: i64,
    /// The deductions report.
    pub deductions: CalculatedDeductions,
    /// Take-home pay.
    pub net_salary: i64,
    /// Non-zero earnings rows, in slip order.
    pub earning_lines: Vec<SlipLine>,
    /// Non-zero employee deduction rows, in slip order.
    pub deduction_lines: Vec<SlipLine>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PtkpStatus;

    fn create_sample_step() -> AuditStep {
        AuditStep {
            step_number: 1,
            rule_id: "pph21_ter".to_string(),
            rule_name: "PPh 21 TER".to_string(),
            regulation_ref: "PP 58/2023".to_string(),
            input: serde_json::json!({ "gross_salary": 6_000_000 }),
            output: serde_json::json!({ "pph21": 45_000 }),
            reasoning: "Rp 6000000 x 0.0075 = Rp 45000".to_string(),
        }
    }

    #[test]
    fn test_audit_step_serializes_camel_case() {
        let json = serde_json::to_value(create_sample_step()).unwrap();
        assert_eq!(json["stepNumber"], 1);
        assert_eq!(json["ruleId"], "pph21_ter");
        assert_eq!(json["regulationRef"], "PP 58/2023");
        assert_eq!(json["output"]["pph21"], 45_000);
    }

    #[test]
    fn test_audit_trace_round_trip() {
        let trace = AuditTrace {
            steps: vec![create_sample_step()],
            warnings: vec![AuditWarning {
                code: "NEGATIVE_NET_SALARY".to_string(),
                message: "Net salary is negative".to_string(),
                severity: "high".to_string(),
            }],
            duration_us: 42,
        };

        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains("\"durationUs\":42"));
        let deserialized: AuditTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(trace, deserialized);
    }

    #[test]
    fn test_slip_request_defaults_deductions_config() {
        let json = r#"{
            "company": { "name": "PT Maju" },
            "employee": { "name": "A", "employeeId": "1", "ptkpStatus": "TK/0" },
            "period": { "month": 1, "year": 2025 },
            "earnings": { "basicSalary": 5000000 }
        }"#;

        let request: SalarySlipRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.deductions_config, DeductionsConfig::default());
        assert_eq!(request.employee.ptkp_status, PtkpStatus::Tk0);
    }
}
