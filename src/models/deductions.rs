//! Deduction configuration and calculated deduction models.
//!
//! This module contains the employer-side [`DeductionsConfig`] that drives a
//! calculation, the [`JkkRiskLevel`] enum, and the [`CalculatedDeductions`]
//! report the engine produces.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::earnings::{LineItem, check_line_items};
use crate::error::{EngineError, EngineResult};

/// Workplace risk level used for the JKK (work-accident) contribution.
///
/// Each level is bound to a fixed employer rate under PP 44/2015.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JkkRiskLevel {
    /// 0.24%
    VeryLow,
    /// 0.54%
    #[default]
    Low,
    /// 0.89%
    Medium,
    /// 1.27%
    High,
    /// 1.74%
    VeryHigh,
}

impl JkkRiskLevel {
    /// Every risk level, lowest first.
    pub const ALL: [JkkRiskLevel; 5] = [
        JkkRiskLevel::VeryLow,
        JkkRiskLevel::Low,
        JkkRiskLevel::Medium,
        JkkRiskLevel::High,
        JkkRiskLevel::VeryHigh,
    ];

    /// Returns the employer contribution rate for this level.
    pub const fn rate(self) -> Decimal {
        match self {
            JkkRiskLevel::VeryLow => dec!(0.0024),
            JkkRiskLevel::Low => dec!(0.0054),
            JkkRiskLevel::Medium => dec!(0.0089),
            JkkRiskLevel::High => dec!(0.0127),
            JkkRiskLevel::VeryHigh => dec!(0.0174),
        }
    }

    /// Returns the wire name of the level (e.g. "VERY_HIGH").
    pub const fn as_str(self) -> &'static str {
        match self {
            JkkRiskLevel::VeryLow => "VERY_LOW",
            JkkRiskLevel::Low => "LOW",
            JkkRiskLevel::Medium => "MEDIUM",
            JkkRiskLevel::High => "HIGH",
            JkkRiskLevel::VeryHigh => "VERY_HIGH",
        }
    }
}

impl fmt::Display for JkkRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JkkRiskLevel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JkkRiskLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| EngineError::InvalidRiskLevel {
                value: s.to_string(),
            })
    }
}

fn default_true() -> bool {
    true
}

/// Employer deduction settings applied to a calculation.
///
/// Deserialization fills omitted fields with the same defaults as
/// [`DeductionsConfig::default`]: `LOW` risk, both BPJS families enabled and
/// no custom deductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionsConfig {
    /// Risk level for the JKK contribution.
    #[serde(default)]
    pub jkk_risk_level: JkkRiskLevel,
    /// Whether BPJS Kesehatan is deducted.
    #[serde(default = "default_true")]
    pub include_bpjs_kesehatan: bool,
    /// Whether BPJS Ketenagakerjaan (JKK, JKM, JHT, JP) is deducted.
    #[serde(default = "default_true")]
    pub include_bpjs_ketenagakerjaan: bool,
    /// Ad-hoc employee deductions such as loan repayments.
    #[serde(default)]
    pub custom_deductions: Vec<LineItem>,
}

impl Default for DeductionsConfig {
    fn default() -> Self {
        Self {
            jkk_risk_level: JkkRiskLevel::default(),
            include_bpjs_kesehatan: true,
            include_bpjs_ketenagakerjaan: true,
            custom_deductions: Vec::new(),
        }
    }
}

impl DeductionsConfig {
    /// Rejects any negative custom deduction amount.
    pub fn validate_non_negative(&self) -> EngineResult<()> {
        check_line_items("customDeductions", &self.custom_deductions)
    }
}

/// An employee/employer pair for a split contribution.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ContributionSplit;
///
/// let split = ContributionSplit { employee: 120_000, employer: 480_000 };
/// assert_eq!(split.total(), 600_000);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionSplit {
    /// Share withheld from the employee's pay.
    pub employee: i64,
    /// Share paid by the employer on top of gross salary.
    pub employer: i64,
}

impl ContributionSplit {
    /// Returns the combined contribution.
    pub fn total(&self) -> i64 {
        self.employee + self.employer
    }
}

/// The deductions report for one employee and month.
///
/// Employee-side fields reduce take-home pay; employer-side fields are costs
/// the employer pays on top of gross salary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedDeductions {
    /// PPh 21 withheld under the TER method.
    pub pph21: i64,
    /// BPJS Kesehatan, employee share (1%).
    pub bpjs_kesehatan_employee: i64,
    /// BPJS Kesehatan, employer share (4%).
    pub bpjs_kesehatan_employer: i64,
    /// JKK, employer only.
    pub bpjs_jkk_employer: i64,
    /// JKM, employer only.
    pub bpjs_jkm_employer: i64,
    /// JHT, employee share (2%).
    pub bpjs_jht_employee: i64,
    /// JHT, employer share (3.7%).
    pub bpjs_jht_employer: i64,
    /// JP, employee share (1%).
    pub bpjs_jp_employee: i64,
    /// JP, employer share (2%).
    pub bpjs_jp_employer: i64,
    /// Custom deductions, echoed from the configuration.
    pub custom_deductions: Vec<LineItem>,
    /// Sum of every employee-side deduction.
    pub total_employee_deductions: i64,
    /// Sum of every employer-side contribution.
    pub total_employer_contributions: i64,
}

impl CalculatedDeductions {
    /// Returns the sum of the custom deduction amounts.
    pub fn custom_deductions_total(&self) -> i64 {
        self.custom_deductions.iter().map(|item| item.amount).sum()
    }
}
