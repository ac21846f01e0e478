//! PPh 21 withholding under the TER method.
//!
//! This module looks up the TER bracket for a monthly gross salary and applies
//! its single rate to the whole amount. TER is not progressive: there is no
//! marginal slicing across brackets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rounding::apply_rate;
use super::ter_category::resolve_category;
use super::ter_rates::{TER_REGULATION, ter_table};
use crate::format::{format_percent, format_rupiah};
use crate::models::{AuditStep, PtkpStatus, TerCategory};

/// The bracket a gross salary falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerRateLookup {
    /// The category whose table was searched.
    pub category: TerCategory,
    /// Rate applied to the whole gross salary.
    pub rate: Decimal,
    /// Inclusive ceiling of the matched bracket; `None` for the open top bracket.
    pub ceiling: Option<i64>,
}

/// Finds the TER bracket for a monthly gross salary.
///
/// The first bracket whose ceiling is greater than or equal to `gross_salary`
/// applies, so an amount exactly on a ceiling stays in the lower bracket.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::lookup_ter_rate;
/// use payroll_engine::models::TerCategory;
/// use rust_decimal_macros::dec;
///
/// let lookup = lookup_ter_rate(6_300_000, TerCategory::A);
/// assert_eq!(lookup.rate, dec!(0.0075));
/// assert_eq!(lookup.ceiling, Some(6_300_000));
///
/// let top = lookup_ter_rate(2_000_000_000, TerCategory::A);
/// assert_eq!(top.rate, dec!(0.34));
/// assert_eq!(top.ceiling, None);
/// ```
pub fn lookup_ter_rate(gross_salary: i64, category: TerCategory) -> TerRateLookup {
    let table = ter_table(category);

    match table.brackets.iter().find(|b| gross_salary <= b.ceiling) {
        Some(bracket) => TerRateLookup {
            category,
            rate: bracket.rate,
            ceiling: Some(bracket.ceiling),
        },
        None => TerRateLookup {
            category,
            rate: table.top_rate,
            ceiling: None,
        },
    }
}

/// Calculates monthly PPh 21 using the TER rate for the employee's status.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_pph21_ter;
/// use payroll_engine::models::PtkpStatus;
///
/// assert_eq!(calculate_pph21_ter(5_000_000, PtkpStatus::Tk0), 0);
/// assert_eq!(calculate_pph21_ter(6_000_000, PtkpStatus::Tk0), 45_000);
/// assert_eq!(calculate_pph21_ter(15_000_000, PtkpStatus::K1), 675_000);
/// ```
pub fn calculate_pph21_ter(gross_salary: i64, status: PtkpStatus) -> i64 {
    let lookup = lookup_ter_rate(gross_salary, resolve_category(status));
    apply_rate(gross_salary, lookup.rate)
}

pub(crate) fn pph21_audit_step(
    gross_salary: i64,
    status: PtkpStatus,
    pph21: i64,
    step_number: u32,
) -> AuditStep {
    let lookup = lookup_ter_rate(gross_salary, resolve_category(status));
    let bracket = match lookup.ceiling {
        Some(ceiling) => format!("up to {}", format_rupiah(ceiling)),
        None => "top bracket".to_string(),
    };

    AuditStep {
        step_number,
        rule_id: "pph21_ter".to_string(),
        rule_name: "PPh 21 TER".to_string(),
        regulation_ref: TER_REGULATION.to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary,
            "ptkp_status": status.as_str(),
            "ter_category": lookup.category.as_str()
        }),
        output: serde_json::json!({
            "rate": lookup.rate.normalize().to_string(),
            "bracket_ceiling": lookup.ceiling,
            "pph21": pph21
        }),
        reasoning: format!(
            "Category {} {}: {} x {} = {}",
            lookup.category,
            bracket,
            format_rupiah(gross_salary),
            format_percent(lookup.rate),
            format_rupiah(pph21)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::ter_rates::TER_TOP_RATE;
    use rust_decimal_macros::dec;

    /// TER-001: below category A floor
    #[test]
    fn test_below_threshold_is_tax_free() {
        assert_eq!(calculate_pph21_ter(5_000_000, PtkpStatus::Tk0), 0);
    }

    /// TER-002: category A, 0.75% bracket
    #[test]
    fn test_category_a_6_million() {
        assert_eq!(calculate_pph21_ter(6_000_000, PtkpStatus::Tk0), 45_000);
    }

    /// TER-003: category B, 4.5% bracket
    #[test]
    fn test_category_b_15_million() {
        assert_eq!(calculate_pph21_ter(15_000_000, PtkpStatus::K1), 675_000);
    }

    /// TER-004: category C, 1.5% bracket
    #[test]
    fn test_category_c_10_million() {
        assert_eq!(calculate_pph21_ter(10_000_000, PtkpStatus::K3), 150_000);
    }

    /// TER-005: category A, 13% bracket
    #[test]
    fn test_category_a_50_million() {
        assert_eq!(calculate_pph21_ter(50_000_000, PtkpStatus::Tk0), 6_500_000);
    }

    #[test]
    fn test_tax_free_floor_for_every_status() {
        for status in PtkpStatus::ALL {
            let floor = ter_table(status.ter_category()).tax_free_ceiling();
            assert_eq!(calculate_pph21_ter(0, status), 0, "{}", status);
            assert_eq!(calculate_pph21_ter(floor, status), 0, "{}", status);
            assert!(calculate_pph21_ter(floor + 1, status) > 0, "{}", status);
        }
    }

    #[test]
    fn test_ceiling_belongs_to_lower_bracket() {
        // Category A: 5,650,000 is the 0.25% ceiling, next bracket is 0.5%.
        assert_eq!(lookup_ter_rate(5_650_000, TerCategory::A).rate, dec!(0.0025));
        assert_eq!(lookup_ter_rate(5_650_001, TerCategory::A).rate, dec!(0.005));
        assert_eq!(calculate_pph21_ter(5_650_000, PtkpStatus::Tk1), 14_125);

        // Category B: 16,400,000 is the 4.5% ceiling.
        assert_eq!(lookup_ter_rate(16_400_000, TerCategory::B).rate, dec!(0.045));
        assert_eq!(lookup_ter_rate(16_400_001, TerCategory::B).rate, dec!(0.05));

        // Category C: 10,950,000 is the 1.5% ceiling.
        assert_eq!(lookup_ter_rate(10_950_000, TerCategory::C).rate, dec!(0.015));
        assert_eq!(lookup_ter_rate(10_950_001, TerCategory::C).rate, dec!(0.0175));
    }

    #[test]
    fn test_first_taxed_bracket_per_category() {
        assert_eq!(calculate_pph21_ter(5_400_001, PtkpStatus::K0), 13_500);
        assert_eq!(calculate_pph21_ter(6_200_001, PtkpStatus::Tk2), 15_500);
        assert_eq!(calculate_pph21_ter(6_600_001, PtkpStatus::Ki3), 16_500);
    }

    #[test]
    fn test_whole_amount_taxed_at_single_rate() {
        // A progressive engine would tax only the slice above 5.4M.
        // TER taxes all of 12,000,000 at the 4% rate.
        assert_eq!(calculate_pph21_ter(12_000_000, PtkpStatus::Tk0), 480_000);
    }

    #[test]
    fn test_last_bounded_bracket_and_top_rate() {
        let last = lookup_ter_rate(1_400_000_000, TerCategory::A);
        assert_eq!(last.rate, dec!(0.28));
        assert_eq!(last.ceiling, Some(1_400_000_000));

        let top = lookup_ter_rate(1_400_000_001, TerCategory::A);
        assert_eq!(top.rate, TER_TOP_RATE);
        assert_eq!(top.ceiling, None);

        assert_eq!(lookup_ter_rate(1_405_000_001, TerCategory::B).rate, dec!(0.34));
        assert_eq!(lookup_ter_rate(1_419_000_000, TerCategory::C).rate, dec!(0.27));
        assert_eq!(calculate_pph21_ter(2_000_000_000, PtkpStatus::K3), 680_000_000);
    }

    #[test]
    fn test_same_gross_differs_by_category() {
        let gross = 6_500_000;
        assert_eq!(calculate_pph21_ter(gross, PtkpStatus::Tk0), 65_000); // 1%
        assert_eq!(calculate_pph21_ter(gross, PtkpStatus::K1), 16_250); // 0.25%
        assert_eq!(calculate_pph21_ter(gross, PtkpStatus::K3), 0);
    }

    #[test]
    fn test_rounding_of_fractional_tax() {
        // 6,123,457 * 0.0075 = 45,925.9275
        assert_eq!(calculate_pph21_ter(6_123_457, PtkpStatus::Tk0), 45_926);
    }

    #[test]
    fn test_negative_gross_yields_zero_tax() {
        assert_eq!(calculate_pph21_ter(-1_000_000, PtkpStatus::Tk0), 0);
    }

    #[test]
    fn test_audit_step_contents() {
        let step = pph21_audit_step(6_000_000, PtkpStatus::Tk0, 45_000, 3);
        assert_eq!(step.step_number, 3);
        assert_eq!(step.rule_id, "pph21_ter");
        assert_eq!(step.regulation_ref, "PP 58/2023");
        assert_eq!(step.input["ter_category"], "A");
        assert_eq!(step.output["rate"], "0.0075");
        assert_eq!(step.output["bracket_ceiling"], 6_300_000);
        assert!(step.reasoning.contains("0.75%"));
    }

    #[test]
    fn test_audit_step_top_bracket_has_null_ceiling() {
        let step = pph21_audit_step(2_000_000_000, PtkpStatus::K1, 680_000_000, 1);
        assert!(step.output["bracket_ceiling"].is_null());
        assert!(step.reasoning.contains("top bracket"));
    }
}
