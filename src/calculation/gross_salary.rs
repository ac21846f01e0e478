//! Gross salary aggregation.

use crate::format::format_rupiah;
use crate::models::{AuditStep, Earnings};

/// Sums every earnings component into the monthly gross salary.
///
/// The fixed fields and the `other_earnings` list are added with integer
/// arithmetic, so the order of `other_earnings` never affects the result.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_gross_salary;
/// use payroll_engine::models::{Earnings, LineItem};
///
/// let earnings = Earnings {
///     position_allowance: 1_000_000,
///     transport_allowance: 500_000,
///     meal_allowance: 500_000,
///     overtime: 500_000,
///     other_earnings: vec![LineItem::new("Project Bonus", 500_000)],
///     ..Earnings::with_basic_salary(10_000_000)
/// };
/// assert_eq!(calculate_gross_salary(&earnings), 13_000_000);
/// ```
pub fn calculate_gross_salary(earnings: &Earnings) -> i64 {
    let fixed: i64 = earnings
        .fixed_components()
        .iter()
        .map(|(_, amount)| amount)
        .sum();
    let other: i64 = earnings.other_earnings.iter().map(|item| item.amount).sum();

    fixed + other
}

pub(crate) fn gross_salary_audit_step(
    earnings: &Earnings,
    gross_salary: i64,
    step_number: u32,
) -> AuditStep {
    let components: serde_json::Map<String, serde_json::Value> = earnings
        .fixed_components()
        .iter()
        .map(|(name, amount)| (name.to_string(), serde_json::json!(amount)))
        .collect();

    AuditStep {
        step_number,
        rule_id: "gross_salary".to_string(),
        rule_name: "Gross Salary".to_string(),
        regulation_ref: "PMK 168/2023".to_string(),
        input: serde_json::json!({
            "components": components,
            "other_earnings": earnings.other_earnings.len()
        }),
        output: serde_json::json!({ "gross_salary": gross_salary }),
        reasoning: format!(
            "Sum of {} fixed components and {} other earnings = {}",
            components.len(),
            earnings.other_earnings.len(),
            format_rupiah(gross_salary)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;

    #[test]
    fn test_basic_salary_only() {
        assert_eq!(
            calculate_gross_salary(&Earnings::with_basic_salary(10_000_000)),
            10_000_000
        );
    }

    #[test]
    fn test_every_fixed_field_is_included() {
        let earnings = Earnings {
            basic_salary: 1,
            position_allowance: 10,
            transport_allowance: 100,
            meal_allowance: 1_000,
            housing_allowance: 10_000,
            communication_allowance: 100_000,
            overtime: 1_000_000,
            bonus: 10_000_000,
            thr: 100_000_000,
            other_earnings: vec![],
        };
        assert_eq!(calculate_gross_salary(&earnings), 111_111_111);
    }

    #[test]
    fn test_empty_other_earnings_contribute_zero() {
        assert_eq!(calculate_gross_salary(&Earnings::default()), 0);
    }

    #[test]
    fn test_other_earnings_order_does_not_matter() {
        let items = vec![
            LineItem::new("a", 300_000),
            LineItem::new("b", 1_250_000),
            LineItem::new("c", 75_000),
        ];
        let mut reversed = items.clone();
        reversed.reverse();

        let forward = Earnings {
            other_earnings: items,
            ..Earnings::with_basic_salary(5_000_000)
        };
        let backward = Earnings {
            other_earnings: reversed,
            ..Earnings::with_basic_salary(5_000_000)
        };
        assert_eq!(calculate_gross_salary(&forward), 6_625_000);
        assert_eq!(calculate_gross_salary(&backward), 6_625_000);
    }

    #[test]
    fn test_negative_other_earnings_flow_through() {
        let earnings = Earnings {
            other_earnings: vec![LineItem::new("Correction", -250_000)],
            ..Earnings::with_basic_salary(5_000_000)
        };
        assert_eq!(calculate_gross_salary(&earnings), 4_750_000);
    }

    #[test]
    fn test_billion_scale_salaries() {
        let earnings = Earnings {
            bonus: 2_000_000_000,
            ..Earnings::with_basic_salary(1_500_000_000)
        };
        assert_eq!(calculate_gross_salary(&earnings), 3_500_000_000);
    }

    #[test]
    fn test_audit_step() {
        let earnings = Earnings::with_basic_salary(7_000_000);
        let step = gross_salary_audit_step(&earnings, 7_000_000, 1);
        assert_eq!(step.rule_id, "gross_salary");
        assert_eq!(step.input["components"]["basicSalary"], 7_000_000);
        assert_eq!(step.output["gross_salary"], 7_000_000);
        assert!(step.reasoning.contains("7.000.000"));
    }
}
