//! Earnings model.
//!
//! This module defines [`Earnings`], the gross-earnings components of one
//! monthly payslip, and [`LineItem`], the named amount used for both ad-hoc
//! earnings and ad-hoc deductions.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A named whole-Rupiah amount (e.g. "Project Bonus", "Loan").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display name of the item.
    pub name: String,
    /// Amount in Rupiah.
    pub amount: i64,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(name: impl Into<String>, amount: i64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Gross-earnings components for a single month, in whole Rupiah.
///
/// Every field except `basic_salary` defaults to zero when deserialized.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Earnings, LineItem};
///
/// let earnings = Earnings {
///     position_allowance: 1_000_000,
///     other_earnings: vec![LineItem::new("Project Bonus", 500_000)],
///     ..Earnings::with_basic_salary(10_000_000)
/// };
/// assert_eq!(earnings.basic_salary, 10_000_000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Earnings {
    /// Gaji pokok.
    pub basic_salary: i64,
    /// Tunjangan jabatan.
    #[serde(default)]
    pub position_allowance: i64,
    /// Tunjangan transport.
    #[serde(default)]
    pub transport_allowance: i64,
    /// Tunjangan makan.
    #[serde(default)]
    pub meal_allowance: i64,
    /// Tunjangan perumahan.
    #[serde(default)]
    pub housing_allowance: i64,
    /// Tunjangan komunikasi.
    #[serde(default)]
    pub communication_allowance: i64,
    /// Lembur.
    #[serde(default)]
    pub overtime: i64,
    /// Bonus.
    #[serde(default)]
    pub bonus: i64,
    /// Tunjangan Hari Raya.
    #[serde(default)]
    pub thr: i64,
    /// Any further earnings, by name.
    #[serde(default)]
    pub other_earnings: Vec<LineItem>,
}

impl Earnings {
    /// Creates earnings consisting of a basic salary only.
    pub fn with_basic_salary(basic_salary: i64) -> Self {
        Self {
            basic_salary,
            ..Self::default()
        }
    }

    /// Returns the fixed components with their wire names, in slip order.
    pub fn fixed_components(&self) -> [(&'static str, i64); 9] {
        [
            ("basicSalary", self.basic_salary),
            ("positionAllowance", self.position_allowance),
            ("transportAllowance", self.transport_allowance),
            ("mealAllowance", self.meal_allowance),
            ("housingAllowance", self.housing_allowance),
            ("communicationAllowance", self.communication_allowance),
            ("overtime", self.overtime),
            ("bonus", self.bonus),
            ("thr", self.thr),
        ]
    }

    /// Rejects any negative component or other-earnings amount.
    ///
    /// The calculators accept negative amounts and let them flow through; this
    /// check is for callers that want to refuse such input up front.
    pub fn validate_non_negative(&self) -> EngineResult<()> {
        for (field, amount) in self.fixed_components() {
            if amount < 0 {
                return Err(EngineError::NegativeAmount {
                    field: field.to_string(),
                    amount,
                });
            }
        }
        check_line_items("otherEarnings", &self.other_earnings)
    }
}

/// Fails on the first negative amount in `items`.
pub(crate) fn check_line_items(field: &str, items: &[LineItem]) -> EngineResult<()> {
    match items.iter().enumerate().find(|(_, item)| item.amount < 0) {
        Some((index, item)) => Err(EngineError::NegativeAmount {
            field: format!("{}[{}]", field, index),
            amount: item.amount,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults_missing_allowances_to_zero() {
        let json = r#"{ "basicSalary": 8000000 }"#;
        let earnings: Earnings = serde_json::from_str(json).unwrap();

        assert_eq!(earnings, Earnings::with_basic_salary(8_000_000));
        assert!(earnings.other_earnings.is_empty());
    }

    #[test]
    fn test_deserialize_requires_basic_salary() {
        let json = r#"{ "bonus": 100 }"#;
        let err = serde_json::from_str::<Earnings>(json).unwrap_err();
        assert!(err.to_string().contains("basicSalary"));
    }

    #[test]
    fn test_deserialize_full_earnings() {
        let json = r#"{
            "basicSalary": 10000000,
            "positionAllowance": 1000000,
            "transportAllowance": 500000,
            "mealAllowance": 500000,
            "housingAllowance": 0,
            "communicationAllowance": 0,
            "overtime": 500000,
            "bonus": 0,
            "thr": 0,
            "otherEarnings": [{ "name": "Project Bonus", "amount": 500000 }]
        }"#;
        let earnings: Earnings = serde_json::from_str(json).unwrap();

        assert_eq!(earnings.position_allowance, 1_000_000);
        assert_eq!(earnings.overtime, 500_000);
        assert_eq!(
            earnings.other_earnings,
            vec![LineItem::new("Project Bonus", 500_000)]
        );
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let json = serde_json::to_string(&Earnings::with_basic_salary(1)).unwrap();
        assert!(json.contains("\"basicSalary\":1"));
        assert!(json.contains("\"otherEarnings\":[]"));
    }

    #[test]
    fn test_validate_non_negative_accepts_zeroes() {
        assert!(Earnings::default().validate_non_negative().is_ok());
    }

    #[test]
    fn test_validate_non_negative_reports_fixed_field() {
        let earnings = Earnings {
            bonus: -1,
            ..Earnings::with_basic_salary(5_000_000)
        };
        match earnings.validate_non_negative() {
            Err(EngineError::NegativeAmount { field, amount }) => {
                assert_eq!(field, "bonus");
                assert_eq!(amount, -1);
            }
            other => panic!("Expected NegativeAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_non_negative_reports_other_earning_index() {
        let earnings = Earnings {
            other_earnings: vec![LineItem::new("ok", 10), LineItem::new("refund", -200)],
            ..Earnings::with_basic_salary(5_000_000)
        };
        match earnings.validate_non_negative() {
            Err(EngineError::NegativeAmount { field, amount }) => {
                assert_eq!(field, "otherEarnings[1]");
                assert_eq!(amount, -200);
            }
            other => panic!("Expected NegativeAmount, got {:?}", other),
        }
    }
}
