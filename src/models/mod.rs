//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod deductions;
mod earnings;
mod employee;
mod payroll_period;
mod ptkp;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, SalarySlipRequest, SalarySlipResult, SlipLine,
};
pub use deductions::{CalculatedDeductions, ContributionSplit, DeductionsConfig, JkkRiskLevel};
pub use earnings::{Earnings, LineItem};
pub use employee::{CompanyInfo, EmployeeInfo};
pub use payroll_period::{MAX_PERIOD_YEAR, MIN_PERIOD_YEAR, PayrollPeriod};
pub use ptkp::{PtkpStatus, TerCategory};
