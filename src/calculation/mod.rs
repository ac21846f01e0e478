//! Calculation logic for the payroll engine.
//!
//! This module contains the gross salary aggregation, TER category
//! resolution, PPh 21 under the TER method, the BPJS Kesehatan and BPJS
//! Ketenagakerjaan (JKK, JKM, JHT, JP) contributions, the deduction
//! aggregator, net salary, and salary slip assembly.

mod bpjs_kesehatan;
mod bpjs_ketenagakerjaan;
mod deductions;
mod gross_salary;
mod net_salary;
mod pph21;
mod rounding;
mod salary_slip;
mod ter_category;
pub(crate) mod ter_rates;

pub use bpjs_kesehatan::{
    BPJS_KESEHATAN_EMPLOYEE_RATE, BPJS_KESEHATAN_EMPLOYER_RATE, BPJS_KESEHATAN_SALARY_CAP,
    calculate_bpjs_kesehatan,
};
pub use bpjs_ketenagakerjaan::{
    JHT_EMPLOYEE_RATE, JHT_EMPLOYER_RATE, JKM_RATE, JP_EMPLOYEE_RATE, JP_EMPLOYER_RATE,
    JP_SALARY_CAP, calculate_jht, calculate_jkk, calculate_jkm, calculate_jp,
};
pub use deductions::{
    DeductionsCalculation, calculate_all_deductions, calculate_deductions_with_audit,
};
pub use gross_salary::calculate_gross_salary;
pub use net_salary::calculate_net_salary;
pub use pph21::{TerRateLookup, calculate_pph21_ter, lookup_ter_rate};
pub use rounding::apply_rate;
pub use salary_slip::calculate_salary_slip;
pub use ter_category::resolve_category;
pub use ter_rates::{TER_REGULATION, TER_TOP_RATE, TerBracket, TerTable, ter_table};
