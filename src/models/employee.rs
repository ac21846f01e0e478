//! Employee and company models.
//!
//! This module defines [`EmployeeInfo`] and [`CompanyInfo`], the identifying
//! data printed on a salary slip.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PtkpStatus;

/// The employer issuing the slip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    /// Registered company name.
    pub name: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Company tax number (NPWP).
    #[serde(default)]
    pub npwp: String,
    /// Logo location for the slip header.
    #[serde(default)]
    pub logo_url: String,
}

/// The employee a slip is issued to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInfo {
    /// Full name.
    pub name: String,
    /// Employer-assigned identifier.
    pub employee_id: String,
    /// Job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Date the employee joined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<NaiveDate>,
    /// Personal tax number (NPWP).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npwp: Option<String>,
    /// PTKP status used for PPh 21.
    pub ptkp_status: PtkpStatus,
    /// Bank the salary is paid to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    /// Account the salary is paid to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
}

impl EmployeeInfo {
    /// Creates an employee record with only the required fields set.
    pub fn new(
        name: impl Into<String>,
        employee_id: impl Into<String>,
        ptkp_status: PtkpStatus,
    ) -> Self {
        Self {
            name: name.into(),
            employee_id: employee_id.into(),
            position: None,
            department: None,
            join_date: None,
            npwp: None,
            ptkp_status,
            bank_name: None,
            bank_account: None,
        }
    }
}
