//! Configuration types for employer profiles.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML files of an employer profile directory.

use serde::{Deserialize, Serialize};

use crate::models::{CompanyInfo, DeductionsConfig};

/// An employer's standing payroll settings.
///
/// Statutory rates and TER brackets are compiled into the engine; the
/// profile only carries what differs between employers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerProfile {
    /// Company details printed on every slip.
    pub company: CompanyInfo,
    /// JKK risk level, BPJS toggles and standing custom deductions.
    #[serde(default)]
    pub deductions: DeductionsConfig,
}
