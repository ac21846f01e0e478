//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading employer
//! profiles from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CompanyInfo, DeductionsConfig, Earnings, EmployeeInfo, PayrollPeriod, SalarySlipRequest,
};

use super::types::EmployerProfile;

/// Loads and provides access to an employer profile.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── company.yaml     # Company details for the slip header
/// └── deductions.yaml  # JKK risk level, BPJS toggles, custom deductions
/// ```
///
/// Any field omitted from `deductions.yaml` takes its default: `LOW` risk,
/// both BPJS families enabled, no custom deductions.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::{Earnings, EmployeeInfo, PayrollPeriod, PtkpStatus};
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let request = loader.slip_request(
///     EmployeeInfo::new("Siti Rahma", "EMP-014", PtkpStatus::K1),
///     PayrollPeriod::new(3, 2025)?,
///     Earnings::with_basic_salary(12_000_000),
/// );
/// println!("Slip for {}", request.company.name);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    profile: EmployerProfile,
}

impl ConfigLoader {
    /// Loads an employer profile from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if either file cannot be read
    /// and [`EngineError::ConfigParseError`] if either contains invalid YAML
    /// or an unknown enum value such as a misspelled risk level.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let company = Self::load_yaml::<CompanyInfo>(&path.join("company.yaml"))?;
        let deductions = Self::load_yaml::<DeductionsConfig>(&path.join("deductions.yaml"))?;

        Ok(Self {
            profile: EmployerProfile {
                company,
                deductions,
            },
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the complete employer profile.
    pub fn profile(&self) -> &EmployerProfile {
        &self.profile
    }

    /// Returns the company details.
    pub fn company(&self) -> &CompanyInfo {
        &self.profile.company
    }

    /// Returns the employer's deduction settings.
    pub fn deductions(&self) -> &DeductionsConfig {
        &self.profile.deductions
    }

    /// Builds a slip request for one employee using this profile.
    pub fn slip_request(
        &self,
        employee: EmployeeInfo,
        period: PayrollPeriod,
        earnings: Earnings,
    ) -> SalarySlipRequest {
        SalarySlipRequest {
            company: self.profile.company.clone(),
            employee,
            period,
            earnings,
            deductions_config: self.profile.deductions.clone(),
        }
    }
}
