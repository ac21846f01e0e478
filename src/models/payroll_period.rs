//! Payroll period model.
//!
//! This module contains the [`PayrollPeriod`] type identifying the month a
//! salary slip is issued for.

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Earliest year a payroll period may fall in.
pub const MIN_PERIOD_YEAR: i32 = 2020;

/// Latest year a payroll period may fall in.
pub const MAX_PERIOD_YEAR: i32 = 2100;

/// A monthly payroll period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollPeriod;
///
/// let period = PayrollPeriod::new(3, 2025).unwrap();
/// assert_eq!(period.label().unwrap(), "Maret 2025");
/// assert!(PayrollPeriod::new(13, 2025).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPeriod {
    /// Calendar month, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

impl PayrollPeriod {
    /// Creates a validated payroll period.
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        let period = Self { month, year };
        period.validate()?;
        Ok(period)
    }

    /// Checks the month and year ranges.
    ///
    /// Periods built by deserialization are not validated until this is called.
    pub fn validate(&self) -> EngineResult<()> {
        self.calendar_month().map(|_| ())
    }

    /// Returns the period's month as a [`chrono::Month`].
    pub fn calendar_month(&self) -> EngineResult<Month> {
        let invalid = || EngineError::InvalidPeriod {
            month: self.month,
            year: self.year,
        };

        if !(MIN_PERIOD_YEAR..=MAX_PERIOD_YEAR).contains(&self.year) {
            return Err(invalid());
        }

        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or_else(invalid)
    }

    /// Returns the Indonesian display label, e.g. "Desember 2025".
    pub fn label(&self) -> EngineResult<String> {
        let month = self.calendar_month()?;
        Ok(format!("{} {}", indonesian_month_name(month), self.year))
    }
}

fn indonesian_month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Januari",
        Month::February => "Februari",
        Month::March => "Maret",
        Month::April => "April",
        Month::May => "Mei",
        Month::June => "Juni",
        Month::July => "Juli",
        Month::August => "Agustus",
        Month::September => "September",
        Month::October => "Oktober",
        Month::November => "November",
        Month::December => "Desember",
    }
}
