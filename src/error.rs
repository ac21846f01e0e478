//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while preparing or running a
//! payroll calculation.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// The calculators themselves are total over well-typed input; errors arise at
/// the boundaries where untyped data (strings, YAML files, periods) is turned
/// into the engine's closed types.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidPtkpStatus {
///     value: "K/4".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid PTKP status: K/4");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A PTKP status string did not match any of the twelve known statuses.
    #[error("Invalid PTKP status: {value}")]
    InvalidPtkpStatus {
        /// The rejected value.
        value: String,
    },

    /// A JKK risk level string did not match any known level.
    #[error("Invalid JKK risk level: {value}")]
    InvalidRiskLevel {
        /// The rejected value.
        value: String,
    },

    /// A payroll period was outside the supported month or year range.
    #[error("Invalid payroll period {month}/{year}")]
    InvalidPeriod {
        /// The month that was supplied.
        month: u32,
        /// The year that was supplied.
        year: i32,
    },

    /// A monetary amount was negative where a non-negative amount was required.
    #[error("Negative amount for '{field}': {amount}")]
    NegativeAmount {
        /// The field or line item carrying the amount.
        field: String,
        /// The offending amount in Rupiah.
        amount: i64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_ptkp_status_displays_value() {
        let error = EngineError::InvalidPtkpStatus {
            value: "TK/9".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid PTKP status: TK/9");
    }

    #[test]
    fn test_invalid_risk_level_displays_value() {
        let error = EngineError::InvalidRiskLevel {
            value: "EXTREME".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid JKK risk level: EXTREME");
    }

    #[test]
    fn test_invalid_period_displays_month_and_year() {
        let error = EngineError::InvalidPeriod {
            month: 13,
            year: 2025,
        };
        assert_eq!(error.to_string(), "Invalid payroll period 13/2025");
    }

    #[test]
    fn test_negative_amount_displays_field_and_amount() {
        let error = EngineError::NegativeAmount {
            field: "customDeductions[0]".to_string(),
            amount: -50_000,
        };
        assert_eq!(
            error.to_string(),
            "Negative amount for 'customDeductions[0]': -50000"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/company.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/company.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/deductions.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/deductions.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_status() -> EngineResult<()> {
            Err(EngineError::InvalidPtkpStatus {
                value: "X".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_status()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
