//! PTKP status and TER category models.
//!
//! This module defines the [`PtkpStatus`] enum (the taxpayer's marital and
//! dependent status) and the [`TerCategory`] it maps to for monthly PPh 21
//! withholding under PP 58/2023.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The TER (Tarif Efektif Rata-rata) category used to select a bracket table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerCategory {
    /// Category A: TK/0, TK/1, K/0, K/I/0.
    A,
    /// Category B: TK/2, TK/3, K/1, K/2, K/I/1, K/I/2.
    B,
    /// Category C: K/3, K/I/3.
    C,
}

impl TerCategory {
    /// Returns the single-letter code of the category.
    pub const fn as_str(self) -> &'static str {
        match self {
            TerCategory::A => "A",
            TerCategory::B => "B",
            TerCategory::C => "C",
        }
    }
}

impl fmt::Display for TerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// PTKP (Penghasilan Tidak Kena Pajak) status of an employee.
///
/// - `TK` = tidak kawin (single)
/// - `K` = kawin (married, spouse without income)
/// - `K/I` = kawin, spouse income combined
///
/// The numeric suffix is the number of dependents (0-3).
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PtkpStatus, TerCategory};
/// use std::str::FromStr;
///
/// let status = PtkpStatus::from_str("K/1").unwrap();
/// assert_eq!(status, PtkpStatus::K1);
/// assert_eq!(status.ter_category(), TerCategory::B);
/// assert!(PtkpStatus::from_str("K/4").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PtkpStatus {
    /// Single, no dependents.
    #[serde(rename = "TK/0")]
    Tk0,
    /// Single, 1 dependent.
    #[serde(rename = "TK/1")]
    Tk1,
    /// Single, 2 dependents.
    #[serde(rename = "TK/2")]
    Tk2,
    /// Single, 3 dependents.
    #[serde(rename = "TK/3")]
    Tk3,
    /// Married, no dependents.
    #[serde(rename = "K/0")]
    K0,
    /// Married, 1 dependent.
    #[serde(rename = "K/1")]
    K1,
    /// Married, 2 dependents.
    #[serde(rename = "K/2")]
    K2,
    /// Married, 3 dependents.
    #[serde(rename = "K/3")]
    K3,
    /// Married with combined spouse income, no dependents.
    #[serde(rename = "K/I/0")]
    Ki0,
    /// Married with combined spouse income, 1 dependent.
    #[serde(rename = "K/I/1")]
    Ki1,
    /// Married with combined spouse income, 2 dependents.
    #[serde(rename = "K/I/2")]
    Ki2,
    /// Married with combined spouse income, 3 dependents.
    #[serde(rename = "K/I/3")]
    Ki3,
}

impl PtkpStatus {
    /// Every PTKP status, in the order the regulation lists them.
    pub const ALL: [PtkpStatus; 12] = [
        PtkpStatus::Tk0,
        PtkpStatus::Tk1,
        PtkpStatus::Tk2,
        PtkpStatus::Tk3,
        PtkpStatus::K0,
        PtkpStatus::K1,
        PtkpStatus::K2,
        PtkpStatus::K3,
        PtkpStatus::Ki0,
        PtkpStatus::Ki1,
        PtkpStatus::Ki2,
        PtkpStatus::Ki3,
    ];

    /// Returns the TER category for this status (PP 58/2023, PMK 168/2023).
    pub const fn ter_category(self) -> TerCategory {
        match self {
            PtkpStatus::Tk0 | PtkpStatus::Tk1 | PtkpStatus::K0 | PtkpStatus::Ki0 => TerCategory::A,
            PtkpStatus::Tk2
            | PtkpStatus::Tk3
            | PtkpStatus::K1
            | PtkpStatus::K2
            | PtkpStatus::Ki1
            | PtkpStatus::Ki2 => TerCategory::B,
            PtkpStatus::K3 | PtkpStatus::Ki3 => TerCategory::C,
        }
    }

    /// Returns the status code as written on tax forms (e.g. "K/I/2").
    pub const fn as_str(self) -> &'static str {
        match self {
            PtkpStatus::Tk0 => "TK/0",
            PtkpStatus::Tk1 => "TK/1",
            PtkpStatus::Tk2 => "TK/2",
            PtkpStatus::Tk3 => "TK/3",
            PtkpStatus::K0 => "K/0",
            PtkpStatus::K1 => "K/1",
            PtkpStatus::K2 => "K/2",
            PtkpStatus::K3 => "K/3",
            PtkpStatus::Ki0 => "K/I/0",
            PtkpStatus::Ki1 => "K/I/1",
            PtkpStatus::Ki2 => "K/I/2",
            PtkpStatus::Ki3 => "K/I/3",
        }
    }
}

impl fmt::Display for PtkpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PtkpStatus {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PtkpStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| EngineError::InvalidPtkpStatus {
                value: s.to_string(),
            })
    }
}
