//! Payroll Engine for Indonesian Monthly Payroll
//!
//! This crate calculates PPh 21 income tax under the TER method, BPJS
//! Kesehatan and BPJS Ketenagakerjaan contributions, and take-home pay for a
//! single employee and month, with an audit step for every rule applied.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
