//! Configuration loading for employer profiles.
//!
//! Statutory rates are compiled in. This module loads the per-employer
//! settings (company details and deduction toggles) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded profile: {}", config.company().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::EmployerProfile;
