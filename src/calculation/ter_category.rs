//! TER category resolution.
//!
//! Maps a PTKP status to the TER category whose bracket table applies.

use crate::models::{AuditStep, PtkpStatus, TerCategory};

/// Resolves the TER category for a PTKP status.
///
/// The mapping is total: every status has exactly one category.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::resolve_category;
/// use payroll_engine::models::{PtkpStatus, TerCategory};
///
/// assert_eq!(resolve_category(PtkpStatus::Tk0), TerCategory::A);
/// assert_eq!(resolve_category(PtkpStatus::K1), TerCategory::B);
/// assert_eq!(resolve_category(PtkpStatus::K3), TerCategory::C);
/// ```
pub fn resolve_category(status: PtkpStatus) -> TerCategory {
    status.ter_category()
}

pub(crate) fn category_audit_step(status: PtkpStatus, step_number: u32) -> AuditStep {
    let category = resolve_category(status);
    AuditStep {
        step_number,
        rule_id: "ter_category".to_string(),
        rule_name: "TER Category Resolution".to_string(),
        regulation_ref: "PMK 168/2023".to_string(),
        input: serde_json::json!({ "ptkp_status": status.as_str() }),
        output: serde_json::json!({ "ter_category": category.as_str() }),
        reasoning: format!("PTKP status {} uses TER category {}", status, category),
    }
}
