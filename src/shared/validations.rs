//! Cross-cutting field validation helpers

use crate::shared::errors::{DomainError, DomainResult};

/// Reject empty or whitespace-only values for a required text field.
pub fn validate_required_text(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_input(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}

/// Reject values longer than `max` characters.
pub fn validate_max_len(field: &'static str, value: &str, max: usize) -> DomainResult<()> {
    if value.chars().count() > max {
        return Err(DomainError::invalid_input(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────
