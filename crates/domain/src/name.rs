//! Name rules shared by every aggregate.

use crate::error::ValidationError;

/// Reject names that are empty or only whitespace.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyName`] when `name` is blank.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

/// Case-insensitive name equality used by the uniqueness invariants.
#[must_use]
pub fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
