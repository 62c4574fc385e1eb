//! Bounded text checks shared by aggregate factories.

use super::ValidationError;

/// Maximum length for names of menus, sections, items and dinners.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for section and item descriptions.
pub const MAX_SHORT_DESCRIPTION_LENGTH: usize = 100;

/// Maximum length for menu and dinner descriptions.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Checks that `value` is non-blank and at most `max` characters.
///
/// Length is counted in characters, not bytes.
pub fn bounded_text(field: &str, value: String, max: usize) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::too_long(field, max, actual));
    }
    Ok(value)
}
