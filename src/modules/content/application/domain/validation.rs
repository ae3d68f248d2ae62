use email_address::EmailAddress;

//
// ──────────────────────────────────────────────────────────
// Validation error
// ──────────────────────────────────────────────────────────
//

/// A single rejected field. Recoverable: the admin form re-prompts with the
/// message, nothing reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Field helpers
// ──────────────────────────────────────────────────────────
//

/// Required text: trimmed, must be non-empty.
pub fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Optional text: trimmed, empty input collapses to `None`.
/// Admin forms post empty strings for blank optional inputs.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn int_in_range(
    field: &'static str,
    value: i32,
    min: i32,
    max: i32,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::new(
            field,
            format!("must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn require_email(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = require_text(field, value)?;
    if !EmailAddress::is_valid(&trimmed) {
        return Err(ValidationError::new(field, "is not a valid email address"));
    }
    Ok(trimmed)
}
