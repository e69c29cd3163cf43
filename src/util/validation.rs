//! Field-level validation primitives for account-creation input.
//!
//! DESIGN
//! ======
//! Checks mirror what the form promises inline: an email-shaped address and
//! a minimum password length. Anything stricter is the identity provider's
//! call, reported after submission.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Minimum accepted length for both password fields, in characters.
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Why a single form field failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The value does not look like an email address.
    InvalidEmail,
    /// The value has fewer than [`MIN_PASSWORD_CHARS`] characters.
    TooShort,
}

/// True when `value` matches the loose `<non-space>+@<non-space>+` shape:
/// no whitespace anywhere and at least one `@` with text on both sides.
pub fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    value
        .match_indices('@')
        .any(|(at, _)| at > 0 && at + 1 < value.len())
}

/// Check the email buffer.
pub fn validate_email(value: &str) -> Option<FieldError> {
    if is_email_shaped(value) {
        None
    } else {
        Some(FieldError::InvalidEmail)
    }
}

/// Check a password buffer; length is counted in characters, not bytes.
pub fn validate_password(value: &str) -> Option<FieldError> {
    if value.chars().count() >= MIN_PASSWORD_CHARS {
        None
    } else {
        Some(FieldError::TooShort)
    }
}
