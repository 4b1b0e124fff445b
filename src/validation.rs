//! Input validation utilities for the service layer.

use crate::error::{Error, Result, ValidationErrors};

/// Validates email format.
///
/// # Examples
/// ```
/// use bookstore::validation::validate_email;
///
/// validate_email("user@example.com").unwrap();
/// assert!(validate_email("invalid-email").is_err());
/// ```
pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(invalid("email", "Email cannot be empty"));
    }

    if email.len() > 254 {
        return Err(invalid("email", "Email address is too long (max 254 characters)"));
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(invalid("email", "Invalid email format: must contain exactly one @ symbol"));
    }

    let (local_part, domain) = (parts[0], parts[1]);

    if local_part.is_empty() || local_part.len() > 64 {
        return Err(invalid("email", "Invalid email format: local part must be 1-64 characters"));
    }

    if domain.is_empty() || !domain.contains('.') {
        return Err(invalid("email", "Invalid email format: domain must contain at least one dot"));
    }

    if email.contains("..") {
        return Err(invalid("email", "Invalid email format: cannot contain consecutive dots"));
    }

    let invalid_chars = ['<', '>', '(', ')', '[', ']', '\\', ',', ';', ':', '"', ' '];
    for char in invalid_chars.iter() {
        if email.contains(*char) {
            return Err(invalid(
                "email",
                format!("Invalid email format: cannot contain '{}'", char),
            ));
        }
    }

    Ok(())
}

/// Validates that a required text field is non-empty after trimming.
pub fn validate_required_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, format!("{} cannot be empty", field)));
    }
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> Error {
    Error::Validation(ValidationErrors::single(field, message))
}
