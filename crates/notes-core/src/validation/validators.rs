use crate::{ValidationResult, ValidationRules};

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::invalid("Email is required");
    }

    if !EMAIL_PATTERN.is_match(email) {
        return ValidationResult::invalid("Invalid email format");
    }

    ValidationResult::ok()
}

/// Checks a password against the default minimum length.
pub fn validate_password(password: &str) -> ValidationResult {
    ValidationRules::default().validate_password(password)
}

/// Checks a username against the default minimum length.
pub fn validate_username(username: &str) -> ValidationResult {
    ValidationRules::default().validate_username(username)
}
