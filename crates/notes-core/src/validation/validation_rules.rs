use crate::ValidationResult;
use crate::validation::validators::validate_email;

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
pub const DEFAULT_MIN_USERNAME_LENGTH: usize = 3;

/// Configurable minimum lengths for account fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub min_password_length: usize,
    pub min_username_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            min_username_length: DEFAULT_MIN_USERNAME_LENGTH,
        }
    }
}

impl ValidationRules {
    pub fn validate_email(&self, email: &str) -> ValidationResult {
        validate_email(email)
    }

    pub fn validate_password(&self, password: &str) -> ValidationResult {
        if password.is_empty() {
            return ValidationResult::invalid("Password is required");
        }

        if password.chars().count() < self.min_password_length {
            return ValidationResult::invalid(format!(
                "Password must be at least {} characters",
                self.min_password_length
            ));
        }

        ValidationResult::ok()
    }

    pub fn validate_username(&self, username: &str) -> ValidationResult {
        if username.is_empty() {
            return ValidationResult::invalid("Username is required");
        }

        if username.chars().count() < self.min_username_length {
            return ValidationResult::invalid(format!(
                "Username must be at least {} characters",
                self.min_username_length
            ));
        }

        ValidationResult::ok()
    }
}
