use crate::{ConfigError, ConfigErrorResult};

use notes_core::{DEFAULT_MIN_PASSWORD_LENGTH, DEFAULT_MIN_USERNAME_LENGTH, ValidationRules};

use serde::Deserialize;

pub const MIN_PASSWORD_LENGTH_FLOOR: usize = 1;
pub const MIN_PASSWORD_LENGTH_CEILING: usize = 128;

pub const MIN_USERNAME_LENGTH_FLOOR: usize = 1;
pub const MIN_USERNAME_LENGTH_CEILING: usize = 64;

/// Minimum lengths enforced on registration and profile updates.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub min_password_length: usize,
    pub min_username_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            min_username_length: DEFAULT_MIN_USERNAME_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_PASSWORD_LENGTH_FLOOR..=MIN_PASSWORD_LENGTH_CEILING)
            .contains(&self.min_password_length)
        {
            return Err(ConfigError::validation(format!(
                "validation.min_password_length must be {}-{}, got {}",
                MIN_PASSWORD_LENGTH_FLOOR, MIN_PASSWORD_LENGTH_CEILING, self.min_password_length
            )));
        }

        if !(MIN_USERNAME_LENGTH_FLOOR..=MIN_USERNAME_LENGTH_CEILING)
            .contains(&self.min_username_length)
        {
            return Err(ConfigError::validation(format!(
                "validation.min_username_length must be {}-{}, got {}",
                MIN_USERNAME_LENGTH_FLOOR, MIN_USERNAME_LENGTH_CEILING, self.min_username_length
            )));
        }

        Ok(())
    }

    pub fn rules(&self) -> ValidationRules {
        ValidationRules {
            min_password_length: self.min_password_length,
            min_username_length: self.min_username_length,
        }
    }
}
