use crate::{CoreError, CoreResult, ErrorLocation};

use std::panic::Location;

use serde::Serialize;

/// Outcome of a single field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Converts a failed check into a `CoreError::Validation` tagged with `field`.
    #[track_caller]
    pub fn into_result(self, field: &'static str) -> CoreResult<()> {
        if self.valid {
            return Ok(());
        }

        Err(CoreError::Validation {
            field,
            message: self
                .error
                .unwrap_or_else(|| format!("{field} is invalid")),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
