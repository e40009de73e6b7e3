use error_location::ErrorLocation;
use notes_core::CoreError;
use notes_db::DbError;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    DuplicateEmail {
        message: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("User not found: {account_id} {location}")]
    AccountNotFound {
        account_id: String,
        location: ErrorLocation,
    },

    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable code for callers that report errors as data.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::AccountNotFound { .. } => "ACCOUNT_NOT_FOUND",
            Self::Storage { .. } => "STORAGE_ERROR",
        }
    }

    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            Self::DuplicateEmail { .. } => Some("email"),
            _ => None,
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation {
                field,
                message,
                location,
            } => Self::Validation {
                field,
                message,
                location,
            },
            other => Self::Validation {
                field: "input",
                message: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
