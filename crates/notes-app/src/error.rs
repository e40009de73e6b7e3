use error_location::ErrorLocation;
use notes_auth::AuthError;
use notes_db::DbError;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No user logged in {location}")]
    NoSession { location: ErrorLocation },

    #[error("{source}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Notes {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoSession { .. } => "NO_SESSION",
            Self::Auth { source, .. } => source.error_code(),
            Self::Notes { source, .. } => match source {
                DbError::NoteNotFound { .. } => "NOTE_NOT_FOUND",
                DbError::EmptyContent { .. } => "EMPTY_CONTENT",
                _ => "STORAGE_ERROR",
            },
        }
    }
}

impl From<AuthError> for AppError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for AppError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Notes {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
