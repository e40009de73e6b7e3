use error_location::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Serialization error for key {key}: {source} {location}")]
    Serialization {
        key: String,
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Note not found: {note_id} {location}")]
    NoteNotFound {
        note_id: String,
        location: ErrorLocation,
    },

    #[error("Note content cannot be empty {location}")]
    EmptyContent { location: ErrorLocation },
}

impl DbError {
    /// True for failures of the backing store rather than of the request.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            Self::Sqlx { .. }
                | Self::Serialization { .. }
                | Self::Migration { .. }
                | Self::Initialization { .. }
        )
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
