
use notes_core::ErrorLocation;
use notes_db::{DbError, KvStore, Result as DbResult};

use std::panic::Location;

use async_trait::async_trait;

/// Store that fails every call, standing in for an unreadable device.
pub(crate) struct BrokenStore;

#[async_trait]
impl KvStore for BrokenStore {
    async fn get(&self, _key: &str) -> DbResult<Option<String>> {
        Err(broken())
    }

    async fn set(&self, _key: &str, _value: &str) -> DbResult<()> {
        Err(broken())
    }

    async fn remove(&self, _key: &str) -> DbResult<()> {
        Err(broken())
    }
}

fn broken() -> DbError {
    DbError::Initialization {
        message: "device unavailable".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
