mod json_store;
mod memory_kv_store;

use crate::{DbError, KvStore, Result};

use error_location::ErrorLocation;

use std::panic::Location;

use async_trait::async_trait;

/// Store whose every operation fails like an unavailable backend.
pub(crate) struct FailingKvStore;

#[async_trait]
impl KvStore for FailingKvStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(unavailable())
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(unavailable())
    }

    async fn remove(&self, _key: &str) -> Result<()> {
        Err(unavailable())
    }
}

fn unavailable() -> DbError {
    DbError::Initialization {
        message: "store unavailable".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
