use crate::{DbError, KvStore, Result};

use error_location::ErrorLocation;

use std::panic::Location;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Typed view over a [`KvStore`]: values are JSON text.
#[derive(Clone)]
pub struct JsonStore {
    inner: Arc<dyn KvStore>,
}

impl JsonStore {
    pub fn new(inner: Arc<dyn KvStore>) -> Self {
        Self { inner }
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.inner.get(key).await? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| DbError::Serialization {
                key: key.to_string(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(|source| DbError::Serialization {
            key: key.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.inner.set(key, &raw).await
    }

    pub async fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(key).await
    }
}
