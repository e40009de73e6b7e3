use crate::Result;

use async_trait::async_trait;

/// Durable string-keyed store of text values.
///
/// A missing key reads as `None`. Backend failures surface as storage errors.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    async fn remove(&self, key: &str) -> Result<()>;
}
