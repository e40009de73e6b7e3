use crate::tests::FailingKvStore;
use crate::{DbError, JsonStore, KvStore, MemoryKvStore};

use std::sync::Arc;

use googletest::prelude::*;

#[tokio::test]
async fn given_missing_key_when_get_then_none() {
    let store = JsonStore::new(Arc::new(MemoryKvStore::new()));

    let value: Option<Vec<String>> = store.get("absent").await.unwrap();

    assert_that!(value, none());
}

#[tokio::test]
async fn given_malformed_text_when_get_then_serialization_error() {
    let raw = Arc::new(MemoryKvStore::new());
    raw.set("k", "{not json").await.unwrap();
    let store = JsonStore::new(raw);

    let result = store.get::<Vec<String>>("k").await;

    match result {
        Err(e @ DbError::Serialization { .. }) => assert!(e.is_storage_failure()),
        other => panic!("Expected Serialization error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_failing_backend_when_set_then_error_propagates() {
    let store = JsonStore::new(Arc::new(FailingKvStore));

    let result = store.set("k", &vec![1, 2, 3]).await;

    assert!(result.is_err_and(|e| e.is_storage_failure()));
}

#[tokio::test]
async fn given_stored_value_when_removed_then_reads_absent() {
    let store = JsonStore::new(Arc::new(MemoryKvStore::new()));
    store.set("k", &"v").await.unwrap();

    store.remove("k").await.unwrap();

    assert_that!(store.get::<String>("k").await.unwrap(), none());
}
