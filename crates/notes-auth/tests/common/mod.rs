#![allow(dead_code)]

use notes_auth::AccountDirectory;
use notes_core::{ManualClock, ValidationRules};
use notes_db::{JsonStore, SqliteKvStore};

use std::sync::Arc;

use chrono::{TimeZone, Utc};

pub fn test_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap(),
    ))
}

/// Creates an in-memory SQLite-backed JSON store with migrations run
pub async fn create_test_store() -> JsonStore {
    let store = SqliteKvStore::in_memory()
        .await
        .expect("Failed to create test store");
    JsonStore::new(Arc::new(store))
}

pub async fn create_test_directory() -> (AccountDirectory, JsonStore) {
    let store = create_test_store().await;
    (AccountDirectory::new(store.clone(), test_clock()), store)
}

pub async fn create_directory_with_rules(rules: ValidationRules) -> AccountDirectory {
    AccountDirectory::with_rules(create_test_store().await, test_clock(), rules)
}
