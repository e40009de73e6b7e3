#![allow(dead_code)]

use notes_app::NotesFacade;
use notes_core::{ManualClock, ValidationRules};
use notes_db::{KvStore, SqliteKvStore};

use std::sync::Arc;

use chrono::{TimeZone, Utc};

pub fn test_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap(),
    ))
}

/// Creates an in-memory SQLite store with migrations run
pub async fn create_test_store() -> Arc<dyn KvStore> {
    Arc::new(
        SqliteKvStore::in_memory()
            .await
            .expect("Failed to create test store"),
    )
}

pub async fn open_facade(store: Arc<dyn KvStore>, clock: Arc<ManualClock>) -> NotesFacade {
    NotesFacade::open(store, clock, ValidationRules::default()).await
}

/// Facade with `a@x.com` / `secret1` registered and logged in
pub async fn logged_in_facade(clock: Arc<ManualClock>) -> NotesFacade {
    let facade = open_facade(create_test_store().await, clock).await;
    facade
        .register("a@x.com", "secret1", "alice")
        .await
        .expect("Failed to register test account");
    facade
        .login("a@x.com", "secret1")
        .await
        .expect("Failed to log in test account");
    facade
}
