use notes_core::{Clock, ManualClock};
use notes_db::{JsonStore, MemoryKvStore, NoteRepository, SqliteKvStore};

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap()
}

pub fn test_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(start_time()))
}

/// Creates an in-memory SQLite store with migrations run
pub async fn create_test_store() -> Arc<SqliteKvStore> {
    Arc::new(
        SqliteKvStore::in_memory()
            .await
            .expect("Failed to create test store"),
    )
}

/// Note repository over a fresh SQLite store, sharing `clock`
pub async fn create_test_repository(clock: Arc<ManualClock>) -> (NoteRepository, JsonStore) {
    let store = JsonStore::new(create_test_store().await);
    let clock: Arc<dyn Clock> = clock;
    (NoteRepository::new(store.clone(), clock), store)
}

/// Note repository over a process-local store
pub fn create_memory_repository(clock: Arc<ManualClock>) -> NoteRepository {
    NoteRepository::new(JsonStore::new(Arc::new(MemoryKvStore::new())), clock)
}
