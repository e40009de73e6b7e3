
use crate::NotesFacade;

use notes_core::{ManualClock, ValidationRules};
use notes_db::MemoryKvStore;

use std::sync::Arc;

use chrono::{TimeZone, Utc};

pub(crate) async fn memory_facade() -> NotesFacade {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap());
    NotesFacade::open(
        Arc::new(MemoryKvStore::new()),
        Arc::new(clock),
        ValidationRules::default(),
    )
    .await
}
