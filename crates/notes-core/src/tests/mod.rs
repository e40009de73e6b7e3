mod models;

use crate::{Category, Note};

use chrono::{DateTime, Duration, TimeZone, Utc};

pub(crate) fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 15, 4, 0).unwrap()
}

/// Builds a note added `offset_minutes` after [`base_time`].
pub(crate) fn note_at(
    id: &str,
    title: Option<&str>,
    content: &str,
    category: Category,
    offset_minutes: i64,
) -> Note {
    Note::new(
        id.to_string(),
        "user-1".to_string(),
        title.map(str::to_string),
        content.to_string(),
        category,
        base_time() + Duration::minutes(offset_minutes),
    )
}
