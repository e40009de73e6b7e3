use crate::{Note, SortOrder};

/// Stable sort by `date_added`; notes with equal timestamps keep their relative order.
pub fn sort_notes_by_date(notes: &[Note], order: SortOrder) -> Vec<Note> {
    let mut sorted = notes.to_vec();

    match order {
        SortOrder::Ascending => sorted.sort_by(|a, b| a.date_added.cmp(&b.date_added)),
        SortOrder::Descending => sorted.sort_by(|a, b| b.date_added.cmp(&a.date_added)),
    }

    sorted
}
