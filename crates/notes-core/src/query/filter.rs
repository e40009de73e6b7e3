use crate::{CategoryFilter, Note};

pub fn filter_notes_by_category(notes: &[Note], filter: CategoryFilter) -> Vec<Note> {
    notes
        .iter()
        .filter(|note| filter.matches(note.category))
        .cloned()
        .collect()
}
