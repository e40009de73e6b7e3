use crate::Note;

/// Case-insensitive substring match over title, content and category name.
///
/// A blank query returns every note in its original order.
pub fn search_notes(notes: &[Note], query: &str) -> Vec<Note> {
    if query.trim().is_empty() {
        return notes.to_vec();
    }

    let needle = query.to_lowercase();

    notes
        .iter()
        .filter(|note| {
            let title_match = note
                .title
                .as_deref()
                .is_some_and(|title| title.to_lowercase().contains(&needle));
            let content_match = note.content.to_lowercase().contains(&needle);
            let category_match = note.category.as_str().to_lowercase().contains(&needle);

            title_match || content_match || category_match
        })
        .cloned()
        .collect()
}
