use crate::error::Result as DbErrorResult;
use crate::{DbError, JsonStore, notes_key};

use error_location::ErrorLocation;
use notes_core::{Clock, Note, NoteDraft, NoteUpdate, new_id};

use std::panic::Location;
use std::sync::Arc;

/// Per-user note collections.
///
/// Every mutation reads the user's whole collection, changes it in memory and
/// writes it back. There is no compare-and-swap: two overlapping mutations of
/// the same collection are last-writer-wins and one of them may be lost.
#[derive(Clone)]
pub struct NoteRepository {
    store: JsonStore,
    clock: Arc<dyn Clock>,
}

impl NoteRepository {
    pub fn new(store: JsonStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn list_notes(&self, user_id: &str) -> DbErrorResult<Vec<Note>> {
        Ok(self
            .store
            .get::<Vec<Note>>(&notes_key(user_id))
            .await?
            .unwrap_or_default())
    }

    pub async fn add_note(&self, user_id: &str, draft: NoteDraft) -> DbErrorResult<Note> {
        ensure_content(&draft.content)?;

        let mut notes = self.list_notes(user_id).await?;

        let note = Note::new(
            new_id(self.clock.as_ref()),
            user_id.to_string(),
            draft.title,
            draft.content,
            draft.category,
            self.clock.now(),
        );
        notes.push(note.clone());

        self.save(user_id, &notes).await?;
        log::debug!("Added note {} for user {}", note.id, user_id);

        Ok(note)
    }

    /// Merges `update` into the stored note. `date_edited` is refreshed even
    /// when no field actually changes.
    pub async fn update_note(
        &self,
        user_id: &str,
        note_id: &str,
        update: NoteUpdate,
    ) -> DbErrorResult<Note> {
        let mut notes = self.list_notes(user_id).await?;
        let note = notes
            .iter_mut()
            .find(|n| n.id == note_id)
            .ok_or_else(|| not_found(note_id))?;

        if let Some(content) = &update.content {
            ensure_content(content)?;
        }

        if let Some(title) = update.title {
            note.title = Some(title);
        }
        if let Some(content) = update.content {
            note.content = content;
        }
        if let Some(category) = update.category {
            note.category = category;
        }
        note.date_edited = Some(self.clock.now());

        let updated = note.clone();
        self.save(user_id, &notes).await?;
        log::debug!("Updated note {} for user {}", note_id, user_id);

        Ok(updated)
    }

    pub async fn delete_note(&self, user_id: &str, note_id: &str) -> DbErrorResult<()> {
        let mut notes = self.list_notes(user_id).await?;

        let before = notes.len();
        notes.retain(|n| n.id != note_id);
        if notes.len() == before {
            return Err(not_found(note_id));
        }

        self.save(user_id, &notes).await?;
        log::debug!("Deleted note {} for user {}", note_id, user_id);

        Ok(())
    }

    pub async fn delete_all_notes(&self, user_id: &str) -> DbErrorResult<()> {
        self.save(user_id, &[]).await?;
        log::debug!("Cleared notes for user {}", user_id);
        Ok(())
    }

    async fn save(&self, user_id: &str, notes: &[Note]) -> DbErrorResult<()> {
        self.store.set(&notes_key(user_id), notes).await
    }
}

#[track_caller]
fn ensure_content(content: &str) -> DbErrorResult<()> {
    if content.trim().is_empty() {
        return Err(DbError::EmptyContent {
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

#[track_caller]
fn not_found(note_id: &str) -> DbError {
    DbError::NoteNotFound {
        note_id: note_id.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
