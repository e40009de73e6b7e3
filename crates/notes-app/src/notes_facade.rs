use crate::{AppError, Result};

use notes_auth::AccountDirectory;
use notes_core::{
    Account, CategoryFilter, Clock, ErrorLocation, Note, NoteDraft, NoteUpdate, ProfileUpdate,
    SortOrder, ValidationRules, filter_notes_by_category, search_notes, sort_notes_by_date,
};
use notes_db::{JsonStore, KvStore, NoteRepository};

use std::panic::Location;
use std::sync::Arc;

use tokio::sync::watch;

/// Session and note state for one client.
///
/// Whenever the session changes the loaded notes are re-derived for the new
/// account (or cleared when nobody is logged in). Consumers either read the
/// current values or subscribe to changes.
pub struct NotesFacade {
    accounts: AccountDirectory,
    repository: NoteRepository,
    session_tx: watch::Sender<Option<Account>>,
    session_rx: watch::Receiver<Option<Account>>,
    notes_tx: watch::Sender<Vec<Note>>,
    notes_rx: watch::Receiver<Vec<Note>>,
}

impl NotesFacade {
    /// Builds a facade with no session loaded. Call [`NotesFacade::refresh_session`]
    /// or use [`NotesFacade::load`] to pick up a persisted session.
    pub fn new(accounts: AccountDirectory, repository: NoteRepository) -> Self {
        let (session_tx, session_rx) = watch::channel(None);
        let (notes_tx, notes_rx) = watch::channel(Vec::new());

        Self {
            accounts,
            repository,
            session_tx,
            session_rx,
            notes_tx,
            notes_rx,
        }
    }

    pub async fn load(accounts: AccountDirectory, repository: NoteRepository) -> Self {
        let facade = Self::new(accounts, repository);
        facade.refresh_session().await;
        facade
    }

    /// Wires the directory and repository over one store and loads the session.
    pub async fn open(
        store: Arc<dyn KvStore>,
        clock: Arc<dyn Clock>,
        rules: ValidationRules,
    ) -> Self {
        let store = JsonStore::new(store);
        let accounts = AccountDirectory::with_rules(store.clone(), clock.clone(), rules);
        let repository = NoteRepository::new(store, clock);
        Self::load(accounts, repository).await
    }

    pub fn session(&self) -> Option<Account> {
        self.session_rx.borrow().clone()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.notes_rx.borrow().clone()
    }

    pub fn subscribe_session(&self) -> watch::Receiver<Option<Account>> {
        self.session_rx.clone()
    }

    pub fn subscribe_notes(&self) -> watch::Receiver<Vec<Note>> {
        self.notes_rx.clone()
    }

    pub fn accounts(&self) -> &AccountDirectory {
        &self.accounts
    }

    /// Re-reads the persisted session and the matching notes.
    pub async fn refresh_session(&self) {
        let account = self.accounts.current_session().await;
        self.set_session(account).await;
    }

    /// Registers without logging in. The session is re-read afterwards so any
    /// observer sees the state that follows a registration.
    pub async fn register(&self, email: &str, password: &str, username: &str) -> Result<Account> {
        let account = self.accounts.register(email, password, username).await?;
        self.refresh_session().await;
        Ok(account)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Account> {
        let account = self.accounts.login(email, password).await?;
        self.set_session(Some(account.clone())).await;
        Ok(account)
    }

    pub async fn logout(&self) {
        self.accounts.logout().await;
        self.set_session(None).await;
    }

    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<Account> {
        let current = self.require_session()?;
        let updated = self.accounts.update_profile(&current.id, update).await?;
        self.set_session(Some(updated.clone())).await;
        Ok(updated)
    }

    /// Reloads the logged-in user's notes from storage.
    pub async fn refresh_notes(&self) -> Result<Vec<Note>> {
        let account = self.require_session()?;
        let notes = self.repository.list_notes(&account.id).await?;
        self.notes_tx.send_replace(notes.clone());
        Ok(notes)
    }

    pub async fn add_note(&self, draft: NoteDraft) -> Result<Note> {
        let account = self.require_session()?;
        let note = self.repository.add_note(&account.id, draft).await?;
        self.notes_tx.send_modify(|notes| notes.push(note.clone()));
        Ok(note)
    }

    pub async fn update_note(&self, note_id: &str, update: NoteUpdate) -> Result<Note> {
        let account = self.require_session()?;
        let note = self
            .repository
            .update_note(&account.id, note_id, update)
            .await?;
        self.notes_tx.send_modify(|notes| {
            if let Some(slot) = notes.iter_mut().find(|n| n.id == note.id) {
                *slot = note.clone();
            }
        });
        Ok(note)
    }

    pub async fn delete_note(&self, note_id: &str) -> Result<()> {
        let account = self.require_session()?;
        self.repository.delete_note(&account.id, note_id).await?;
        self.notes_tx
            .send_modify(|notes| notes.retain(|n| n.id != note_id));
        Ok(())
    }

    pub async fn delete_all_notes(&self) -> Result<()> {
        let account = self.require_session()?;
        self.repository.delete_all_notes(&account.id).await?;
        self.notes_tx.send_replace(Vec::new());
        Ok(())
    }

    /// Loaded notes whose title, content or category contains `query`, ignoring case.
    pub fn search_notes(&self, query: &str) -> Vec<Note> {
        search_notes(&self.notes_rx.borrow(), query)
    }

    /// Loaded notes ordered by creation time. Ties keep their loaded order.
    pub fn sort_notes(&self, order: SortOrder) -> Vec<Note> {
        sort_notes_by_date(&self.notes_rx.borrow(), order)
    }

    pub fn filter_notes(&self, filter: CategoryFilter) -> Vec<Note> {
        filter_notes_by_category(&self.notes_rx.borrow(), filter)
    }

    async fn set_session(&self, account: Option<Account>) {
        let notes = match &account {
            Some(account) => match self.repository.list_notes(&account.id).await {
                Ok(notes) => notes,
                Err(e) => {
                    log::warn!("Failed to load notes for {}: {}", account.id, e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        self.session_tx.send_replace(account);
        self.notes_tx.send_replace(notes);
    }

    #[track_caller]
    fn require_session(&self) -> Result<Account> {
        self.session().ok_or_else(|| AppError::NoSession {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
