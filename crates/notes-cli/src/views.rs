use notes_core::{Account, Note, format_date};

use serde::Serialize;

/// Account as printed by the CLI. The password is never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountView {
    pub id: String,
    pub email: String,
    pub username: String,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            email: account.email.clone(),
            username: account.username.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteView {
    #[serde(flatten)]
    pub note: Note,
    pub added: String,
    pub edited: Option<String>,
}

impl From<Note> for NoteView {
    fn from(note: Note) -> Self {
        Self {
            added: format_date(&note.date_added),
            edited: note.date_edited.as_ref().map(format_date),
            note,
        }
    }
}
