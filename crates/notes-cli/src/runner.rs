use crate::account_commands::AccountCommands;
use crate::note_commands::NoteCommands;
use crate::views::{AccountView, NoteView};
use crate::{Commands, Result};

use notes_app::{AppError, NotesFacade};
use notes_config::{Config, StorageBackend};
use notes_core::{
    NoteDraft, NoteUpdate, ProfileUpdate, SortOrder, filter_notes_by_category, sort_notes_by_date,
};
use notes_db::{KvStore, MemoryKvStore, SqliteKvStore};

use std::sync::Arc;

use log::info;
use serde_json::{Value, json};

/// Builds the key-value store selected by `config`.
pub async fn open_store(config: &Config) -> Result<Arc<dyn KvStore>> {
    match config.storage.backend {
        StorageBackend::Sqlite => {
            let path = config.storage_path()?;
            info!("Opening storage: {}", path.display());
            Ok(Arc::new(SqliteKvStore::open(path).await?))
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            Ok(Arc::new(MemoryKvStore::new()))
        }
    }
}

/// Runs one command against the facade and returns its JSON result.
pub async fn execute(facade: &NotesFacade, command: Commands) -> Result<Value> {
    match command {
        Commands::Account { action } => execute_account(facade, action).await,
        Commands::Note { action } => execute_note(facade, action).await,
    }
}

pub fn render(value: &Value, pretty: bool) -> Result<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(output)
}

async fn execute_account(facade: &NotesFacade, action: AccountCommands) -> Result<Value> {
    let value = match action {
        AccountCommands::Register {
            email,
            password,
            username,
        } => {
            let account = facade
                .register(email.trim(), &password, username.trim())
                .await?;
            json!({ "account": AccountView::from(&account) })
        }
        AccountCommands::Login { email, password } => {
            let account = facade.login(email.trim(), &password).await?;
            json!({ "account": AccountView::from(&account) })
        }
        AccountCommands::Logout => {
            facade.logout().await;
            json!({ "loggedOut": true })
        }
        AccountCommands::Whoami => {
            let account = facade.session().as_ref().map(AccountView::from);
            json!({ "account": account })
        }
        AccountCommands::Update {
            email,
            username,
            password,
        } => {
            let update = ProfileUpdate {
                email: email.map(|e| e.trim().to_string()),
                username: username.map(|u| u.trim().to_string()),
                password,
            };
            let account = facade.update_profile(update).await?;
            json!({ "account": AccountView::from(&account) })
        }
        AccountCommands::List => {
            let accounts: Vec<AccountView> = facade
                .accounts()
                .list_accounts()
                .await
                .map_err(AppError::from)?
                .iter()
                .map(AccountView::from)
                .collect();
            json!({ "accounts": accounts })
        }
    };
    Ok(value)
}

async fn execute_note(facade: &NotesFacade, action: NoteCommands) -> Result<Value> {
    let value = match action {
        NoteCommands::List {
            search,
            category,
            order,
        } => {
            let notes = match search {
                Some(query) => facade.search_notes(&query),
                None => facade.notes(),
            };
            let notes = match category {
                Some(filter) => filter_notes_by_category(&notes, filter),
                None => notes,
            };
            let notes: Vec<NoteView> =
                sort_notes_by_date(&notes, order.unwrap_or(SortOrder::Descending))
                    .into_iter()
                    .map(NoteView::from)
                    .collect();
            json!({ "count": notes.len(), "notes": notes })
        }
        NoteCommands::Add {
            content,
            title,
            category,
        } => {
            let draft = NoteDraft {
                title,
                content,
                category,
            };
            let note = facade.add_note(draft).await?;
            json!({ "note": NoteView::from(note) })
        }
        NoteCommands::Update {
            id,
            title,
            content,
            category,
        } => {
            let update = NoteUpdate {
                title,
                content,
                category,
            };
            let note = facade.update_note(&id, update).await?;
            json!({ "note": NoteView::from(note) })
        }
        NoteCommands::Delete { id } => {
            facade.delete_note(&id).await?;
            json!({ "deleted": id })
        }
        NoteCommands::Clear => {
            facade.delete_all_notes().await?;
            json!({ "cleared": true })
        }
    };
    Ok(value)
}
