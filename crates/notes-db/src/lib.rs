pub mod error;
pub mod keys;
pub mod repositories;
pub mod store;

pub use error::{DbError, Result};
pub use keys::{ACCOUNTS_KEY, NOTES_KEY_PREFIX, SESSION_KEY, notes_key};
pub use repositories::note_repository::NoteRepository;
pub use store::json_store::JsonStore;
pub use store::kv_store::KvStore;
pub use store::memory_kv_store::MemoryKvStore;
pub use store::sqlite_kv_store::SqliteKvStore;

#[cfg(test)]
mod tests;
