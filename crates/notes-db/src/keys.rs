//! Storage keys. These strings are part of the persisted layout.

pub const ACCOUNTS_KEY: &str = "@notes_app_users";
pub const SESSION_KEY: &str = "@notes_app_current_user";
pub const NOTES_KEY_PREFIX: &str = "@notes_app_notes_";

/// Key holding the note collection of one user.
pub fn notes_key(user_id: &str) -> String {
    format!("{NOTES_KEY_PREFIX}{user_id}")
}
