use std::fmt;

use serde::{Deserialize, Serialize};

/// A registered user's identity and credentials. The password is stored as entered.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl Account {
    pub fn new(id: String, email: String, username: String, password: String) -> Self {
        Self {
            id,
            email,
            username,
            password,
        }
    }

    /// Case-insensitive email comparison used for login and uniqueness checks.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
