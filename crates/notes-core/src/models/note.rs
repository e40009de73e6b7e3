use crate::Category;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A categorized, user-owned text record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    pub category: Category,

    // Audit
    pub date_added: DateTime<Utc>,
    #[serde(default)]
    pub date_edited: Option<DateTime<Utc>>,
    pub user_id: String,
}

impl Note {
    pub fn new(
        id: String,
        user_id: String,
        title: Option<String>,
        content: String,
        category: Category,
        date_added: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            category,
            date_added,
            date_edited: None,
            user_id,
        }
    }

    pub fn is_edited(&self) -> bool {
        self.date_edited.is_some()
    }
}
