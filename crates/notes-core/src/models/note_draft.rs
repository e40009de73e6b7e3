use crate::Category;

use serde::{Deserialize, Serialize};

/// Caller-supplied fields for a new note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    pub category: Category,
}

impl NoteDraft {
    pub fn new(content: impl Into<String>, category: Category) -> Self {
        Self {
            title: None,
            content: content.into(),
            category,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
