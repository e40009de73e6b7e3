use crate::{Category, CoreResult};

use std::str::FromStr;

/// Category selection for note lists: everything, or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = crate::CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Category::from_str(s).map(Self::Only)
    }
}
