pub mod clock;
pub mod error;
pub mod id;
pub mod models;
pub mod query;
pub mod validation;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CoreError, CoreResult};
pub use error_location::ErrorLocation;
pub use id::new_id;
pub use models::account::Account;
pub use models::category::Category;
pub use models::category_filter::CategoryFilter;
pub use models::note::Note;
pub use models::note_draft::NoteDraft;
pub use models::note_update::NoteUpdate;
pub use models::profile_update::ProfileUpdate;
pub use models::sort_order::SortOrder;
pub use query::date_format::{format_date, format_date_short};
pub use query::filter::filter_notes_by_category;
pub use query::search::search_notes;
pub use query::sort::sort_notes_by_date;
pub use validation::validation_result::ValidationResult;
pub use validation::validation_rules::{
    DEFAULT_MIN_PASSWORD_LENGTH, DEFAULT_MIN_USERNAME_LENGTH, ValidationRules,
};
pub use validation::validators::{validate_email, validate_password, validate_username};

#[cfg(test)]
mod tests;
