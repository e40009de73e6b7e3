pub mod account;
pub mod category;
pub mod category_filter;
pub mod note;
pub mod note_draft;
pub mod note_update;
pub mod profile_update;
pub mod sort_order;
