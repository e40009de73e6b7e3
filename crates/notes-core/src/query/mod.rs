//! Pure, in-memory views over an already loaded note collection.

pub mod date_format;
pub mod filter;
pub mod search;
pub mod sort;
