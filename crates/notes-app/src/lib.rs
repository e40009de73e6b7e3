pub mod error;
pub mod notes_facade;

pub use error::{AppError, Result};
pub use notes_facade::NotesFacade;

#[cfg(test)]
mod tests;
