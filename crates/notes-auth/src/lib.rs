pub mod account_directory;
pub mod error;
pub mod session_store;

pub use account_directory::AccountDirectory;
pub use error::{AuthError, Result};
pub use session_store::SessionStore;

#[cfg(test)]
mod tests;
