//! notes-cli library
//!
//! Argument definitions and command execution, shared by the `notes` binary
//! and the integration tests.

pub mod account_commands;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod note_commands;
pub mod runner;
pub mod views;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result};
pub use runner::{execute, open_store, render};
