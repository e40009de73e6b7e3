use crate::{account_commands::AccountCommands, note_commands::NoteCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Account and session operations
    Account {
        #[command(subcommand)]
        action: AccountCommands,
    },

    /// Note operations for the logged-in account
    Note {
        #[command(subcommand)]
        action: NoteCommands,
    },
}
