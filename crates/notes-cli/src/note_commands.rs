use notes_core::{Category, CategoryFilter, SortOrder};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum NoteCommands {
    /// List notes, newest first unless --order asc
    List {
        /// Case-insensitive text to look for in title, content or category
        #[arg(long)]
        search: Option<String>,

        /// all, work, study or personal
        #[arg(long)]
        category: Option<CategoryFilter>,

        /// asc or desc
        #[arg(long)]
        order: Option<SortOrder>,
    },

    /// Add a note
    Add {
        content: String,

        #[arg(long)]
        title: Option<String>,

        /// work, study or personal
        #[arg(long, default_value_t = Category::Personal)]
        category: Category,
    },

    /// Change fields of a note
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        #[arg(long)]
        category: Option<Category>,
    },

    /// Delete a note
    Delete { id: String },

    /// Delete every note of the logged-in account
    Clear,
}
