use clap::Subcommand;

#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create an account (does not log in)
    Register {
        email: String,
        password: String,
        username: String,
    },

    /// Log in and remember the session
    Login { email: String, password: String },

    /// Forget the current session
    Logout,

    /// Show the logged-in account
    Whoami,

    /// Change fields of the logged-in account
    Update {
        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        password: Option<String>,
    },

    /// List registered accounts
    List,
}
