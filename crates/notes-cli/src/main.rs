//! notes - local notes CLI
//!
//! # Examples
//!
//! ```bash
//! notes account register alice@example.com secret1 alice
//! notes account login alice@example.com secret1
//! notes note add "Buy milk" --title Groceries --category personal
//! notes note list --search milk --order asc --pretty
//! ```

use notes_app::NotesFacade;
use notes_cli::{Cli, Result, execute, logger, open_store, render};
use notes_config::Config;
use notes_core::SystemClock;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file = config.log_file_path()?;
    if let Some(dir) = log_file.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(dir).map_err(|e| {
            notes_cli::CliError::logger(format!(
                "Failed to create log directory {}: {}",
                dir.display(),
                e
            ))
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting notes v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let store = open_store(&config).await?;
    let facade = NotesFacade::open(store, Arc::new(SystemClock), config.validation.rules()).await;

    let value = execute(&facade, cli.command).await?;
    render(&value, cli.pretty)
}
