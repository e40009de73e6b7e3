#![allow(dead_code)]

use notes_app::NotesFacade;
use notes_cli::{Cli, execute};
use notes_core::{ManualClock, ValidationRules};
use notes_db::MemoryKvStore;

use std::env;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use clap::Parser;
use serde_json::Value;

/// RAII guard for environment variables - automatically restores on drop
pub struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

pub fn test_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap(),
    ))
}

pub async fn memory_facade(clock: Arc<ManualClock>) -> NotesFacade {
    NotesFacade::open(
        Arc::new(MemoryKvStore::new()),
        clock,
        ValidationRules::default(),
    )
    .await
}

/// Parses `args` as a command line and runs it
pub async fn run(facade: &NotesFacade, args: &[&str]) -> notes_cli::Result<Value> {
    let cli = Cli::try_parse_from(std::iter::once("notes").chain(args.iter().copied()))
        .expect("arguments should parse");
    execute(facade, cli.command).await
}
