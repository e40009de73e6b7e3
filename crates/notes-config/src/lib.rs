mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_backend;
mod storage_config;
mod validation_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_backend::StorageBackend;
pub use storage_config::StorageConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "NOTES_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".notes";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_STORAGE_FILENAME: &str = "notes.db";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
