//! Application configuration.

pub mod app_config;
pub mod args;
pub mod storage;

pub use app_config::{ApiConfig, AppConfig, LogLevel, SessionBackend, SessionConfig, UiConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};
