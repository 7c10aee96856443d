//! Infrastructure layer with external service adapters.

/// MockBank HTTP client.
pub mod bank;
/// Application configuration.
pub mod config;
/// Session storage adapters.
pub mod storage;

pub use bank::{BankApiClient, DEFAULT_BASE_URL};
pub use config::{AppConfig, CliArgs, LogLevel, SessionBackend, StorageManager};
pub use storage::{FileSessionStorage, KeyringSessionStorage};
