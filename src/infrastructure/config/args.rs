use super::app_config::{LogLevel, SessionBackend};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "mockbank",
    version,
    about = "A terminal client for the MockBank banking API",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", env = "MOCKBANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", env = "MOCKBANK_LOG_PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, env = "MOCKBANK_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Backend origin.
    #[arg(long, value_name = "URL", env = "MOCKBANK_BASE_URL")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECONDS", env = "MOCKBANK_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Where the session is persisted.
    #[arg(long, value_enum, env = "MOCKBANK_SESSION_BACKEND")]
    pub session_backend: Option<SessionBackend>,

    /// Bearer token to use instead of the stored session.
    #[arg(long, env = "MOCKBANK_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}
