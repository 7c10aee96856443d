use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use mockbank::application::{FetchRunner, SessionContext};
use mockbank::domain::ports::SessionStoragePort;
use mockbank::infrastructure::{
    AppConfig, BankApiClient, CliArgs, FileSessionStorage, KeyringSessionStorage, SessionBackend,
    StorageManager,
};
use mockbank::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn session_storage(config: &AppConfig, storage: &StorageManager) -> Arc<dyn SessionStoragePort> {
    match config.session.backend {
        SessionBackend::Keyring => Arc::new(KeyringSessionStorage::new()),
        SessionBackend::File => Arc::new(FileSessionStorage::in_dir(storage.data_dir())),
    }
}

fn create_app() -> Result<(App, Option<String>)> {
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();

    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    let cli_token = config.token.take();

    init_logging(&config)?;

    info!(
        version = mockbank::VERSION,
        base_url = %config.api.base_url,
        backend = ?config.session.backend,
        "Starting MockBank"
    );

    let api = Arc::new(BankApiClient::new(
        config.api.base_url.clone(),
        config.api.timeout(),
    )?);
    let session_storage = session_storage(&config, &storage);
    let session = SessionContext::new(Arc::clone(&session_storage));
    let runner = FetchRunner::new(api, session).with_timeout(config.api.timeout());

    let app = App::new(runner, session_storage, config.ui);

    Ok((app, cli_token))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let (app, cli_token) = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal, cli_token).await;

    ratatui::restore();

    result
}
