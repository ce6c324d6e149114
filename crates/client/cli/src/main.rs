//! Terminal host for the dice tower.
mod app;
mod config;
mod input;
mod presentation;

use std::path::Path;

use anyhow::Result;
use app::CliApp;
use config::CliConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = setup_logging(config.log_dir.as_deref())?;

    CliApp::new(config)?.run().await
}

/// Logs to a daily rolling file when a directory is given, otherwise to
/// stderr with only warnings by default so the game text stays readable.
fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::daily(dir, "tower.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
                )
                .with_writer(non_blocking)
                .with_ansi(false)
                .init();

            tracing::info!("Log file: {}/tower.log", dir.display());
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
                )
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}
