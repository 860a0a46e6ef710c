//! Word Train terminal client entry point.
mod config;
mod frontend;
mod logging;
mod presentation;

use std::sync::Arc;

use anyhow::{Context, Result};
use config::ClientConfig;
use runtime::{FileKeyValueStore, GeminiGenerator, Runtime};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let log_file = logging::setup_logging(config.log_dir.as_deref())?;

    let store = match &config.data_dir {
        Some(dir) => FileKeyValueStore::new(dir),
        None => FileKeyValueStore::in_default_location(),
    }
    .context("failed to open save directory")?;
    tracing::info!("Save directory: {}", store.base_dir().display());

    let mut builder = Runtime::builder()
        .config(config.runtime_config())
        .store(Arc::new(store));
    match config.gemini() {
        Some(gemini) => builder = builder.generator(Arc::new(GeminiGenerator::new(gemini))),
        None => println!("GEMINI_API_KEY not set; the computer will use its built-in word list."),
    }
    let runtime = builder.build().context("failed to start game runtime")?;

    let handle = runtime.handle();
    if let Some(difficulty) = config.difficulty {
        handle.set_difficulty(difficulty).await?;
    }

    frontend::run(handle).await?;
    runtime.shutdown().await?;

    println!("Bye! Logs: {}", log_file.display());
    Ok(())
}
