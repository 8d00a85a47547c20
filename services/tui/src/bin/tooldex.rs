//! services/tui/src/bin/tooldex.rs

use std::fs::{create_dir_all, File};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tooldex_core::ports::SeedSource;
use tooldex_core::{Catalog, Directory};
use tui_lib::{
    adapters::{DemoVerifier, JsonFavoritesStore, SeedFile},
    config::Config,
    error::AppError,
    state::AppState,
    ui,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    create_dir_all(&config.data_dir)?;
    // The terminal belongs to the TUI, so logs go to a file in the data dir.
    let log_file = File::create(config.log_path())?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(Arc::new(log_file)).with_ansi(false))
        .init();
    info!("Configuration loaded. Data dir: {}", config.data_dir.display());

    // --- 2. Initialize Adapters ---
    let store = Arc::new(JsonFavoritesStore::new(config.data_dir.clone()));
    let verifier = Arc::new(DemoVerifier);
    let seed = SeedFile::new(config.seed_path.clone());

    // --- 3. Install the Seed Catalog ---
    let tools = seed.load().await?;
    info!("Seed dataset loaded: {} tools", tools.len());
    let directory = Directory::new(Catalog::new(tools));

    // --- 4. Build the Shared AppState & Run the UI ---
    let mut state = AppState::new(directory, store, verifier, config);
    ui::run(&mut state).await?;

    info!("Goodbye");
    Ok(())
}
