//! Statematch client binary.
//!
//! Composition root that assembles:
//! 1. Content (bundled region catalog)
//! 2. Runtime (session worker) via RuntimeBuilder
//! 3. Frontend (terminal UI)

use std::sync::Arc;

use anyhow::Result;
use client_frontend_cli::{CliConfig, CliFrontend, logging};
use client_frontend_core::Frontend;
use game_content::RegionLoader;
use game_core::GameConfig;
use runtime::{Runtime, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli_config = CliConfig::from_env();
    let _log_guard = logging::init(&cli_config.log_file)?;

    // Surface a catalog failure before any UI takes over the terminal.
    let catalog = match RegionLoader::bundled() {
        Ok(catalog) => Arc::new(catalog),
        Err(error) => {
            tracing::error!(%error, "failed to load region catalog");
            eprintln!("Error loading map data: {error}");
            return Err(error);
        }
    };

    let runtime_config = RuntimeConfig {
        game_config: game_config_from_env(),
        ..RuntimeConfig::default()
    };
    let runtime = Runtime::builder()
        .catalog(catalog.clone())
        .config(runtime_config)
        .build()?;

    let mut frontend = CliFrontend::new(cli_config, catalog);
    let run_result = frontend.run(runtime.handle()).await;

    runtime.shutdown().await?;
    run_result
}

/// Game rules configuration, overridable from the environment.
///
/// - `STATEMATCH_TIME_LIMIT_SECS` - challenge countdown length (default: 120)
fn game_config_from_env() -> GameConfig {
    std::env::var("STATEMATCH_TIME_LIMIT_SECS")
        .ok()
        .and_then(|value| value.parse().ok())
        .map(GameConfig::with_time_limit)
        .unwrap_or_default()
}
