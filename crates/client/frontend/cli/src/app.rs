//! CLI frontend: terminal lifecycle and event loop ownership.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use game_core::RegionCatalog;
use runtime::RuntimeHandle;

use client_frontend_core::{Frontend, ViewModel};

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal::{self, TerminalGuard};

/// Terminal frontend. Owns the catalog reference for rendering; the session
/// itself lives behind the runtime handle.
pub struct CliFrontend {
    config: CliConfig,
    catalog: Arc<RegionCatalog>,
}

impl CliFrontend {
    pub fn new(config: CliConfig, catalog: Arc<RegionCatalog>) -> Self {
        Self { config, catalog }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        // Subscribe before the first snapshot so no event can slip between.
        let event_rx = handle.subscribe_events();
        let snapshot = handle.snapshot().await?;
        let view_model = ViewModel::new(self.catalog.clone(), &snapshot);

        let mut terminal = terminal::init()?;
        let _guard = TerminalGuard;

        let event_loop = EventLoop::new(handle, event_rx, view_model, self.config.clone());
        let result = event_loop.run(&mut terminal).await;

        terminal::restore()?;
        result
    }
}
