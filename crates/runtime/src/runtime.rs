//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker, wires up the command/event channels,
//! and exposes a builder-based API for clients to drive the game.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use game_core::{GameConfig, GameMode, RegionCatalog, SessionState};

use crate::api::{GameEvent, Result, RuntimeError, RuntimeHandle};
use crate::worker::{Command, SessionWorker};

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Wall-clock period of one countdown tick. One second in production;
    /// tests shrink it to run expiry scenarios quickly.
    pub tick_period: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            tick_period: Duration::from_secs(1),
        }
    }
}

/// Main runtime that owns the session worker.
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to session events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.handle.subscribe_events()
    }

    /// Shutdown the runtime gracefully.
    ///
    /// Dropping the last handle closes the command channel, which stops the
    /// worker; this then waits for it to finish.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    catalog: Option<Arc<RegionCatalog>>,
    initial_mode: GameMode,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            catalog: None,
            initial_mode: GameMode::Practice,
        }
    }

    /// Override runtime configuration.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the required region catalog.
    pub fn catalog(mut self, catalog: impl Into<Arc<RegionCatalog>>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    /// Mode of the first session (default: practice).
    pub fn initial_mode(mut self, mode: GameMode) -> Self {
        self.initial_mode = mode;
        self
    }

    /// Build the runtime and spawn the session worker.
    pub fn build(self) -> Result<Runtime> {
        let catalog = self.catalog.ok_or(RuntimeError::MissingCatalog)?;

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let (event_tx, _event_rx) = broadcast::channel::<GameEvent>(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_tx.clone());

        let initial_state = SessionState::new(self.initial_mode, &self.config.game_config);
        let worker = SessionWorker::new(
            initial_state,
            catalog,
            self.config.game_config,
            self.config.tick_period,
            command_rx,
            event_tx,
        );

        let worker_handle = tokio::spawn(worker.run());

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }
}
