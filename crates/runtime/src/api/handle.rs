//! Cloneable client façade over the session worker.

use game_core::{GameMode, RegionId};
use tokio::sync::{broadcast, mpsc, oneshot};

use crate::api::{GameEvent, Result, RuntimeError, SessionSnapshot};
use crate::worker::Command;

/// Handle for submitting player actions and observing session events.
///
/// Handles are cheap to clone and can be shared across tasks; they do not
/// own the runtime.
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<GameEvent>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_tx: broadcast::Sender<GameEvent>,
    ) -> Self {
        Self {
            command_tx,
            event_tx,
        }
    }

    /// Forward a click on an unmatched list entry.
    pub async fn select_entry(&self, entry: RegionId) -> Result<()> {
        self.send(Command::SelectEntry { entry }).await
    }

    /// Forward a click on a map region.
    pub async fn match_region(&self, region: RegionId) -> Result<()> {
        self.send(Command::MatchRegion { region }).await
    }

    /// Replace the session for the given mode.
    pub async fn reset(&self, mode: GameMode) -> Result<()> {
        self.send(Command::Reset { mode }).await
    }

    /// Query a point-in-time copy of the session.
    pub async fn snapshot(&self) -> Result<SessionSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Snapshot { reply: reply_tx }).await?;
        reply_rx.await.map_err(|_| RuntimeError::ReplyDropped)
    }

    /// Subscribe to session events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.event_tx.subscribe()
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::WorkerGone)
    }
}
