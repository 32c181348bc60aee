//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends communicate with the game via [`RuntimeHandle`]:
/// - Subscribe to session events
/// - Submit player actions (selections, match attempts, resets)
/// - Query session snapshots
///
/// Frontends do NOT own the runtime - they receive a handle for
/// communication only.
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop.
    ///
    /// Blocks until the user quits the application.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}
