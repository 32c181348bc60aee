//! Runtime error surface.

/// Result alias used across the runtime API.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Errors surfaced by [`Runtime`] and [`RuntimeHandle`] operations.
///
/// [`Runtime`]: crate::Runtime
/// [`RuntimeHandle`]: crate::RuntimeHandle
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("session worker is no longer running")]
    WorkerGone,

    #[error("session worker dropped the reply channel")]
    ReplyDropped,

    #[error("runtime builder requires a region catalog")]
    MissingCatalog,

    #[error("failed to join session worker: {0}")]
    WorkerJoin(#[from] tokio::task::JoinError),
}
