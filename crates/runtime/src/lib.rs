//! Runtime orchestration for the matching-game session.
//!
//! This crate wires the pure `game-core` engine to the outside world: a
//! single worker task owns the session state, consumes commands from a
//! channel, drives the countdown off a tokio interval, and publishes typed
//! events on a broadcast bus. Consumers embed [`Runtime`] and interact with
//! the session through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - `worker` keeps the session task internal to the crate
pub mod api;
pub mod runtime;

mod worker;

pub use api::{GameEvent, Result, RuntimeError, RuntimeHandle, SessionSnapshot};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
