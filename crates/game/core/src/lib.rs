//! Deterministic matching-game logic and data types shared across clients.
//!
//! `game-core` defines the canonical rules (actions, engine, session state)
//! and exposes pure APIs that can be reused by both the runtime and offline
//! tools. All state mutation flows through [`engine::MatchEngine`], and
//! supporting crates depend on the types re-exported here.
pub mod catalog;
pub mod config;
pub mod engine;
pub mod scoring;
pub mod session;
pub mod timer;

pub use catalog::{CatalogError, RegionCatalog, RegionEntry, RegionId};
pub use config::GameConfig;
pub use engine::{
    Action, MatchEngine, MatchOutcome, MatchResolution, Outcome, PlayerAction, SelectionChange,
    SystemAction,
};
pub use scoring::compute_stars;
pub use session::{GameMode, SessionState};
pub use timer::{Countdown, TickStatus};
