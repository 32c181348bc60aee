//! Session events published on the broadcast bus.

use game_core::{GameMode, MatchResolution, RegionId};

/// High-level occurrences in the session, published after each engine step.
///
/// Frontends subscribe to these to update rendering and play cues; the
/// worker never talks to a UI directly.
#[derive(Clone, Debug)]
pub enum GameEvent {
    /// The selected list entry changed (`None` after toggle-off or any
    /// match attempt).
    SelectionChanged { selected: Option<RegionId> },

    /// A map click resolved against the current selection. Emitted for
    /// every attempt, including no-ops.
    MatchResolved {
        region: RegionId,
        resolution: MatchResolution,
        matched_count: usize,
        total_count: usize,
    },

    /// The star rating increased (challenge mode only).
    StarsEarned { stars: u8 },

    /// One second elapsed on the challenge countdown.
    TimerTick { remaining: u32 },

    /// The countdown reached zero. Fired exactly once per started clock.
    TimeExpired,

    /// Every region was matched.
    SessionCompleted {
        matched_count: usize,
        time_remaining: u32,
    },

    /// The session was replaced for the given mode. `time_remaining` is the
    /// freshly started clock (0 for practice).
    SessionReset { mode: GameMode, time_remaining: u32 },
}
