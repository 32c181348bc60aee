//! Authoritative session state representation.
//!
//! This module owns the data for one game session: mode, selection, matched
//! set, star count, and the countdown clock. Runtime layers clone or query
//! this state but mutate it exclusively through the engine.

use std::collections::BTreeSet;

use crate::catalog::RegionId;
use crate::config::GameConfig;
use crate::timer::Countdown;

/// Play mode for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum GameMode {
    /// Untimed, with hover hints. Never scored.
    Practice,
    /// Timed with a star rating.
    Challenge,
}

/// Canonical snapshot of one session's transient state.
///
/// Replaced wholesale on every reset so a previous session's selection and
/// matches can never leak into a new one.
///
/// Invariants (upheld by [`MatchEngine`]): `matched` only contains catalog
/// ids; `selected` never references a matched id; `stars` is a pure function
/// of `matched.len()` and never decreases within a session.
///
/// [`MatchEngine`]: crate::engine::MatchEngine
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub mode: GameMode,
    /// Currently selected list entry, if any.
    pub selected: Option<RegionId>,
    /// Ids matched so far this session.
    pub matched: BTreeSet<RegionId>,
    /// Star rating, 0..=5. Stays 0 in practice mode.
    pub stars: u8,
    /// Terminal flag: set on countdown expiry or full completion.
    pub over: bool,
    /// Countdown clock. Running only in challenge mode.
    pub clock: Countdown,
}

impl SessionState {
    /// Creates a fresh session for `mode`. Challenge sessions start the
    /// clock at the configured limit; practice sessions leave it idle.
    pub fn new(mode: GameMode, config: &GameConfig) -> Self {
        let clock = match mode {
            GameMode::Practice => Countdown::idle(),
            GameMode::Challenge => Countdown::started(config.challenge_time_limit_secs),
        };

        Self {
            mode,
            selected: None,
            matched: BTreeSet::new(),
            stars: 0,
            over: false,
            clock,
        }
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Seconds left on the clock. Only meaningful in challenge mode.
    pub fn time_remaining(&self) -> u32 {
        self.clock.remaining()
    }
}
