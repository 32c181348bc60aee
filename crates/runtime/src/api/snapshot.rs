//! Cloneable view of the session for frontends.

use std::collections::BTreeSet;

use game_core::{GameMode, RegionId, SessionState};

/// Point-in-time copy of the session, for initial renders and queries.
#[derive(Clone, Debug)]
pub struct SessionSnapshot {
    pub mode: GameMode,
    pub selected: Option<RegionId>,
    pub matched: BTreeSet<RegionId>,
    pub stars: u8,
    pub over: bool,
    pub time_remaining: u32,
    /// Catalog size; completion means `matched.len() == total_count`.
    pub total_count: usize,
}

impl SessionSnapshot {
    pub(crate) fn capture(state: &SessionState, total_count: usize) -> Self {
        Self {
            mode: state.mode,
            selected: state.selected.clone(),
            matched: state.matched.clone(),
            stars: state.stars,
            over: state.over,
            time_remaining: state.time_remaining(),
            total_count,
        }
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn is_complete(&self) -> bool {
        self.matched.len() == self.total_count
    }
}
