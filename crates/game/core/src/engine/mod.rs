//! Click resolution and session transitions.
//!
//! The [`MatchEngine`] is the authoritative reducer for [`SessionState`].
//! Every mutation, including the clock tick and session reset, flows through
//! the same `execute()` path and returns a typed [`Outcome`] for the caller
//! to translate into rendering and audio commands.

mod outcome;

pub use outcome::{MatchOutcome, MatchResolution, Outcome, SelectionChange};

use crate::catalog::{RegionCatalog, RegionId};
use crate::config::GameConfig;
use crate::scoring::compute_stars;
use crate::session::{GameMode, SessionState};
use crate::timer::TickStatus;

/// Actions initiated by the person playing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    /// Click on an entry in the unmatched list.
    SelectEntry { entry: RegionId },
    /// Click on a map region.
    MatchRegion { region: RegionId },
}

/// Actions initiated by the runtime rather than the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SystemAction {
    /// One second elapsed on the wall clock.
    ClockTick,
    /// Replace the session for the given mode.
    Reset { mode: GameMode },
}

/// Top-level action enum routed through [`MatchEngine::execute`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Player(PlayerAction),
    System(SystemAction),
}

impl Action {
    pub fn select(entry: RegionId) -> Self {
        Self::Player(PlayerAction::SelectEntry { entry })
    }

    pub fn match_region(region: RegionId) -> Self {
        Self::Player(PlayerAction::MatchRegion { region })
    }

    pub fn clock_tick() -> Self {
        Self::System(SystemAction::ClockTick)
    }

    pub fn reset(mode: GameMode) -> Self {
        Self::System(SystemAction::Reset { mode })
    }
}

/// Engine that applies actions to a borrowed [`SessionState`].
///
/// Player actions on a finished session are deliberately silent no-ops:
/// the presentation layer keeps forwarding clicks and the engine decides
/// what they mean.
pub struct MatchEngine<'a> {
    state: &'a mut SessionState,
}

impl<'a> MatchEngine<'a> {
    pub fn new(state: &'a mut SessionState) -> Self {
        Self { state }
    }

    /// Executes an action and returns the typed outcome.
    pub fn execute(
        &mut self,
        catalog: &RegionCatalog,
        config: &GameConfig,
        action: &Action,
    ) -> Outcome {
        match action {
            Action::Player(PlayerAction::SelectEntry { entry }) => {
                Outcome::Selection(self.select_entry(catalog, entry))
            }
            Action::Player(PlayerAction::MatchRegion { region }) => {
                Outcome::Match(self.attempt_match(catalog, region))
            }
            Action::System(SystemAction::ClockTick) => Outcome::Clock(self.clock_tick()),
            Action::System(SystemAction::Reset { mode }) => {
                *self.state = SessionState::new(*mode, config);
                Outcome::Reset { mode: *mode }
            }
        }
    }

    /// Selection rules: toggle off on re-select, otherwise displace any
    /// previous selection. Unknown and already-matched ids are ignored
    /// defensively; the caller only presents unmatched entries.
    fn select_entry(&mut self, catalog: &RegionCatalog, entry: &RegionId) -> SelectionChange {
        if self.state.over {
            return SelectionChange::Ignored;
        }
        if !catalog.contains(entry) || self.state.matched.contains(entry) {
            return SelectionChange::Ignored;
        }

        if self.state.selected.as_ref() == Some(entry) {
            self.state.selected = None;
            SelectionChange::Cleared
        } else {
            self.state.selected = Some(entry.clone());
            SelectionChange::Selected {
                entry: entry.clone(),
            }
        }
    }

    fn attempt_match(&mut self, catalog: &RegionCatalog, region: &RegionId) -> MatchOutcome {
        if self.state.over || self.state.matched.contains(region) {
            return self.match_outcome(MatchResolution::NoOp, false);
        }

        // Every resolution below clears the selection, so take it up front.
        let Some(selected) = self.state.selected.take() else {
            return self.match_outcome(MatchResolution::NoOp, false);
        };

        if !catalog.contains(region) {
            // Map feature without a catalog entry. Clears the selection the
            // same way an ordinary mismatch does.
            return self.match_outcome(MatchResolution::Unrecognized, false);
        }

        if *region == selected {
            self.state.matched.insert(region.clone());
            if self.state.mode == GameMode::Challenge {
                self.state.stars = compute_stars(self.state.matched.len(), catalog.len());
            }

            let completed = self.state.matched.len() == catalog.len();
            if completed {
                self.state.over = true;
                self.state.clock.stop();
            }
            self.match_outcome(MatchResolution::Correct, completed)
        } else {
            self.match_outcome(MatchResolution::Incorrect, false)
        }
    }

    fn match_outcome(&self, resolution: MatchResolution, completed: bool) -> MatchOutcome {
        MatchOutcome {
            resolution,
            matched_count: self.state.matched.len(),
            stars: self.state.stars,
            completed,
        }
    }

    fn clock_tick(&mut self) -> TickStatus {
        let status = self.state.clock.tick();
        if status == TickStatus::Expired {
            self.state.over = true;
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RegionEntry;

    fn catalog(ids: &[&str]) -> RegionCatalog {
        let entries = ids
            .iter()
            .map(|id| RegionEntry {
                id: RegionId::new(*id),
                name: format!("State {id}"),
                abbreviation: id.to_string(),
            })
            .collect();
        RegionCatalog::from_entries(entries).unwrap()
    }

    fn execute(
        state: &mut SessionState,
        catalog: &RegionCatalog,
        config: &GameConfig,
        action: Action,
    ) -> Outcome {
        MatchEngine::new(state).execute(catalog, config, &action)
    }

    #[test]
    fn select_then_match_is_correct() {
        let catalog = catalog(&["CA", "TX"]);
        let config = GameConfig::default();
        let mut state = SessionState::new(GameMode::Practice, &config);

        let outcome = execute(&mut state, &catalog, &config, Action::select("CA".into()));
        assert_eq!(
            outcome,
            Outcome::Selection(SelectionChange::Selected {
                entry: "CA".into()
            })
        );

        let outcome = execute(
            &mut state,
            &catalog,
            &config,
            Action::match_region("CA".into()),
        );
        let Outcome::Match(outcome) = outcome else {
            panic!("expected match outcome");
        };
        assert_eq!(outcome.resolution, MatchResolution::Correct);
        assert_eq!(outcome.matched_count, 1);
        assert!(state.selected.is_none());
    }

    #[test]
    fn matching_an_already_matched_region_is_noop() {
        let catalog = catalog(&["CA", "TX"]);
        let config = GameConfig::default();
        let mut state = SessionState::new(GameMode::Practice, &config);

        execute(&mut state, &catalog, &config, Action::select("CA".into()));
        execute(
            &mut state,
            &catalog,
            &config,
            Action::match_region("CA".into()),
        );

        // Nothing selected, region already matched.
        let outcome = execute(
            &mut state,
            &catalog,
            &config,
            Action::match_region("CA".into()),
        );
        let Outcome::Match(outcome) = outcome else {
            panic!("expected match outcome");
        };
        assert_eq!(outcome.resolution, MatchResolution::NoOp);
        assert_eq!(outcome.matched_count, 1);
    }

    #[test]
    fn mismatch_clears_selection_and_keeps_matched_set() {
        let catalog = catalog(&["TX", "OK"]);
        let config = GameConfig::default();
        let mut state = SessionState::new(GameMode::Practice, &config);

        execute(&mut state, &catalog, &config, Action::select("TX".into()));
        let outcome = execute(
            &mut state,
            &catalog,
            &config,
            Action::match_region("OK".into()),
        );

        let Outcome::Match(outcome) = outcome else {
            panic!("expected match outcome");
        };
        assert_eq!(outcome.resolution, MatchResolution::Incorrect);
        assert_eq!(outcome.matched_count, 0);
        assert!(state.selected.is_none());
        assert!(state.matched.is_empty());
    }

    #[test]
    fn unrecognized_region_clears_selection() {
        let catalog = catalog(&["CA"]);
        let config = GameConfig::default();
        let mut state = SessionState::new(GameMode::Practice, &config);

        execute(&mut state, &catalog, &config, Action::select("CA".into()));
        let outcome = execute(
            &mut state,
            &catalog,
            &config,
            Action::match_region("DC".into()),
        );

        let Outcome::Match(outcome) = outcome else {
            panic!("expected match outcome");
        };
        assert_eq!(outcome.resolution, MatchResolution::Unrecognized);
        assert!(state.selected.is_none());
        assert!(state.matched.is_empty());
    }

    #[test]
    fn match_without_selection_is_noop() {
        let catalog = catalog(&["CA"]);
        let config = GameConfig::default();
        let mut state = SessionState::new(GameMode::Practice, &config);

        let outcome = execute(
            &mut state,
            &catalog,
            &config,
            Action::match_region("CA".into()),
        );
        let Outcome::Match(outcome) = outcome else {
            panic!("expected match outcome");
        };
        assert_eq!(outcome.resolution, MatchResolution::NoOp);
    }

    #[test]
    fn reselecting_toggles_off() {
        let catalog = catalog(&["CA"]);
        let config = GameConfig::default();
        let mut state = SessionState::new(GameMode::Practice, &config);

        execute(&mut state, &catalog, &config, Action::select("CA".into()));
        let outcome = execute(&mut state, &catalog, &config, Action::select("CA".into()));
        assert_eq!(outcome, Outcome::Selection(SelectionChange::Cleared));
        assert!(state.selected.is_none());
    }

    #[test]
    fn selecting_displaces_previous_selection() {
        let catalog = catalog(&["CA", "TX"]);
        let config = GameConfig::default();
        let mut state = SessionState::new(GameMode::Practice, &config);

        execute(&mut state, &catalog, &config, Action::select("CA".into()));
        execute(&mut state, &catalog, &config, Action::select("TX".into()));
        assert_eq!(state.selected, Some("TX".into()));
    }

    #[test]
    fn selecting_matched_or_unknown_entry_is_ignored() {
        let catalog = catalog(&["CA", "TX"]);
        let config = GameConfig::default();
        let mut state = SessionState::new(GameMode::Practice, &config);

        execute(&mut state, &catalog, &config, Action::select("CA".into()));
        execute(
            &mut state,
            &catalog,
            &config,
            Action::match_region("CA".into()),
        );

        let outcome = execute(&mut state, &catalog, &config, Action::select("CA".into()));
        assert_eq!(outcome, Outcome::Selection(SelectionChange::Ignored));

        let outcome = execute(&mut state, &catalog, &config, Action::select("ZZ".into()));
        assert_eq!(outcome, Outcome::Selection(SelectionChange::Ignored));
    }

    #[test]
    fn matching_every_region_completes_the_session() {
        let catalog = catalog(&["CA", "TX"]);
        let config = GameConfig::default();
        let mut state = SessionState::new(GameMode::Challenge, &config);

        execute(&mut state, &catalog, &config, Action::select("CA".into()));
        execute(
            &mut state,
            &catalog,
            &config,
            Action::match_region("CA".into()),
        );

        execute(&mut state, &catalog, &config, Action::select("TX".into()));
        let outcome = execute(
            &mut state,
            &catalog,
            &config,
            Action::match_region("TX".into()),
        );

        let Outcome::Match(outcome) = outcome else {
            panic!("expected match outcome");
        };
        assert!(outcome.completed);
        assert!(state.over);
        assert!(!state.clock.is_running());

        // Terminal until reset.
        let outcome = execute(&mut state, &catalog, &config, Action::select("CA".into()));
        assert_eq!(outcome, Outcome::Selection(SelectionChange::Ignored));
    }

    #[test]
    fn practice_mode_never_earns_stars() {
        let ids: Vec<String> = (0..12).map(|i| format!("S{i:02}")).collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let catalog = catalog(&id_refs);
        let config = GameConfig::default();
        let mut state = SessionState::new(GameMode::Practice, &config);

        for id in &ids[..10] {
            execute(
                &mut state,
                &catalog,
                &config,
                Action::select(id.as_str().into()),
            );
            execute(
                &mut state,
                &catalog,
                &config,
                Action::match_region(id.as_str().into()),
            );
        }

        assert_eq!(state.matched_count(), 10);
        assert_eq!(state.stars, 0);
    }

    #[test]
    fn challenge_mode_earns_stars_at_ten_matches() {
        let ids: Vec<String> = (0..12).map(|i| format!("S{i:02}")).collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let catalog = catalog(&id_refs);
        let config = GameConfig::default();
        let mut state = SessionState::new(GameMode::Challenge, &config);

        for (matched_so_far, id) in ids[..10].iter().enumerate() {
            execute(
                &mut state,
                &catalog,
                &config,
                Action::select(id.as_str().into()),
            );
            let outcome = execute(
                &mut state,
                &catalog,
                &config,
                Action::match_region(id.as_str().into()),
            );
            let Outcome::Match(outcome) = outcome else {
                panic!("expected match outcome");
            };
            assert_eq!(outcome.matched_count, matched_so_far + 1);
        }

        assert_eq!(state.stars, 1);
    }

    #[test]
    fn clock_expiry_ends_the_session_exactly_once() {
        let catalog = catalog(&["CA"]);
        let config = GameConfig::with_time_limit(2);
        let mut state = SessionState::new(GameMode::Challenge, &config);

        assert_eq!(
            execute(&mut state, &catalog, &config, Action::clock_tick()),
            Outcome::Clock(TickStatus::Running { remaining: 1 })
        );
        assert_eq!(
            execute(&mut state, &catalog, &config, Action::clock_tick()),
            Outcome::Clock(TickStatus::Expired)
        );
        assert!(state.over);

        // Later ticks are inert.
        assert_eq!(
            execute(&mut state, &catalog, &config, Action::clock_tick()),
            Outcome::Clock(TickStatus::Idle)
        );
    }

    #[test]
    fn reset_yields_a_clean_session() {
        let catalog = catalog(&["CA", "TX"]);
        let config = GameConfig::default();
        let mut state = SessionState::new(GameMode::Challenge, &config);

        execute(&mut state, &catalog, &config, Action::select("CA".into()));
        execute(
            &mut state,
            &catalog,
            &config,
            Action::match_region("CA".into()),
        );

        let outcome = execute(
            &mut state,
            &catalog,
            &config,
            Action::reset(GameMode::Challenge),
        );
        assert_eq!(
            outcome,
            Outcome::Reset {
                mode: GameMode::Challenge
            }
        );
        assert!(state.matched.is_empty());
        assert!(state.selected.is_none());
        assert_eq!(state.stars, 0);
        assert!(!state.over);
        assert_eq!(
            state.time_remaining(),
            GameConfig::DEFAULT_CHALLENGE_TIME_LIMIT_SECS
        );
    }
}
