//! Render-ready session state, updated incrementally from runtime events.

use std::collections::BTreeSet;
use std::sync::Arc;

use game_core::{GameMode, MatchResolution, RegionCatalog, RegionEntry, RegionId};
use runtime::{GameEvent, SessionSnapshot};

use crate::cues::CueKind;
use crate::event::EventImpact;
use crate::presentation::RegionVisual;

/// How a challenge session ended; drives the results dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionConclusion {
    /// Every region matched before the clock ran out.
    Completed {
        matched_count: usize,
        time_remaining: u32,
    },
    /// The countdown expired first.
    TimeUp { matched_count: usize },
}

/// Single source of truth for what the frontend draws.
///
/// Owned by the frontend event loop and updated via [`ViewModel::apply_event`];
/// the returned [`EventImpact`] tells the loop whether to redraw and which
/// cue to play.
#[derive(Clone, Debug)]
pub struct ViewModel {
    catalog: Arc<RegionCatalog>,
    pub mode: GameMode,
    pub selected: Option<RegionId>,
    pub matched: BTreeSet<RegionId>,
    pub stars: u8,
    pub over: bool,
    pub time_remaining: u32,
    /// Region that just resolved as a mismatch; cleared by the frontend
    /// after its flash interval.
    pub recent_mismatch: Option<RegionId>,
    /// Latched when a challenge session ends.
    pub conclusion: Option<SessionConclusion>,
}

impl ViewModel {
    pub fn new(catalog: Arc<RegionCatalog>, snapshot: &SessionSnapshot) -> Self {
        Self {
            catalog,
            mode: snapshot.mode,
            selected: snapshot.selected.clone(),
            matched: snapshot.matched.clone(),
            stars: snapshot.stars,
            over: snapshot.over,
            time_remaining: snapshot.time_remaining,
            recent_mismatch: None,
            conclusion: None,
        }
    }

    /// Applies one runtime event.
    pub fn apply_event(&mut self, event: &GameEvent) -> EventImpact {
        match event {
            GameEvent::SelectionChanged { selected } => {
                self.selected = selected.clone();
                EventImpact::redraw()
            }
            GameEvent::MatchResolved {
                region, resolution, ..
            } => self.apply_resolution(region, *resolution),
            GameEvent::StarsEarned { stars } => {
                self.stars = *stars;
                EventImpact::redraw()
            }
            GameEvent::TimerTick { remaining } => {
                self.time_remaining = *remaining;
                EventImpact::redraw()
            }
            GameEvent::TimeExpired => {
                self.over = true;
                self.time_remaining = 0;
                self.conclusion = Some(SessionConclusion::TimeUp {
                    matched_count: self.matched.len(),
                });
                EventImpact::redraw_with_cue(CueKind::Incorrect)
            }
            GameEvent::SessionCompleted {
                matched_count,
                time_remaining,
            } => {
                self.over = true;
                self.conclusion = Some(SessionConclusion::Completed {
                    matched_count: *matched_count,
                    time_remaining: *time_remaining,
                });
                EventImpact::redraw()
            }
            GameEvent::SessionReset {
                mode,
                time_remaining,
            } => {
                self.mode = *mode;
                self.selected = None;
                self.matched.clear();
                self.stars = 0;
                self.over = false;
                self.time_remaining = *time_remaining;
                self.recent_mismatch = None;
                self.conclusion = None;
                EventImpact::redraw()
            }
        }
    }

    fn apply_resolution(&mut self, region: &RegionId, resolution: MatchResolution) -> EventImpact {
        match resolution {
            MatchResolution::Correct => {
                self.matched.insert(region.clone());
                self.selected = None;
                self.recent_mismatch = None;
                EventImpact::redraw_with_cue(CueKind::Correct)
            }
            MatchResolution::Incorrect | MatchResolution::Unrecognized => {
                self.selected = None;
                self.recent_mismatch = Some(region.clone());
                EventImpact::redraw_with_cue(CueKind::Incorrect)
            }
            MatchResolution::NoOp => EventImpact::none(),
        }
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn total_count(&self) -> usize {
        self.catalog.len()
    }

    /// Unmatched entries in list order (sorted by abbreviation).
    pub fn unmatched_entries(&self) -> Vec<&RegionEntry> {
        self.catalog
            .by_abbreviation()
            .into_iter()
            .filter(|entry| !self.matched.contains(&entry.id))
            .collect()
    }

    pub fn region_name(&self, id: &RegionId) -> Option<&str> {
        self.catalog.get(id).map(|entry| entry.name.as_str())
    }

    /// Visual state for a map region, before any cursor highlight.
    pub fn region_visual(&self, id: &RegionId) -> RegionVisual {
        if self.matched.contains(id) {
            RegionVisual::Correct
        } else if self.recent_mismatch.as_ref() == Some(id) {
            RegionVisual::Incorrect
        } else {
            RegionVisual::Default
        }
    }

    /// Countdown display, `MM:SS`. Suppressed (None) in practice mode.
    pub fn clock_text(&self) -> Option<String> {
        match self.mode {
            GameMode::Practice => None,
            GameMode::Challenge => Some(format!(
                "{:02}:{:02}",
                self.time_remaining / 60,
                self.time_remaining % 60
            )),
        }
    }

    /// Low-time warning threshold for the countdown display.
    pub fn low_time(&self) -> bool {
        self.mode == GameMode::Challenge && self.time_remaining <= 10
    }

    /// Drops the mismatch flash; called by the frontend after its flash
    /// interval.
    pub fn clear_mismatch_flash(&mut self) -> bool {
        self.recent_mismatch.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::RegionEntry;
    use runtime::GameEvent;

    fn catalog() -> Arc<RegionCatalog> {
        let entries = ["CA", "TX", "OK"]
            .iter()
            .map(|id| RegionEntry {
                id: RegionId::new(*id),
                name: format!("State {id}"),
                abbreviation: id.to_string(),
            })
            .collect();
        Arc::new(RegionCatalog::from_entries(entries).unwrap())
    }

    fn snapshot(catalog: &RegionCatalog) -> SessionSnapshot {
        SessionSnapshot {
            mode: GameMode::Practice,
            selected: None,
            matched: BTreeSet::new(),
            stars: 0,
            over: false,
            time_remaining: 0,
            total_count: catalog.len(),
        }
    }

    #[test]
    fn correct_match_updates_list_and_cues() {
        let catalog = catalog();
        let mut vm = ViewModel::new(catalog.clone(), &snapshot(&catalog));

        let impact = vm.apply_event(&GameEvent::MatchResolved {
            region: "CA".into(),
            resolution: MatchResolution::Correct,
            matched_count: 1,
            total_count: 3,
        });

        assert!(impact.requires_redraw);
        assert_eq!(impact.cue, Some(CueKind::Correct));
        assert_eq!(vm.matched_count(), 1);
        assert_eq!(vm.region_visual(&"CA".into()), RegionVisual::Correct);
        assert!(vm.unmatched_entries().iter().all(|e| e.id.as_str() != "CA"));
    }

    #[test]
    fn mismatch_flashes_then_clears() {
        let catalog = catalog();
        let mut vm = ViewModel::new(catalog.clone(), &snapshot(&catalog));

        let impact = vm.apply_event(&GameEvent::MatchResolved {
            region: "OK".into(),
            resolution: MatchResolution::Incorrect,
            matched_count: 0,
            total_count: 3,
        });

        assert_eq!(impact.cue, Some(CueKind::Incorrect));
        assert_eq!(vm.region_visual(&"OK".into()), RegionVisual::Incorrect);

        assert!(vm.clear_mismatch_flash());
        assert_eq!(vm.region_visual(&"OK".into()), RegionVisual::Default);
    }

    #[test]
    fn noop_resolution_has_no_impact() {
        let catalog = catalog();
        let mut vm = ViewModel::new(catalog.clone(), &snapshot(&catalog));

        let impact = vm.apply_event(&GameEvent::MatchResolved {
            region: "CA".into(),
            resolution: MatchResolution::NoOp,
            matched_count: 0,
            total_count: 3,
        });

        assert!(!impact.requires_redraw);
        assert!(impact.cue.is_none());
    }

    #[test]
    fn clock_text_is_suppressed_in_practice() {
        let catalog = catalog();
        let mut vm = ViewModel::new(catalog.clone(), &snapshot(&catalog));
        assert_eq!(vm.clock_text(), None);

        vm.apply_event(&GameEvent::SessionReset {
            mode: GameMode::Challenge,
            time_remaining: 119,
        });
        assert_eq!(vm.clock_text().as_deref(), Some("01:59"));
    }

    #[test]
    fn expiry_latches_a_time_up_conclusion() {
        let catalog = catalog();
        let mut vm = ViewModel::new(catalog.clone(), &snapshot(&catalog));
        vm.apply_event(&GameEvent::SessionReset {
            mode: GameMode::Challenge,
            time_remaining: 120,
        });

        let impact = vm.apply_event(&GameEvent::TimeExpired);
        assert_eq!(impact.cue, Some(CueKind::Incorrect));
        assert!(vm.over);
        assert_eq!(
            vm.conclusion,
            Some(SessionConclusion::TimeUp { matched_count: 0 })
        );
    }

    #[test]
    fn reset_clears_everything() {
        let catalog = catalog();
        let mut vm = ViewModel::new(catalog.clone(), &snapshot(&catalog));

        vm.apply_event(&GameEvent::MatchResolved {
            region: "CA".into(),
            resolution: MatchResolution::Correct,
            matched_count: 1,
            total_count: 3,
        });
        vm.apply_event(&GameEvent::SessionReset {
            mode: GameMode::Practice,
            time_remaining: 0,
        });

        assert!(vm.matched.is_empty());
        assert!(vm.selected.is_none());
        assert_eq!(vm.stars, 0);
        assert!(!vm.over);
        assert!(vm.conclusion.is_none());
    }
}
