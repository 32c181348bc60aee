//! Session worker task.
//!
//! One task owns the [`SessionState`] and everything flows through it: no
//! locks, no shared mutation. Commands arrive on an mpsc channel, the
//! countdown is driven by a tokio interval (period configurable so tests can
//! run countdown scenarios fast), and results are published as
//! [`GameEvent`]s.

use std::sync::Arc;
use std::time::Duration;

use game_core::{
    Action, GameConfig, GameMode, MatchEngine, MatchResolution, Outcome, RegionCatalog, RegionId,
    SelectionChange, SessionState, TickStatus,
};
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::time::{self, Interval, MissedTickBehavior};

use crate::api::{GameEvent, SessionSnapshot};

/// Commands accepted by the session worker.
pub(crate) enum Command {
    SelectEntry { entry: RegionId },
    MatchRegion { region: RegionId },
    Reset { mode: GameMode },
    Snapshot { reply: oneshot::Sender<SessionSnapshot> },
}

pub(crate) struct SessionWorker {
    state: SessionState,
    catalog: Arc<RegionCatalog>,
    config: GameConfig,
    tick_period: Duration,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<GameEvent>,
}

impl SessionWorker {
    pub(crate) fn new(
        state: SessionState,
        catalog: Arc<RegionCatalog>,
        config: GameConfig,
        tick_period: Duration,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<GameEvent>,
    ) -> Self {
        Self {
            state,
            catalog,
            config,
            tick_period,
            command_rx,
            event_tx,
        }
    }

    pub(crate) async fn run(mut self) {
        let mut ticker = time::interval(self.tick_period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // interval() yields immediately on the first tick; push the first
        // countdown step a full period out.
        ticker.reset();

        loop {
            eprintln!("DEBUG worker: top of loop, clock_live={}", self.clock_live());
            tokio::select! {
                command = self.command_rx.recv() => {
                    eprintln!("DEBUG worker: got command, is_some={}", command.is_some());
                    match command {
                        Some(command) => self.handle_command(command, &mut ticker),
                        // All handles dropped: the runtime is shutting down.
                        None => break,
                    }
                    eprintln!("DEBUG worker: handled command");
                }
                _ = ticker.tick(), if self.clock_live() => {
                    eprintln!("DEBUG worker: tick");
                    self.handle_clock_tick()
                },
            }
        }

        tracing::debug!("session worker stopped");
    }

    /// The interval only drives the engine while a challenge clock is live.
    fn clock_live(&self) -> bool {
        self.state.mode == GameMode::Challenge && self.state.clock.is_running()
    }

    fn handle_command(&mut self, command: Command, ticker: &mut Interval) {
        match command {
            Command::SelectEntry { entry } => self.select_entry(entry),
            Command::MatchRegion { region } => self.match_region(region),
            Command::Reset { mode } => self.reset(mode, ticker),
            Command::Snapshot { reply } => {
                let snapshot = SessionSnapshot::capture(&self.state, self.catalog.len());
                // The caller may have given up waiting; nothing to do then.
                let _ = reply.send(snapshot);
            }
        }
    }

    fn select_entry(&mut self, entry: RegionId) {
        let outcome = self.execute(Action::select(entry.clone()));

        match outcome {
            Outcome::Selection(SelectionChange::Selected { entry }) => {
                tracing::debug!(%entry, "entry selected");
                self.publish(GameEvent::SelectionChanged {
                    selected: Some(entry),
                });
            }
            Outcome::Selection(SelectionChange::Cleared) => {
                tracing::debug!(%entry, "selection toggled off");
                self.publish(GameEvent::SelectionChanged { selected: None });
            }
            Outcome::Selection(SelectionChange::Ignored) => {
                tracing::debug!(%entry, "selection ignored");
            }
            _ => {}
        }
    }

    fn match_region(&mut self, region: RegionId) {
        let stars_before = self.state.stars;
        let outcome = self.execute(Action::match_region(region.clone()));

        let Outcome::Match(outcome) = outcome else {
            return;
        };

        match outcome.resolution {
            MatchResolution::Unrecognized => {
                // Distinct from an ordinary mismatch for diagnostics.
                tracing::warn!(%region, "map click on feature with no catalog entry");
            }
            resolution => {
                tracing::debug!(%region, %resolution, matched = outcome.matched_count, "match attempt");
            }
        }

        self.publish(GameEvent::MatchResolved {
            region,
            resolution: outcome.resolution,
            matched_count: outcome.matched_count,
            total_count: self.catalog.len(),
        });

        if outcome.stars > stars_before {
            tracing::info!(stars = outcome.stars, "star rating increased");
            self.publish(GameEvent::StarsEarned {
                stars: outcome.stars,
            });
        }

        if outcome.completed {
            tracing::info!(matched = outcome.matched_count, "all regions matched");
            self.publish(GameEvent::SessionCompleted {
                matched_count: outcome.matched_count,
                time_remaining: self.state.time_remaining(),
            });
        }
    }

    fn reset(&mut self, mode: GameMode, ticker: &mut Interval) {
        self.execute(Action::reset(mode));
        // Realign the interval so the fresh clock gets a full first second.
        ticker.reset();

        tracing::info!(%mode, "session reset");
        self.publish(GameEvent::SessionReset {
            mode,
            time_remaining: self.state.time_remaining(),
        });
    }

    fn handle_clock_tick(&mut self) {
        let outcome = self.execute(Action::clock_tick());

        match outcome {
            Outcome::Clock(TickStatus::Running { remaining }) => {
                self.publish(GameEvent::TimerTick { remaining });
            }
            Outcome::Clock(TickStatus::Expired) => {
                tracing::info!("challenge countdown expired");
                self.publish(GameEvent::TimeExpired);
            }
            _ => {}
        }
    }

    fn execute(&mut self, action: Action) -> Outcome {
        MatchEngine::new(&mut self.state).execute(&self.catalog, &self.config, &action)
    }

    fn publish(&self, event: GameEvent) {
        // No subscribers is normal (e.g. headless tests driving snapshots).
        if self.event_tx.send(event).is_err() {
            tracing::trace!("no subscribers for session event");
        }
    }
}
