//! Event loop orchestrating runtime events, user input, and rendering.
//!
//! Coordinates three concerns:
//! - Runtime event consumption and view-model updates
//! - Keyboard/mouse input, resolved against the current UI state
//! - Rendering and the mismatch flash timer

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{
    self as term_event, Event as TermEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use game_core::{GameMode, RegionId};
use runtime::{GameEvent, RuntimeHandle};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::time::{self, Duration};

use client_frontend_core::{
    AudioCues, MessageLog, ModalKind, ViewKind, ViewModel,
};

use crate::config::CliConfig;
use crate::cues::TerminalBell;
use crate::input::{Direction, InputHandler, KeyAction};
use crate::presentation::{
    layout::{self, GameLayout, ListGrid},
    map_layout,
    terminal::Tui,
    ui,
};
use crate::state::{AppState, Focus, HomeChoice};

const FRAME_INTERVAL_MS: u64 = 16;
/// How long a mismatched region stays red.
const MISMATCH_FLASH: Duration = Duration::from_millis(500);

/// Event loop owning the view model and UI state.
pub struct EventLoop {
    handle: RuntimeHandle,
    event_rx: broadcast::Receiver<GameEvent>,
    view_model: ViewModel,
    app_state: AppState,
    messages: MessageLog,
    bell: TerminalBell,
    config: CliConfig,
    flash_until: Option<Instant>,
}

impl EventLoop {
    pub fn new(
        handle: RuntimeHandle,
        event_rx: broadcast::Receiver<GameEvent>,
        view_model: ViewModel,
        config: CliConfig,
    ) -> Self {
        let bell = TerminalBell::new(config.sound_enabled);
        Self {
            handle,
            event_rx,
            view_model,
            app_state: AppState::new(),
            messages: MessageLog::default(),
            bell,
            config,
            flash_until: None,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;

        loop {
            tokio::select! {
                result = self.event_rx.recv() => {
                    if self.handle_runtime_channel(result, terminal)? {
                        break;
                    }
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_frame_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        terminal.draw(|frame| {
            ui::render(
                frame,
                &self.view_model,
                &self.app_state,
                &self.messages,
                &self.config,
            )
        })?;
        Ok(())
    }

    fn handle_runtime_channel(
        &mut self,
        result: std::result::Result<GameEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                if self.apply_runtime_event(event) {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("dropped {} stale events", skipped);
                Ok(false)
            }
        }
    }

    /// Updates the view model and UI bookkeeping; returns whether to redraw.
    fn apply_runtime_event(&mut self, event: GameEvent) -> bool {
        let impact = self.view_model.apply_event(&event);
        if let Some(cue) = impact.cue {
            self.bell.play_cue(cue);
        }

        let noted = self.note_event(&event);
        self.app_state
            .clamp_list_cursor(self.view_model.unmatched_entries().len());

        impact.requires_redraw || noted
    }

    /// Messages, dialogs, and the flash timer; returns whether anything
    /// user-visible changed beyond the view model itself.
    fn note_event(&mut self, event: &GameEvent) -> bool {
        use game_core::MatchResolution;

        match event {
            GameEvent::MatchResolved {
                region, resolution, ..
            } => match resolution {
                MatchResolution::Correct => {
                    self.flash_until = None;
                    let name = self.region_label(region);
                    self.messages.push(format!("Matched {name}!"));
                    true
                }
                MatchResolution::Incorrect => {
                    self.flash_until = Some(Instant::now() + MISMATCH_FLASH);
                    self.messages.push("Wrong region. Selection cleared.");
                    true
                }
                MatchResolution::Unrecognized => {
                    self.flash_until = Some(Instant::now() + MISMATCH_FLASH);
                    self.messages.push("That area is not a matchable state.");
                    true
                }
                MatchResolution::NoOp => false,
            },
            GameEvent::StarsEarned { stars } => {
                let plural = if *stars == 1 { "" } else { "s" };
                self.messages
                    .push(format!("You earned {stars} star{plural}!"));
                true
            }
            GameEvent::SessionCompleted { matched_count, .. } => {
                self.messages
                    .push(format!("Congratulations! All {matched_count} states matched!"));
                if self.view_model.mode == GameMode::Challenge {
                    self.app_state.open_modal(ModalKind::ChallengeResults);
                }
                true
            }
            GameEvent::TimeExpired => {
                self.messages.push("Time's up!");
                self.app_state.open_modal(ModalKind::ChallengeResults);
                true
            }
            GameEvent::SessionReset { mode, .. } => {
                self.messages.push(format!("Started a {mode} session."));
                true
            }
            GameEvent::SelectionChanged { .. } | GameEvent::TimerTick { .. } => false,
        }
    }

    async fn handle_frame_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        let mut redraw = false;

        if let Some(deadline) = self.flash_until
            && Instant::now() >= deadline
        {
            self.flash_until = None;
            redraw |= self.view_model.clear_mismatch_flash();
        }

        while term_event::poll(Duration::from_millis(0))? {
            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = InputHandler::handle_key(key, &self.app_state);
                    let (quit, changed) = self.apply_key_action(action, terminal).await?;
                    if quit {
                        return Ok(true);
                    }
                    redraw |= changed;
                }
                TermEvent::Mouse(mouse) => {
                    redraw |= self.handle_mouse(mouse, terminal).await?;
                }
                TermEvent::Resize(_, _) => {
                    redraw = true;
                }
                _ => {}
            }
        }

        if redraw {
            self.render(terminal)?;
        }
        Ok(false)
    }

    /// Applies one semantic key action. Returns (quit, redraw).
    async fn apply_key_action(
        &mut self,
        action: KeyAction,
        terminal: &Tui,
    ) -> Result<(bool, bool)> {
        match action {
            KeyAction::None => Ok((false, false)),
            KeyAction::Quit => Ok((true, false)),

            KeyAction::HomeMove(delta) => {
                self.app_state.move_home_cursor(delta);
                Ok((false, true))
            }
            KeyAction::HomeActivate => match self.app_state.home_choice() {
                HomeChoice::Practice => {
                    self.start_practice().await?;
                    Ok((false, true))
                }
                HomeChoice::Challenge => {
                    self.app_state.open_modal(ModalKind::ChallengeStart);
                    Ok((false, true))
                }
                HomeChoice::Quit => Ok((true, false)),
            },
            KeyAction::StartPractice => {
                self.start_practice().await?;
                Ok((false, true))
            }

            KeyAction::FocusNext => {
                self.app_state.toggle_focus();
                Ok((false, true))
            }
            KeyAction::Move(direction) => {
                self.move_cursor(direction, terminal)?;
                Ok((false, true))
            }
            KeyAction::Activate => {
                self.activate_focused().await?;
                Ok((false, false))
            }
            KeyAction::StartChallengeDialog => {
                // Inside the game view the challenge dialog only opens from
                // practice mode.
                if self.app_state.view == ViewKind::Home
                    || self.view_model.mode == GameMode::Practice
                {
                    self.app_state.open_modal(ModalKind::ChallengeStart);
                }
                Ok((false, true))
            }
            KeyAction::SwitchToPractice => {
                if self.view_model.mode == GameMode::Challenge {
                    self.handle.reset(GameMode::Practice).await?;
                }
                Ok((false, false))
            }
            KeyAction::ResetSession => {
                self.handle.reset(self.view_model.mode).await?;
                Ok((false, false))
            }
            KeyAction::GoHome => {
                self.handle.reset(GameMode::Practice).await?;
                self.app_state.go_home();
                Ok((false, true))
            }

            KeyAction::DialogConfirm => {
                self.confirm_dialog().await?;
                Ok((false, true))
            }
            KeyAction::DialogCancel => {
                self.cancel_dialog().await?;
                Ok((false, true))
            }
        }
    }

    async fn confirm_dialog(&mut self) -> Result<()> {
        match self.app_state.modal {
            Some(ModalKind::ChallengeStart) | Some(ModalKind::ChallengeResults) => {
                self.app_state.close_modal();
                self.app_state.enter_game();
                self.handle.reset(GameMode::Challenge).await?;
            }
            None => {}
        }
        Ok(())
    }

    async fn cancel_dialog(&mut self) -> Result<()> {
        match self.app_state.modal {
            Some(ModalKind::ChallengeStart) => {
                self.app_state.close_modal();
                // Cancelling the challenge confirmation reverts to a fresh
                // practice session when the game view is showing.
                if self.app_state.view == ViewKind::Game {
                    self.handle.reset(GameMode::Practice).await?;
                }
            }
            Some(ModalKind::ChallengeResults) => {
                self.app_state.close_modal();
                self.handle.reset(GameMode::Practice).await?;
                self.app_state.go_home();
            }
            None => {}
        }
        Ok(())
    }

    async fn start_practice(&mut self) -> Result<()> {
        self.app_state.enter_game();
        self.handle.reset(GameMode::Practice).await?;
        Ok(())
    }

    fn move_cursor(&mut self, direction: Direction, terminal: &Tui) -> Result<()> {
        match self.app_state.focus {
            Focus::Map => {
                self.app_state.map_cursor = map_layout::step(self.app_state.map_cursor, direction);
            }
            Focus::List => {
                let game = self.game_layout(terminal)?;
                let grid = ListGrid::new(layout::inner(game.list));
                let len = self.view_model.unmatched_entries().len();
                self.app_state.list_cursor =
                    grid.move_cursor(self.app_state.list_cursor, direction, len);
            }
        }
        Ok(())
    }

    async fn activate_focused(&mut self) -> Result<()> {
        match self.app_state.focus {
            Focus::List => {
                let entry = self
                    .view_model
                    .unmatched_entries()
                    .get(self.app_state.list_cursor)
                    .map(|entry| entry.id.clone());
                if let Some(entry) = entry {
                    self.handle.select_entry(entry).await?;
                }
            }
            Focus::Map => {
                let (row, col) = self.app_state.map_cursor;
                if let Some(code) = map_layout::code_at(row, col) {
                    self.handle.match_region(RegionId::new(code)).await?;
                }
            }
        }
        Ok(())
    }

    async fn handle_mouse(&mut self, mouse: MouseEvent, terminal: &Tui) -> Result<bool> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(false);
        }
        if self.app_state.view != ViewKind::Game || self.app_state.modal.is_some() {
            return Ok(false);
        }

        let game = self.game_layout(terminal)?;

        if let Some(cell) = map_layout::hit_test(layout::inner(game.map), mouse.column, mouse.row) {
            self.app_state.focus = Focus::Map;
            self.app_state.map_cursor = cell;
            if let Some(code) = map_layout::code_at(cell.0, cell.1) {
                self.handle.match_region(RegionId::new(code)).await?;
            }
            return Ok(true);
        }

        let grid = ListGrid::new(layout::inner(game.list));
        if let Some(index) = grid.hit_test(mouse.column, mouse.row) {
            let entry = self
                .view_model
                .unmatched_entries()
                .get(index)
                .map(|entry| entry.id.clone());
            if let Some(entry) = entry {
                self.app_state.focus = Focus::List;
                self.app_state.list_cursor = index;
                self.handle.select_entry(entry).await?;
                return Ok(true);
            }
        }

        Ok(false)
    }

    fn game_layout(&self, terminal: &Tui) -> Result<GameLayout> {
        let size = terminal.size()?;
        let area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
        Ok(GameLayout::compute(area, self.config.message_panel_height))
    }

    fn region_label(&self, region: &RegionId) -> String {
        self.view_model
            .region_name(region)
            .map(str::to_string)
            .unwrap_or_else(|| region.to_string())
    }
}
