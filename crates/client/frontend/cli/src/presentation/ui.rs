//! Top-level frame composition.

use client_frontend_core::{MessageLog, ViewKind, ViewModel};
use ratatui::Frame;

use crate::config::CliConfig;
use crate::presentation::{layout::GameLayout, widgets};
use crate::state::AppState;

pub fn render(
    frame: &mut Frame,
    view_model: &ViewModel,
    app_state: &AppState,
    messages: &MessageLog,
    config: &CliConfig,
) {
    let area = frame.area();

    match app_state.view {
        ViewKind::Home => widgets::home::render(frame, area, app_state),
        ViewKind::Game => {
            let game = GameLayout::compute(area, config.message_panel_height);
            widgets::header::render(frame, game.header, view_model);
            widgets::map::render(frame, game.map, view_model, app_state);
            widgets::list::render(frame, game.list, view_model, app_state);
            widgets::messages::render(frame, game.messages, messages);
            widgets::footer::render(frame, game.footer, view_model, app_state);
        }
    }

    if let Some(modal) = app_state.modal {
        widgets::dialog::render(frame, area, modal, view_model);
    }
}
