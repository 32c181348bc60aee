//! Footer: key hints and the practice-mode name hint.

use client_frontend_core::ViewModel;
use game_core::{GameMode, RegionId};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::{map_layout, theme};
use crate::state::{AppState, Focus};

const GAME_HINTS: &str =
    "Tab focus · arrows move · Enter select/match · c challenge · p practice · r reset · Esc home · q quit";

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, app_state: &AppState) {
    let mut spans = Vec::new();

    // The tooltip analog: practice mode reveals the cursored region's name.
    if view_model.mode == GameMode::Practice && app_state.focus == Focus::Map {
        let (row, col) = app_state.map_cursor;
        if let Some(name) = map_layout::code_at(row, col)
            .and_then(|code| view_model.region_name(&RegionId::new(code)))
        {
            spans.push(Span::styled(
                format!("▸ {name}  "),
                Style::default()
                    .fg(theme::HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            ));
        }
    }

    spans.push(Span::styled(GAME_HINTS, Style::default().fg(theme::DIM)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
