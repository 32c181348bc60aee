//! Unmatched-entry list panel, laid out as a column-major grid.

use client_frontend_core::ViewModel;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::{
    layout::{self, ListGrid},
    theme,
};
use crate::state::{AppState, Focus};

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, app_state: &AppState) {
    let unmatched = view_model.unmatched_entries();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("States ({} left)", unmatched.len()));
    frame.render_widget(block, area);

    let inner = layout::inner(area);
    let grid = ListGrid::new(inner);

    for (index, entry) in unmatched.iter().enumerate() {
        if !grid.is_visible(index) {
            continue;
        }

        let selected = view_model.selected.as_ref() == Some(&entry.id);
        let cursor_here = app_state.focus == Focus::List && app_state.list_cursor == index;

        let mut style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(theme::HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        if cursor_here {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let cell = grid.cell(index);
        let text_area = Rect {
            width: cell.width - 1,
            ..cell
        };
        frame.render_widget(
            Paragraph::new(entry.abbreviation.as_str())
                .alignment(Alignment::Center)
                .style(style),
            text_area,
        );
    }
}
