//! Map panel: geographic tile grid of state cells.

use client_frontend_core::{RegionVisual, ViewModel};
use game_core::{GameMode, RegionId};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::{layout, map_layout, theme};
use crate::state::{AppState, Focus};

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, app_state: &AppState) {
    let block = Block::default().borders(Borders::ALL).title("Map");
    frame.render_widget(block, area);

    let inner = layout::inner(area);
    for (row, columns) in map_layout::GRID.iter().enumerate() {
        for (col, code) in columns.iter().enumerate() {
            let Some(code) = code else { continue };

            let cell = map_layout::cell_rect(inner, row, col);
            if cell.x + cell.width > inner.x + inner.width
                || cell.y + cell.height > inner.y + inner.height
            {
                continue;
            }

            let style = cell_style(view_model, app_state, (row, col), code);
            // Leave a one-column gutter between tiles.
            let text_area = Rect {
                width: cell.width - 1,
                height: 1,
                ..cell
            };
            frame.render_widget(
                Paragraph::new(*code)
                    .alignment(Alignment::Center)
                    .style(style),
                text_area,
            );
        }
    }
}

fn cell_style(
    view_model: &ViewModel,
    app_state: &AppState,
    position: (usize, usize),
    code: &str,
) -> Style {
    let id = RegionId::new(code);
    let cursor_here = app_state.focus == Focus::Map && app_state.map_cursor == position;

    let mut style = match view_model.region_visual(&id) {
        RegionVisual::Correct => Style::default().fg(Color::Black).bg(theme::CORRECT),
        RegionVisual::Incorrect => Style::default().fg(Color::Black).bg(theme::INCORRECT),
        RegionVisual::SelectedHighlight => {
            Style::default().fg(Color::Black).bg(theme::HIGHLIGHT)
        }
        RegionVisual::Default => {
            // Practice-mode hint: a selected entry lights up the cursored,
            // still-unmatched cell.
            if cursor_here
                && view_model.mode == GameMode::Practice
                && view_model.selected.is_some()
            {
                Style::default().fg(Color::Black).bg(theme::HIGHLIGHT)
            } else {
                Style::default()
            }
        }
    };

    if cursor_here {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}
