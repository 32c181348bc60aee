//! Home view: title and mode menu.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;
use crate::state::{AppState, HomeChoice};

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(8),
            Constraint::Min(1),
        ])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            "STATEMATCH",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Match the state names to the map",
            Style::default().fg(theme::DIM),
        )),
        Line::from(""),
    ];

    for (index, choice) in HomeChoice::ALL.iter().enumerate() {
        let label = match choice {
            HomeChoice::Practice => "Practice (untimed, with hints)",
            HomeChoice::Challenge => "Challenge (0-5 stars against the clock)",
            HomeChoice::Quit => "Quit",
        };
        let line = if index == app_state.home_cursor {
            Line::from(Span::styled(
                format!("▸ {label}"),
                Style::default()
                    .fg(theme::HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(format!("  {label}"))
        };
        lines.push(line);
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, rows[1]);
}
