//! Header widget: mode, match progress, stars, countdown.

use client_frontend_core::ViewModel;
use game_core::GameConfig;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel) {
    let mut spans = vec![
        Span::raw("Mode: "),
        Span::styled(
            view_model.mode.to_string(),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Matched: "),
        Span::styled(
            format!(
                "{} / {}",
                view_model.matched_count(),
                view_model.total_count()
            ),
            Style::default().fg(theme::CORRECT),
        ),
        Span::raw(" | "),
        Span::styled(star_line(view_model.stars), Style::default().fg(theme::STARS)),
    ];

    if let Some(clock) = view_model.clock_text() {
        let clock_style = if view_model.time_remaining == 0 {
            Style::default().fg(theme::CLOCK_EXPIRED)
        } else if view_model.low_time() {
            Style::default().fg(theme::CLOCK_WARN)
        } else {
            Style::default()
        };
        spans.push(Span::raw(" | Time: "));
        spans.push(Span::styled(clock, clock_style));
    }

    let paragraph = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL).title("Game"));

    frame.render_widget(paragraph, area);
}

fn star_line(stars: u8) -> String {
    let earned = "★".repeat(stars as usize);
    let empty = "☆".repeat((GameConfig::MAX_STARS - stars) as usize);
    format!("{earned}{empty}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_line_pads_to_five() {
        assert_eq!(star_line(0), "☆☆☆☆☆");
        assert_eq!(star_line(3), "★★★☆☆");
        assert_eq!(star_line(5), "★★★★★");
    }
}
