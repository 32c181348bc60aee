//! Recent-activity message panel.

use client_frontend_core::MessageLog;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog) {
    let visible = area.height.saturating_sub(2) as usize;
    let skip = messages.len().saturating_sub(visible);

    let lines: Vec<Line> = messages.iter().skip(skip).map(Line::from).collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Messages"));
    frame.render_widget(paragraph, area);
}
