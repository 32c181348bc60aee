//! Centered dialogs: challenge confirmation and results.

use client_frontend_core::{ModalKind, SessionConclusion, ViewModel};
use game_core::GameConfig;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect, modal: ModalKind, view_model: &ViewModel) {
    let (title, lines) = match modal {
        ModalKind::ChallengeStart => challenge_start(),
        ModalKind::ChallengeResults => challenge_results(view_model),
    };

    let dialog_area = centered(area, 54, lines.len() as u16 + 2);
    frame.render_widget(Clear, dialog_area);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(theme::ACCENT)),
    );
    frame.render_widget(paragraph, dialog_area);
}

fn challenge_start() -> (&'static str, Vec<Line<'static>>) {
    let lines = vec![
        Line::from("Match as many states as you can"),
        Line::from("before the clock runs out."),
        Line::from(format!(
            "One star per {} correct matches.",
            GameConfig::MATCHES_PER_STAR
        )),
        Line::from(""),
        hint_line("[Enter] start   [Esc] cancel"),
    ];
    ("Challenge Mode", lines)
}

fn challenge_results(view_model: &ViewModel) -> (&'static str, Vec<Line<'static>>) {
    let mut lines = Vec::new();

    match &view_model.conclusion {
        Some(SessionConclusion::Completed {
            matched_count,
            time_remaining,
        }) => {
            lines.push(Line::from("Congratulations, you completed the challenge!"));
            lines.push(score_line(*matched_count, view_model));
            lines.push(Line::from(format!(
                "Finished with {time_remaining} seconds to spare."
            )));
        }
        Some(SessionConclusion::TimeUp { matched_count }) => {
            lines.push(Line::from("Time's up! Better luck next time."));
            lines.push(score_line(*matched_count, view_model));
        }
        // Defensive: the dialog only opens once a conclusion is latched.
        None => lines.push(Line::from("Session ended.")),
    }

    lines.push(Line::from(""));
    lines.push(hint_line("[Enter] play again   [Esc] home"));

    ("Challenge Results", lines)
}

fn score_line(matched_count: usize, view_model: &ViewModel) -> Line<'static> {
    let stars = "★".repeat(view_model.stars as usize);
    let empty = "☆".repeat((GameConfig::MAX_STARS - view_model.stars) as usize);
    Line::from(vec![
        Span::raw(format!(
            "Matched {matched_count} of {}   ",
            view_model.total_count()
        )),
        Span::styled(format!("{stars}{empty}"), Style::default().fg(theme::STARS)),
    ])
}

fn hint_line(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(theme::DIM).add_modifier(Modifier::BOLD),
    ))
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
