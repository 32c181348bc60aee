//! Color scheme for the terminal UI.

use ratatui::style::Color;

pub const ACCENT: Color = Color::Cyan;
pub const CORRECT: Color = Color::Green;
pub const INCORRECT: Color = Color::Red;
pub const HIGHLIGHT: Color = Color::Yellow;
pub const STARS: Color = Color::Yellow;
pub const DIM: Color = Color::DarkGray;

/// Countdown turns yellow in the final ten seconds, red when it runs out.
pub const CLOCK_WARN: Color = Color::LightYellow;
pub const CLOCK_EXPIRED: Color = Color::Red;
