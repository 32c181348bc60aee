//! Rendering: layout, theme, map grid, and widgets.

pub mod layout;
pub mod map_layout;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
