//! Screen layout shared by rendering and mouse hit-testing.
//!
//! Layout is a pure function of the frame area, so the click handler can
//! recompute the same rectangles the renderer drew into.

use ratatui::layout::{Constraint, Direction as LayoutDirection, Layout, Rect};

use crate::input::Direction;

/// Width of the unmatched-list panel (borders included).
const LIST_PANEL_WIDTH: u16 = 22;
/// Character width of one list cell ("CA" plus padding).
const LIST_CELL_WIDTH: u16 = 5;

/// Panel rectangles of the game view.
#[derive(Clone, Copy, Debug)]
pub struct GameLayout {
    pub header: Rect,
    pub map: Rect,
    pub list: Rect,
    pub messages: Rect,
    pub footer: Rect,
}

impl GameLayout {
    pub fn compute(area: Rect, message_panel_height: u16) -> Self {
        let rows = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(message_panel_height),
                Constraint::Length(1),
            ])
            .split(area);

        let main = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(LIST_PANEL_WIDTH)])
            .split(rows[1]);

        Self {
            header: rows[0],
            map: main[0],
            list: main[1],
            messages: rows[2],
            footer: rows[3],
        }
    }
}

/// Area inside a bordered block.
pub fn inner(rect: Rect) -> Rect {
    if rect.width < 2 || rect.height < 2 {
        return Rect::new(rect.x, rect.y, 0, 0);
    }
    Rect::new(rect.x + 1, rect.y + 1, rect.width - 2, rect.height - 2)
}

/// Column-major grid placing unmatched entries inside the list panel.
///
/// Entries fill the first column top to bottom, then spill right, so the
/// alphabetical order reads down each column.
#[derive(Clone, Copy, Debug)]
pub struct ListGrid {
    inner: Rect,
    rows: usize,
}

impl ListGrid {
    pub fn new(inner: Rect) -> Self {
        Self {
            inner,
            rows: (inner.height as usize).max(1),
        }
    }

    pub fn cell(&self, index: usize) -> Rect {
        let col = (index / self.rows) as u16;
        let row = (index % self.rows) as u16;
        Rect {
            x: self.inner.x + col * LIST_CELL_WIDTH,
            y: self.inner.y + row,
            width: LIST_CELL_WIDTH,
            height: 1,
        }
    }

    /// True when the cell is fully visible inside the panel.
    pub fn is_visible(&self, index: usize) -> bool {
        let cell = self.cell(index);
        cell.x + cell.width <= self.inner.x + self.inner.width
            && cell.y < self.inner.y + self.inner.height
    }

    /// Maps a click position to a list index; the caller bounds-checks
    /// against the current list length.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.inner.x
            || y < self.inner.y
            || x >= self.inner.x + self.inner.width
            || y >= self.inner.y + self.inner.height
        {
            return None;
        }
        let col = ((x - self.inner.x) / LIST_CELL_WIDTH) as usize;
        let row = (y - self.inner.y) as usize;
        Some(col * self.rows + row)
    }

    /// Keyboard navigation across the column-major grid.
    pub fn move_cursor(&self, cursor: usize, direction: Direction, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let next = match direction {
            Direction::Up => {
                if cursor % self.rows > 0 {
                    cursor - 1
                } else {
                    cursor
                }
            }
            Direction::Down => {
                if cursor % self.rows < self.rows - 1 && cursor + 1 < len {
                    cursor + 1
                } else {
                    cursor
                }
            }
            Direction::Left => cursor.saturating_sub(self.rows),
            Direction::Right => {
                if cursor + self.rows < len {
                    cursor + self.rows
                } else {
                    cursor
                }
            }
        };
        next.min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_grid_is_column_major() {
        let grid = ListGrid::new(Rect::new(0, 0, 20, 10));

        assert_eq!(grid.cell(0), Rect::new(0, 0, 5, 1));
        assert_eq!(grid.cell(9), Rect::new(0, 9, 5, 1));
        assert_eq!(grid.cell(10), Rect::new(5, 0, 5, 1));
    }

    #[test]
    fn hit_test_matches_cell_positions() {
        let grid = ListGrid::new(Rect::new(2, 3, 20, 10));
        let cell = grid.cell(13);
        assert_eq!(grid.hit_test(cell.x, cell.y), Some(13));
        assert_eq!(grid.hit_test(1, 3), None);
    }

    #[test]
    fn cursor_moves_between_columns() {
        let grid = ListGrid::new(Rect::new(0, 0, 20, 10));
        assert_eq!(grid.move_cursor(0, Direction::Down, 50), 1);
        assert_eq!(grid.move_cursor(0, Direction::Right, 50), 10);
        assert_eq!(grid.move_cursor(10, Direction::Left, 50), 0);
        // Clamped at the tail of the list.
        assert_eq!(grid.move_cursor(45, Direction::Right, 50), 45);
    }
}
