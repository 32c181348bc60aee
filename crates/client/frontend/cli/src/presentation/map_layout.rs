//! Fixed geographic tile grid for the map panel.
//!
//! The terminal analog of the rendered US map: each state is one cell in a
//! rough geographic arrangement. The grid also carries the DC feature, which
//! has no catalog entry; clicking it exercises the unrecognized-feature path
//! exactly like stray features on the original map.

use ratatui::layout::Rect;

use crate::input::Direction;

pub const GRID_ROWS: usize = 8;
pub const GRID_COLS: usize = 11;

/// Character cell footprint of one tile.
pub const CELL_WIDTH: u16 = 5;
pub const CELL_HEIGHT: u16 = 2;

pub static GRID: [[Option<&'static str>; GRID_COLS]; GRID_ROWS] = [
    [
        Some("AK"),
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        Some("ME"),
    ],
    [
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        Some("VT"),
        Some("NH"),
        Some("MA"),
    ],
    [
        Some("WA"),
        Some("MT"),
        Some("ND"),
        Some("MN"),
        Some("WI"),
        None,
        Some("MI"),
        None,
        Some("NY"),
        Some("CT"),
        Some("RI"),
    ],
    [
        Some("OR"),
        Some("ID"),
        Some("SD"),
        Some("IA"),
        Some("IL"),
        Some("IN"),
        Some("OH"),
        Some("PA"),
        Some("NJ"),
        None,
        None,
    ],
    [
        Some("CA"),
        Some("NV"),
        Some("WY"),
        Some("NE"),
        Some("MO"),
        Some("KY"),
        Some("WV"),
        Some("VA"),
        Some("MD"),
        Some("DE"),
        None,
    ],
    [
        None,
        Some("UT"),
        Some("CO"),
        Some("KS"),
        Some("AR"),
        Some("TN"),
        Some("NC"),
        Some("SC"),
        Some("DC"),
        None,
        None,
    ],
    [
        None,
        Some("AZ"),
        Some("NM"),
        Some("OK"),
        Some("LA"),
        Some("MS"),
        Some("AL"),
        Some("GA"),
        None,
        None,
        None,
    ],
    [
        Some("HI"),
        None,
        None,
        Some("TX"),
        None,
        None,
        None,
        None,
        Some("FL"),
        None,
        None,
    ],
];

pub fn code_at(row: usize, col: usize) -> Option<&'static str> {
    GRID.get(row).and_then(|r| r.get(col)).copied().flatten()
}

/// Default cursor position when entering the game view.
pub fn first_cell() -> (usize, usize) {
    // WA: top-left of the contiguous states.
    (2, 0)
}

/// Moves the cursor to the next populated cell in `direction`, scanning
/// along the row or column. Stays put at a dead end.
pub fn step(from: (usize, usize), direction: Direction) -> (usize, usize) {
    let (row, col) = from;
    match direction {
        Direction::Left => (0..col)
            .rev()
            .find(|&c| code_at(row, c).is_some())
            .map(|c| (row, c)),
        Direction::Right => ((col + 1)..GRID_COLS)
            .find(|&c| code_at(row, c).is_some())
            .map(|c| (row, c)),
        Direction::Up => (0..row)
            .rev()
            .find(|&r| code_at(r, col).is_some())
            .map(|r| (r, col)),
        Direction::Down => ((row + 1)..GRID_ROWS)
            .find(|&r| code_at(r, col).is_some())
            .map(|r| (r, col)),
    }
    .unwrap_or(from)
}

/// Screen rectangle of one tile inside the map panel's inner area.
pub fn cell_rect(inner: Rect, row: usize, col: usize) -> Rect {
    Rect {
        x: inner.x + col as u16 * CELL_WIDTH,
        y: inner.y + row as u16 * CELL_HEIGHT,
        width: CELL_WIDTH,
        height: CELL_HEIGHT,
    }
}

/// Maps a click position to a populated tile, if any.
pub fn hit_test(inner: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
    if x < inner.x || y < inner.y {
        return None;
    }
    let col = ((x - inner.x) / CELL_WIDTH) as usize;
    let row = ((y - inner.y) / CELL_HEIGHT) as usize;
    if row >= GRID_ROWS || col >= GRID_COLS {
        return None;
    }
    code_at(row, col).map(|_| (row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_carries_fifty_states_plus_dc() {
        let codes: Vec<&str> = GRID.iter().flatten().flatten().copied().collect();
        assert_eq!(codes.len(), 51);
        assert!(codes.contains(&"DC"));

        let mut unique = codes.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn step_scans_across_gaps() {
        // AK sits alone at the top-left; ME is the only other cell in row 0.
        let from = (0, 0);
        assert_eq!(step(from, Direction::Right), (0, 10));
        // Dead end: nothing left of AK.
        assert_eq!(step(from, Direction::Left), from);
    }

    #[test]
    fn hit_test_round_trips_cell_rect() {
        let inner = Rect::new(3, 2, 60, 20);
        let rect = cell_rect(inner, 2, 0);
        assert_eq!(hit_test(inner, rect.x, rect.y), Some((2, 0)));
        assert_eq!(hit_test(inner, rect.x + 1, rect.y + 1), Some((2, 0)));

        // Empty cell in row 0.
        let empty = cell_rect(inner, 0, 5);
        assert_eq!(hit_test(inner, empty.x, empty.y), None);
    }
}
