//! Board coordinates.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A (row, column) pair on the board.
///
/// Construction is unchecked: a position may lie outside the board, and
/// the board model reports that as [`MoveError::OutOfRange`] instead of
/// panicking.
///
/// [`MoveError::OutOfRange`]: crate::MoveError::OutOfRange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub col: usize,
}

const LABELS: [&str; 9] = [
    "Top-left",
    "Top-center",
    "Top-right",
    "Middle-left",
    "Center",
    "Middle-right",
    "Bottom-left",
    "Bottom-center",
    "Bottom-right",
];

impl Position {
    /// Creates a position without range checking.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::new(0, 0),
        Position::new(0, 1),
        Position::new(0, 2),
        Position::new(1, 0),
        Position::new(1, 1),
        Position::new(1, 2),
        Position::new(2, 0),
        Position::new(2, 1),
        Position::new(2, 2),
    ];

    /// Returns true if both coordinates lie on the board.
    pub fn in_range(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Row-major board index (0-8), or `None` when out of range.
    pub fn index(self) -> Option<usize> {
        self.in_range().then(|| self.row * SIZE + self.col)
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label, e.g. "Top-left".
    pub fn label(self) -> &'static str {
        self.index().map_or("Off-board", |i| LABELS[i])
    }

    /// Parses user input as an index (`0-8`), a `row,col` pair or a label.
    ///
    /// Labels match case-insensitively and ignore spaces and dashes, so
    /// `"top left"`, `"TopLeft"` and `"top-left"` are all accepted.
    /// A `row,col` pair is returned even when out of range so the board
    /// model can reject it.
    #[instrument]
    pub fn parse(s: &str) -> Option<Position> {
        let s = s.trim();

        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index);
        }

        if let Some((row, col)) = s.split_once(',') {
            let row = row.trim().parse().ok()?;
            let col = col.trim().parse().ok()?;
            return Some(Position::new(row, col));
        }

        let wanted = normalize(s);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL
            .iter()
            .copied()
            .find(|pos| normalize(pos.label()) == wanted)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), Some(i));
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_out_of_range_has_no_index() {
        assert_eq!(Position::new(3, 0).index(), None);
        assert_eq!(Position::new(0, 3).index(), None);
        assert_eq!(Position::new(5, 5).label(), "Off-board");
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(Position::parse("4"), Some(Position::new(1, 1)));
        assert_eq!(Position::parse("2, 0"), Some(Position::new(2, 0)));
        assert_eq!(Position::parse("3,3"), Some(Position::new(3, 3)));
        assert_eq!(Position::parse("top left"), Some(Position::new(0, 0)));
        assert_eq!(Position::parse("Bottom-Right"), Some(Position::new(2, 2)));
        assert_eq!(Position::parse("center"), Some(Position::new(1, 1)));
        assert_eq!(Position::parse("9"), None);
        assert_eq!(Position::parse("middle"), None);
        assert_eq!(Position::parse(""), None);
    }
}
