//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Mark, Square};
use crate::outcome::WinningLine;

/// The 8 winning lines in canonical scan order: rows, then columns,
/// then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    // Columns
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    // Diagonals
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
];

/// Returns the first completed line and its owner.
///
/// Lines are scanned in [`LINES`] order, so if a malformed board holds
/// several complete lines the earliest one is reported.
pub fn winning_line(squares: &[Square; 9]) -> Option<(Mark, WinningLine)> {
    let at = |pos: Position| pos.index().map_or(Square::Empty, |i| squares[i]);

    LINES.iter().find_map(|&line| {
        let [a, b, c] = line.map(at);
        match a {
            Square::Occupied(mark) if a == b && b == c => Some((mark, WinningLine(line))),
            _ => None,
        }
    })
}
