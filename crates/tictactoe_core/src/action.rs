//! Moves and the ways they can be rejected.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
///
/// The board model never takes a `Move` as input (the mark is always the
/// board's current one); callers use it to keep a history of what was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was refused. The board is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The position lies outside the 3x3 grid.
    #[display("Position {} is off the board", _0)]
    OutOfRange(#[error(not(source))] Position),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0.label())]
    CellOccupied(#[error(not(source))] Position),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Why a compact board encoding could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DecodeError {
    /// Encoding must be exactly 10 characters.
    #[display("Expected 10 characters, found {}", _0)]
    Length(#[error(not(source))] usize),

    /// A character other than `X`, `O` or `.`.
    #[display("Unexpected symbol {:?}", _0)]
    Symbol(#[error(not(source))] char),

    /// Mark counts cannot come from alternating play.
    #[display("Unbalanced board: {} X against {} O", x, o)]
    Unbalanced {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },

    /// The mark to move contradicts the mark counts.
    #[display("{} cannot be to move on this board", _0)]
    TurnMismatch(#[error(not(source))] Mark),
}
