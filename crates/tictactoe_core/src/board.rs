//! The board model: an immutable 3x3 grid plus the mark to move.

use crate::action::{DecodeError, MoveError};
use crate::invariants::{
    BalancedMarks, BoardInvariants, Invariant, InvariantSet, InvariantViolation, TurnConsistent,
    debug_assert_transition,
};
use crate::outcome::Outcome;
use crate::position::{Position, SIZE};
use crate::rules;
use crate::types::{Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Snapshot of a game: the 9 cells and whose turn it is.
///
/// A `BoardState` is never mutated. [`attempt_move`](Self::attempt_move)
/// returns a new value, so search can explore futures on copies and
/// backtrack by dropping them.
///
/// Serializes through the 10-character [`encode`](Self::encode) form and
/// validates on the way back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BoardState {
    squares: [Square; 9],
    current: Mark,
}

impl BoardState {
    /// Creates an empty board with `starting` to move.
    pub fn empty(starting: Mark) -> Self {
        Self {
            squares: [Square::Empty; 9],
            current: starting,
        }
    }

    /// Builds a state from raw parts without validation.
    pub(crate) fn from_parts(squares: [Square; 9], current: Mark) -> Self {
        Self { squares, current }
    }

    /// Returns the mark whose turn it is.
    pub fn current(&self) -> Mark {
        self.current
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Gets the square at `position`, or `None` if it is off the board.
    pub fn get(&self, position: Position) -> Option<Square> {
        position.index().map(|i| self.squares[i])
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Number of marks on the board.
    pub fn moves_played(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Places the current mark at `position` and passes the turn.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if `position` is off the board.
    /// - [`MoveError::GameOver`] if this board is already won or drawn.
    /// - [`MoveError::CellOccupied`] if the cell holds a mark.
    #[instrument(level = "trace", skip(self), fields(current = %self.current))]
    pub fn attempt_move(&self, position: Position) -> Result<BoardState, MoveError> {
        let Some(index) = position.index() else {
            debug!(%position, "Rejected move off the board");
            return Err(MoveError::OutOfRange(position));
        };

        if self.outcome().is_over() {
            debug!(%position, "Rejected move on finished game");
            return Err(MoveError::GameOver);
        }

        if !self.squares[index].is_empty() {
            debug!(%position, "Rejected move on occupied cell");
            return Err(MoveError::CellOccupied(position));
        }

        let mut next = *self;
        next.squares[index] = Square::Occupied(self.current);
        next.current = self.current.opponent();

        debug_assert_transition(self, &next);
        Ok(next)
    }

    /// Derives the game status.
    ///
    /// Winning lines are scanned rows first, then columns, then diagonals;
    /// the first complete line decides the winner.
    pub fn outcome(&self) -> Outcome {
        if let Some((winner, line)) = rules::winning_line(&self.squares) {
            Outcome::Won { winner, line }
        } else if rules::is_full(&self.squares) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Empty cells in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.get(*pos).is_some_and(Square::is_empty))
            .collect()
    }

    /// Plays `moves` in order from an empty board.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(starting: Mark, moves: &[Position]) -> Result<BoardState, MoveError> {
        moves
            .iter()
            .try_fold(Self::empty(starting), |state, pos| state.attempt_move(*pos))
    }

    /// Checks every board invariant, reporting each one that fails.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        BoardInvariants::check_all(self)
    }

    /// Encodes the board as 10 characters: the 9 cells in row-major order
    /// (`X`, `O` or `.`) followed by the mark to move.
    ///
    /// ```
    /// use tictactoe_core::{BoardState, Mark, Position};
    ///
    /// let state = BoardState::empty(Mark::X).attempt_move(Position::new(1, 1)).unwrap();
    /// assert_eq!(state.encode(), "....X....O");
    /// ```
    pub fn encode(&self) -> String {
        self.squares
            .iter()
            .map(|s| s.mark().map_or('.', Mark::symbol))
            .chain(std::iter::once(self.current.symbol()))
            .collect()
    }

    /// Rebuilds a board from [`encode`](Self::encode) output.
    ///
    /// Marks may be upper or lower case.
    ///
    /// # Errors
    ///
    /// Rejects input of the wrong length, unknown symbols, and boards whose
    /// mark counts could not arise from alternating play.
    #[instrument]
    pub fn decode(s: &str) -> Result<BoardState, DecodeError> {
        let chars: Vec<char> = s.trim().chars().collect();
        let [cells @ .., turn] = chars.as_slice() else {
            return Err(DecodeError::Length(0));
        };
        if chars.len() != SIZE * SIZE + 1 {
            return Err(DecodeError::Length(chars.len()));
        }

        let mut squares = [Square::Empty; 9];
        for (square, &c) in squares.iter_mut().zip(cells) {
            *square = match c {
                '.' => Square::Empty,
                c => Square::Occupied(Mark::from_symbol(c).ok_or(DecodeError::Symbol(c))?),
            };
        }
        let current = Mark::from_symbol(*turn).ok_or(DecodeError::Symbol(*turn))?;

        let state = Self::from_parts(squares, current);
        if !BalancedMarks::holds(&state) {
            return Err(DecodeError::Unbalanced {
                x: state.count(Mark::X),
                o: state.count(Mark::O),
            });
        }
        if !TurnConsistent::holds(&state) {
            return Err(DecodeError::TurnMismatch(current));
        }
        Ok(state)
    }
}

impl std::str::FromStr for BoardState {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl TryFrom<String> for BoardState {
    type Error = DecodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::decode(&s)
    }
}

impl From<BoardState> for String {
    fn from(state: BoardState) -> Self {
        state.encode()
    }
}

/// Draws the grid with empty cells numbered by their index (0-8).
impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let pos = row * SIZE + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos)?,
                    Square::Occupied(mark) => write!(f, "{}", mark.symbol())?,
                }
                if col < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
