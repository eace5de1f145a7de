//! Derived game status.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// The three cells that decided a won game, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine(pub [Position; 3]);

impl WinningLine {
    /// Returns the cells of the line.
    pub fn positions(&self) -> &[Position; 3] {
        &self.0
    }

    /// Returns true if the line passes through `position`.
    pub fn contains(&self, position: Position) -> bool {
        self.0.contains(&position)
    }
}

/// Status of a board, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// `winner` completed `line`.
    Won {
        /// Mark owning the line.
        winner: Mark,
        /// The completed line.
        line: WinningLine,
    },
    /// Board full, no winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { winner, .. } => Some(*winner),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns the completed line, present only for a won game.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won { winner, .. } => write!(f, "Player {} wins", winner),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
