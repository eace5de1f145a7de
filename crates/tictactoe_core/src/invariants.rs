//! First-class invariants for tic-tac-toe boards.
//!
//! Invariants are logical properties that must hold for every reachable
//! board. They are checked after each accepted move in debug builds and
//! always when a board is decoded from text.

use crate::board::BoardState;
use crate::types::{Mark, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the two mark counts differ by at most one.
pub struct BalancedMarks;

impl Invariant<BoardState> for BalancedMarks {
    fn holds(state: &BoardState) -> bool {
        state.count(Mark::X).abs_diff(state.count(Mark::O)) <= 1
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}

/// Invariant: the mark to move is the one that has played less, or either
/// mark when the counts are equal.
pub struct TurnConsistent;

impl Invariant<BoardState> for TurnConsistent {
    fn holds(state: &BoardState) -> bool {
        let current = state.count(state.current());
        let other = state.count(state.current().opponent());
        current == other || current + 1 == other
    }

    fn description() -> &'static str {
        "Mark to move matches the mark counts"
    }
}

/// All state invariants as a composable set.
pub type BoardInvariants = (BalancedMarks, TurnConsistent);

/// Invariant over an accepted move: exactly one cell went from empty to the
/// mover's mark, nothing else changed, and the turn passed to the opponent.
pub struct SingleCellTransition;

impl Invariant<(BoardState, BoardState)> for SingleCellTransition {
    fn holds((before, after): &(BoardState, BoardState)) -> bool {
        let changed: Vec<_> = before
            .squares()
            .iter()
            .zip(after.squares())
            .filter(|(b, a)| b != a)
            .collect();

        matches!(
            changed.as_slice(),
            [(Square::Empty, Square::Occupied(mark))] if *mark == before.current()
        ) && after.current() == before.current().opponent()
    }

    fn description() -> &'static str {
        "Exactly one empty cell is filled by the mover"
    }
}

/// Asserts the transition and state invariants (debug builds only).
pub(crate) fn debug_assert_transition(before: &BoardState, after: &BoardState) {
    debug_assert!(
        SingleCellTransition::holds(&(*before, *after)),
        "{}",
        SingleCellTransition::description()
    );
    debug_assert!(
        BoardInvariants::check_all(after).is_ok(),
        "Board invariants violated after move"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        assert!(BoardInvariants::check_all(&BoardState::empty(Mark::X)).is_ok());
        assert!(BoardInvariants::check_all(&BoardState::empty(Mark::O)).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let state = BoardState::replay(
            Mark::O,
            &[Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
        )
        .expect("legal moves");
        assert!(BoardInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut squares = [Square::Empty; 9];
        squares[0] = Square::Occupied(Mark::X);
        squares[1] = Square::Occupied(Mark::X);
        let state = BoardState::from_parts(squares, Mark::X);

        let violations = BoardInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_transition_detects_overwrite() {
        let before = BoardState::empty(Mark::X)
            .attempt_move(Position::new(1, 1))
            .expect("legal move");

        let mut squares = *before.squares();
        squares[4] = Square::Occupied(Mark::O);
        let forged = BoardState::from_parts(squares, Mark::X);

        assert!(!SingleCellTransition::holds(&(before, forged)));
    }

    #[test]
    fn test_transition_holds_for_real_move() {
        let before = BoardState::empty(Mark::X);
        let after = before.attempt_move(Position::new(0, 2)).expect("legal move");
        assert!(SingleCellTransition::holds(&(before, after)));
    }
}
