//! Rules and computer opponent for 3x3 tic-tac-toe.
//!
//! # Architecture
//!
//! - **Board model**: [`BoardState`] is an immutable snapshot. Moves go
//!   through [`BoardState::attempt_move`], which returns a new state or a
//!   [`MoveError`]; [`BoardState::outcome`] derives win/draw status.
//! - **Decision engine**: [`decide_move`] (or a configured [`Engine`])
//!   picks a move at a given [`Tier`], using exhaustive minimax for
//!   [`Tier::Optimal`].
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use tictactoe_core::{BoardState, Mark, Outcome, Position, Tier, decide_move};
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let mut state = BoardState::empty(Mark::X);
//! state = state.attempt_move(Position::new(1, 1)).unwrap();
//!
//! while state.outcome() == Outcome::InProgress {
//!     let pos = decide_move(&state, Tier::Optimal, &mut rng).unwrap();
//!     state = state.attempt_move(pos).unwrap();
//! }
//! assert_eq!(state.outcome(), Outcome::Draw);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod invariants;
mod outcome;
mod position;
mod types;

pub mod engine;
pub mod rules;

pub use action::{DecodeError, Move, MoveError};
pub use board::BoardState;
pub use engine::{DEFAULT_OPTIMAL_SHARE, Engine, Tier, decide_move};
pub use invariants::{
    BalancedMarks, BoardInvariants, Invariant, InvariantSet, InvariantViolation,
    SingleCellTransition, TurnConsistent,
};
pub use outcome::{Outcome, WinningLine};
pub use position::{Position, SIZE};
pub use types::{Mark, Square};
