//! Exhaustive minimax search.
//!
//! The tree is at most 9 plies deep with a branching factor of at most 9,
//! so every line is walked to the end without pruning. Each recursive call
//! plays one more cell on a copy of the board, so the recursion always
//! terminates.

use crate::board::BoardState;
use crate::outcome::Outcome;
use crate::position::Position;
use crate::types::Mark;
use tracing::{instrument, trace};

/// Base value of a win. Wins found closer to the root score higher.
pub const WIN_SCORE: i32 = 10;

/// Scores `state` from `maximizer`'s point of view.
///
/// `depth` is the number of plies between the position being decided and
/// `state`, with the root's children at depth 0. A win for `maximizer`
/// scores `WIN_SCORE - depth`, a loss `depth - WIN_SCORE`, a draw 0.
/// Otherwise the side to move picks the child that is best for it:
/// the maximum if it is `maximizer`, the minimum if not.
pub fn score(state: &BoardState, maximizer: Mark, depth: i32) -> i32 {
    match state.outcome() {
        Outcome::Won { winner, .. } if winner == maximizer => WIN_SCORE - depth,
        Outcome::Won { .. } => depth - WIN_SCORE,
        Outcome::Draw => 0,
        Outcome::InProgress => {
            let children = state
                .empty_positions()
                .into_iter()
                .filter_map(|pos| state.attempt_move(pos).ok())
                .map(|child| score(&child, maximizer, depth + 1));

            if state.current() == maximizer {
                children.max().unwrap_or(0)
            } else {
                children.min().unwrap_or(0)
            }
        }
    }
}

/// Scores every legal move for the side to move, in row-major order.
pub fn scored_moves(state: &BoardState) -> Vec<(Position, i32)> {
    let maximizer = state.current();
    state
        .empty_positions()
        .into_iter()
        .filter_map(|pos| {
            state
                .attempt_move(pos)
                .ok()
                .map(|child| (pos, score(&child, maximizer, 0)))
        })
        .collect()
}

/// Finds the move with the strictly greatest score.
///
/// Ties keep the earliest move in row-major order. Returns `None` when
/// there is nothing to play.
#[instrument(level = "debug", skip(state), fields(board = %state.encode()))]
pub fn best_move(state: &BoardState) -> Option<(Position, i32)> {
    let mut best: Option<(Position, i32)> = None;

    for (pos, value) in scored_moves(state) {
        trace!(%pos, value, "Scored candidate");
        if best.is_none_or(|(_, top)| value > top) {
            best = Some((pos, value));
        }
    }

    best
}
