//! Text rendering for the terminal.

use crate::session::Session;
use tictactoe_core::{BoardState, Outcome, Position, SIZE, Square};

/// Draws the board. Empty cells show their index, cells of a winning
/// line are bracketed.
pub fn board(state: &BoardState) -> String {
    let line = state.outcome().winning_line();
    let mut out = String::new();

    for row in 0..SIZE {
        let cells: Vec<String> = (0..SIZE)
            .map(|col| {
                let pos = Position::new(row, col);
                let symbol = match state.get(pos) {
                    Some(Square::Occupied(mark)) => mark.symbol().to_string(),
                    _ => pos.index().map_or_else(String::new, |i| i.to_string()),
                };
                if line.is_some_and(|l| l.contains(pos)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        if row < SIZE - 1 {
            out.push_str("\n---+---+---\n");
        }
    }
    out
}

/// One-line status: whose turn it is or how the round ended.
pub fn status(session: &Session) -> String {
    let state = session.state();
    match state.outcome() {
        Outcome::InProgress if session.is_computer_turn() => {
            format!("{} (computer) is thinking...", state.current())
        }
        Outcome::InProgress => format!("{} to move", state.current()),
        outcome => outcome.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Mark;

    #[test]
    fn test_board_marks_winning_line() {
        let state: BoardState = "XXXOO....O".parse().unwrap();
        assert_eq!(
            board(&state),
            "[X]|[X]|[X]\n---+---+---\n O | O | 5 \n---+---+---\n 6 | 7 | 8 "
        );
    }

    #[test]
    fn test_status_in_two_player_mode() {
        let session = Session::new(crate::GameMode::TwoPlayer, Mark::X, false);
        assert_eq!(status(&session), "X to move");
    }
}
