//! Game rules for tic-tac-toe.
//!
//! Pure functions over the 9 squares of a board. They know nothing about
//! whose turn it is, which keeps them usable from the board model, the
//! invariants and the search alike.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winning_line};
