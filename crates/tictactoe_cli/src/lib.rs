//! Terminal front end for `tictactoe_core`.
//!
//! - **Config**: TOML play settings with command-line overrides
//! - **Session**: rounds, turn hand-off to the engine, scores, undo
//! - **Self-play**: engine against engine tallies
//! - **Render**: text board and status line

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod selfplay;
mod session;

pub mod render;

pub use config::{ConfigError, PlayConfig};
pub use selfplay::{play_game, run_matches};
pub use session::{GameMode, Scoreboard, Session, SessionError};
