//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::{Mark, Tier};

/// Tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a three-tier computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the play settings file (defaults apply when missing)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactive rounds in the terminal
    Play {
        /// Opponent strength: random|mixed|optimal (or easy|medium|hard)
        #[arg(long)]
        tier: Option<Tier>,

        /// Mark you play: x or o
        #[arg(long)]
        human: Option<Mark>,

        /// Two people at one terminal, no computer
        #[arg(long)]
        two_player: bool,

        /// Seed for reproducible computer moves
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let two engines play each other
    Selfplay {
        /// Strength playing X
        #[arg(long, default_value = "optimal")]
        x: Tier,

        /// Strength playing O
        #[arg(long, default_value = "random")]
        o: Tier,

        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the outcome and minimax scores of an encoded board
    Analyze {
        /// Ten characters: 9 cells row-major (X, O or .) then the mark to move
        board: String,
    },
}
