//! tictactoe - terminal front end
//!
//! Interactive play, engine self-play and board analysis.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tictactoe_cli::{GameMode, PlayConfig, Session, render, run_matches};
use tictactoe_core::{BoardState, Position, Tier, engine};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = PlayConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play {
            tier,
            human,
            two_player,
            seed,
        } => run_play(config.with_overrides(tier, human, seed), two_player),
        Command::Selfplay { x, o, games, seed } => {
            run_selfplay(config.with_overrides(None, None, seed), x, o, games)
        }
        Command::Analyze { board } => run_analyze(&board),
    }
}

/// Interactive rounds on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: PlayConfig, two_player: bool) -> Result<()> {
    let mode = if two_player {
        GameMode::TwoPlayer
    } else {
        GameMode::VsComputer(*config.tier())
    };
    let engine = config.engine(*config.tier());
    let mut rng = config.rng();
    let delay = Duration::from_millis(*config.think_delay_ms());
    let mut session = Session::new(mode, *config.human(), *config.alternate_start());

    info!(%mode, human = %config.human(), "Starting play");
    println!("{} - you play {}", mode, config.human());
    println!("Enter a cell (0-8, row,col or a name like 'center'), u = undo, n = new round, r = reset score, q = quit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        while session.is_computer_turn() {
            println!("{}", render::status(&session));
            std::thread::sleep(delay);
            let played = session.computer_turn(&engine, &mut rng)?;
            println!("Computer plays {}", played);
        }

        println!("\n{}\n", render::board(session.state()));
        println!("{}", render::status(&session));
        if session.outcome().is_over() {
            println!("Score: {}", session.scores());
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            "q" | "quit" => break,
            "n" | "new" => session.next_round(),
            "r" | "reset" => {
                session.reset_scores();
                println!("Score reset");
            }
            "u" | "undo" => {
                if let Err(e) = session.undo() {
                    println!("{}", e);
                }
            }
            input => match Position::parse(input) {
                Some(position) => {
                    if let Err(e) = session.play(position) {
                        println!("{}", e);
                    }
                }
                None => println!("Unrecognized input: {}", input),
            },
        }
    }

    println!("Final score: {}", session.scores());
    Ok(())
}

/// Engine against engine
#[instrument(skip(config))]
fn run_selfplay(config: PlayConfig, x: Tier, o: Tier, games: u32) -> Result<()> {
    let mut rng = config.rng();
    let scores = run_matches(
        &config.engine(x),
        &config.engine(o),
        games,
        *config.alternate_start(),
        &mut rng,
    );
    println!("X ({}) vs O ({}) over {} games: {}", x, o, games, scores);
    Ok(())
}

/// Outcome and per-cell minimax scores of an encoded board
#[instrument]
fn run_analyze(board: &str) -> Result<()> {
    let state = BoardState::decode(board)?;

    println!("\n{}\n", render::board(&state));
    println!("Outcome: {}", state.outcome());
    if state.outcome().is_over() {
        return Ok(());
    }

    println!("{} to move", state.current());
    for (position, score) in engine::scored_moves(&state) {
        println!("  {:<14} {:>3}", position.label(), score);
    }
    if let Some((best, score)) = engine::best_move(&state) {
        println!("Optimal: {} {} (score {})", best.label(), best, score);
    }
    Ok(())
}
