//! Tests for move selection at every tier.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashSet;
use tictactoe_core::{BoardState, Engine, Mark, Outcome, Position, Tier, decide_move};

fn play_out(mut state: BoardState, tier: Tier, rng: &mut SmallRng) -> BoardState {
    while state.outcome() == Outcome::InProgress {
        let pos = decide_move(&state, tier, rng).expect("a legal move");
        state = state.attempt_move(pos).expect("engine plays legal moves");
    }
    state
}

#[test]
fn test_optimal_self_play_always_draws() {
    let mut rng = SmallRng::seed_from_u64(0);
    for starting in [Mark::X, Mark::O] {
        for opening in Position::ALL {
            let state = BoardState::empty(starting)
                .attempt_move(opening)
                .expect("empty board accepts any cell");
            let end = play_out(state, Tier::Optimal, &mut rng);
            assert_eq!(end.outcome(), Outcome::Draw, "opening {} -> {}", opening, end.encode());
        }
    }
}

#[test]
fn test_optimal_completes_own_line() {
    // X at (0,0) and (0,1), O at (1,0) and (1,1), X to move
    let state = BoardState::replay(
        Mark::X,
        &[
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(0, 1),
            Position::new(1, 1),
        ],
    )
    .expect("legal moves");

    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        decide_move(&state, Tier::Optimal, &mut rng),
        Some(Position::new(0, 2))
    );
}

#[test]
fn test_optimal_blocks_opponent() {
    // O threatens the middle row; X has no line of its own
    let state = BoardState::replay(
        Mark::O,
        &[Position::new(1, 0), Position::new(0, 0), Position::new(1, 1)],
    )
    .expect("legal moves");
    assert_eq!(state.current(), Mark::X);

    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        decide_move(&state, Tier::Optimal, &mut rng),
        Some(Position::new(1, 2))
    );
}

#[test]
fn test_optimal_beats_random() {
    let mut rng = SmallRng::seed_from_u64(9);
    for game in 0..20 {
        let mut state = BoardState::empty(if game % 2 == 0 { Mark::X } else { Mark::O });
        while state.outcome() == Outcome::InProgress {
            let tier = if state.current() == Mark::X { Tier::Optimal } else { Tier::Random };
            let pos = decide_move(&state, tier, &mut rng).expect("a legal move");
            state = state.attempt_move(pos).expect("legal");
        }
        assert_ne!(state.outcome().winner(), Some(Mark::O));
    }
}

#[test]
fn test_optimal_is_deterministic() {
    let state = BoardState::empty(Mark::X)
        .attempt_move(Position::new(0, 0))
        .expect("legal");
    let first = decide_move(&state, Tier::Optimal, &mut SmallRng::seed_from_u64(1));
    let second = decide_move(&state, Tier::Optimal, &mut SmallRng::seed_from_u64(2));
    assert_eq!(first, second);
    // Only the centre holds the draw against a corner opening
    assert_eq!(first, Some(Position::new(1, 1)));
}

#[test]
fn test_random_reaches_every_empty_cell() {
    let state = BoardState::replay(Mark::X, &[Position::new(1, 1), Position::new(0, 0)])
        .expect("legal moves");
    let empties: HashSet<_> = state.empty_positions().into_iter().collect();

    let mut rng = SmallRng::seed_from_u64(42);
    let mut seen = HashSet::new();
    for _ in 0..1_000 {
        let pos = decide_move(&state, Tier::Random, &mut rng).expect("a legal move");
        assert!(empties.contains(&pos));
        seen.insert(pos);
    }
    assert_eq!(seen, empties);
}

#[test]
fn test_seeded_random_is_reproducible() {
    let state = BoardState::empty(Mark::O);
    let run = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        play_out(state, Tier::Random, &mut rng)
    };
    assert_eq!(run(5), run(5));
}

#[test]
fn test_mixed_plays_both_ways() {
    // Only (0,2) wins on the spot; the other four cells are random-only picks
    let state: BoardState = "XX.OO....X".parse().expect("valid board");
    let engine = Engine::new(Tier::Mixed);

    let mut rng = SmallRng::seed_from_u64(77);
    let mut winning = 0;
    let mut other = 0;
    for _ in 0..500 {
        match engine.decide(&state, &mut rng) {
            Some(pos) if pos == Position::new(0, 2) => winning += 1,
            Some(_) => other += 1,
            None => panic!("mixed tier must always move"),
        }
    }
    assert!(winning > 0);
    assert!(other > 0);
}

#[test]
fn test_no_move_when_board_is_full() {
    let drawn: BoardState = "XOXXOOOXXO".parse().expect("valid board");
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(decide_move(&drawn, Tier::Optimal, &mut rng), None);
    assert_eq!(decide_move(&drawn, Tier::Random, &mut rng), None);
}
