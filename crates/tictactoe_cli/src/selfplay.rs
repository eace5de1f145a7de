//! Engine against engine.

use crate::session::Scoreboard;
use rand::Rng;
use tictactoe_core::{BoardState, Engine, Mark, Outcome};
use tracing::{debug, info, instrument, warn};

/// Plays one game from `state` to the end.
pub fn play_game<R: Rng + ?Sized>(
    mut state: BoardState,
    x: &Engine,
    o: &Engine,
    rng: &mut R,
) -> BoardState {
    while state.outcome() == Outcome::InProgress {
        let engine = match state.current() {
            Mark::X => x,
            Mark::O => o,
        };
        let Some(position) = engine.decide(&state, rng) else {
            warn!(board = %state.encode(), "Engine found no move");
            break;
        };
        match state.attempt_move(position) {
            Ok(next) => state = next,
            Err(e) => {
                warn!(error = %e, "Engine proposed an illegal move");
                break;
            }
        }
    }
    state
}

/// Plays `games` games and tallies the results.
///
/// X opens the first game; with `alternate_start` the opener swaps every
/// game.
#[instrument(skip(x, o, rng), fields(x = %x.tier(), o = %o.tier()))]
pub fn run_matches<R: Rng + ?Sized>(
    x: &Engine,
    o: &Engine,
    games: u32,
    alternate_start: bool,
    rng: &mut R,
) -> Scoreboard {
    let mut scores = Scoreboard::default();
    let mut starting = Mark::X;

    for game in 0..games {
        let end = play_game(BoardState::empty(starting), x, o, rng);
        debug!(game, board = %end.encode(), outcome = %end.outcome(), "Game finished");
        scores.record(&end.outcome());
        if alternate_start {
            starting = starting.opponent();
        }
    }

    info!(%scores, "Self-play finished");
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use tictactoe_core::Tier;

    #[test]
    fn test_optimal_mirror_always_draws() {
        let engine = Engine::new(Tier::Optimal).with_vary_opening(true);
        let mut rng = SmallRng::seed_from_u64(3);
        let scores = run_matches(&engine, &engine, 10, true, &mut rng);
        assert_eq!(*scores.draws(), 10);
    }

    #[test]
    fn test_random_never_beats_optimal() {
        let optimal = Engine::new(Tier::Optimal);
        let random = Engine::new(Tier::Random);
        let mut rng = SmallRng::seed_from_u64(8);
        let scores = run_matches(&optimal, &random, 30, true, &mut rng);
        assert_eq!(scores.rounds(), 30);
        assert_eq!(*scores.o_wins(), 0);
    }
}
