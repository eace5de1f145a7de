//! Uniform random play.

use crate::board::BoardState;
use crate::position::Position;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Picks one empty cell uniformly at random.
pub fn random_move<R: Rng + ?Sized>(state: &BoardState, rng: &mut R) -> Option<Position> {
    state.empty_positions().choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_only_empty_cells_are_chosen() {
        let state: BoardState = "XOXOX....O".parse().unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let pos = random_move(&state, &mut rng).unwrap();
            assert!(state.empty_positions().contains(&pos));
        }
    }

    #[test]
    fn test_none_on_full_board() {
        let drawn: BoardState = "XOXXOOOXXO".parse().unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(random_move(&drawn, &mut rng), None);
    }
}
