//! Move selection for a computer opponent.
//!
//! The engine is stateless between calls. All randomness comes from the
//! `rng` the caller passes in, so a seeded generator reproduces the exact
//! sequence of moves.

pub mod minimax;
pub mod random;

use crate::board::BoardState;
use crate::position::Position;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

pub use minimax::{WIN_SCORE, best_move, score, scored_moves};
pub use random::random_move;

/// Strength of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Tier {
    /// Any empty cell, uniformly.
    #[strum(to_string = "random", serialize = "easy")]
    #[serde(alias = "easy")]
    Random,
    /// Usually random, sometimes optimal.
    #[default]
    #[strum(to_string = "mixed", serialize = "medium")]
    #[serde(alias = "medium")]
    Mixed,
    /// Full minimax search.
    #[strum(to_string = "optimal", serialize = "hard")]
    #[serde(alias = "hard")]
    Optimal,
}

/// Default probability that the Mixed tier plays the optimal move.
pub const DEFAULT_OPTIMAL_SHARE: f64 = 0.35;

/// A configured move picker.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use tictactoe_core::{BoardState, Engine, Position, Tier};
///
/// let state: BoardState = "XX.OO....X".parse().unwrap();
/// let mut rng = SmallRng::seed_from_u64(1);
/// let engine = Engine::new(Tier::Optimal);
/// assert_eq!(engine.decide(&state, &mut rng), Some(Position::new(0, 2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    tier: Tier,
    optimal_share: f64,
    vary_opening: bool,
}

impl Engine {
    /// Creates an engine for `tier` with default tuning.
    pub fn new(tier: Tier) -> Self {
        Self {
            tier,
            optimal_share: DEFAULT_OPTIMAL_SHARE,
            vary_opening: false,
        }
    }

    /// Sets how often the Mixed tier plays optimally.
    ///
    /// Values are clamped into `[0, 1]`; a non-finite value restores the
    /// default.
    pub fn with_optimal_share(mut self, share: f64) -> Self {
        self.optimal_share = if share.is_finite() {
            share.clamp(0.0, 1.0)
        } else {
            DEFAULT_OPTIMAL_SHARE
        };
        self
    }

    /// When set, optimal play opens on an empty board with a random cell
    /// instead of searching. Every opening draws under perfect play, so
    /// this only adds variety.
    pub fn with_vary_opening(mut self, vary: bool) -> Self {
        self.vary_opening = vary;
        self
    }

    /// Returns the configured tier.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Returns the Mixed tier's optimal share.
    pub fn optimal_share(&self) -> f64 {
        self.optimal_share
    }

    /// Returns whether optimal play randomizes its opening.
    pub fn vary_opening(&self) -> bool {
        self.vary_opening
    }

    /// Chooses a move for the mark to move on `state`.
    ///
    /// Returns `None` when the game is already over or no cell is empty.
    /// With a single empty cell that cell is returned without searching.
    #[instrument(skip(self, state, rng), fields(tier = %self.tier, board = %state.encode()))]
    pub fn decide<R: Rng + ?Sized>(&self, state: &BoardState, rng: &mut R) -> Option<Position> {
        if state.outcome().is_over() {
            warn!("Asked to move on a finished game");
            return None;
        }

        let candidates = state.empty_positions();
        let chosen = match candidates.as_slice() {
            [] => {
                warn!("No legal move");
                None
            }
            [only] => Some(*only),
            _ => match self.tier {
                Tier::Random => random_move(state, rng),
                Tier::Mixed if rng.random_bool(self.optimal_share) => self.optimal(state, rng),
                Tier::Mixed => random_move(state, rng),
                Tier::Optimal => self.optimal(state, rng),
            },
        };

        debug!(?chosen, "Engine decided");
        chosen
    }

    fn optimal<R: Rng + ?Sized>(&self, state: &BoardState, rng: &mut R) -> Option<Position> {
        if self.vary_opening && state.moves_played() == 0 {
            return random_move(state, rng);
        }
        best_move(state).map(|(pos, _)| pos)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Tier::default())
    }
}

/// Chooses a move at `tier` with default tuning.
pub fn decide_move<R: Rng + ?Sized>(
    state: &BoardState,
    tier: Tier,
    rng: &mut R,
) -> Option<Position> {
    Engine::new(tier).decide(state, rng)
}
