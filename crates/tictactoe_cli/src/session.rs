//! A run of rounds between two humans or a human and the engine.
//!
//! The session is the caller the core expects: it holds the live board,
//! decides who supplies the next move from `state.current()`, and keeps
//! the score across rounds.

use derive_getters::Getters;
use derive_more::{Display, Error, From};
use rand::Rng;
use tictactoe_core::{BoardState, Engine, Mark, Move, MoveError, Outcome, Position, Tier};
use tracing::{debug, info, instrument};

/// Who sits across the board from the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameMode {
    /// Two people sharing the terminal.
    #[display("Two players")]
    TwoPlayer,
    /// The engine at the given strength.
    #[display("Computer ({})", _0)]
    VsComputer(Tier),
}

impl GameMode {
    /// Returns true if one side is played by the engine.
    pub fn is_computer_mode(&self) -> bool {
        matches!(self, GameMode::VsComputer(_))
    }
}

/// Round results across a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    /// Rounds won by X.
    x_wins: u32,
    /// Rounds won by O.
    o_wins: u32,
    /// Drawn rounds.
    draws: u32,
}

impl Scoreboard {
    /// Tallies a finished round. In-progress outcomes are ignored.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Won { winner: Mark::X, .. } => self.x_wins += 1,
            Outcome::Won { winner: Mark::O, .. } => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// Wins for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Total rounds recorded.
    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X {} - O {} (draws {})", self.x_wins, self.o_wins, self.draws)
    }
}

/// Why the session refused a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The board rejected the move.
    #[display("{}", _0)]
    #[from]
    Move(MoveError),

    /// The human tried to move for the computer.
    #[display("Wait for the computer to move")]
    NotYourTurn,

    /// The computer was asked to move out of turn.
    #[display("It is not the computer's turn")]
    NotComputerTurn,

    /// The engine found nothing to play.
    #[display("No legal move left")]
    NoLegalMove,

    /// No human move left to take back.
    #[display("Nothing to undo")]
    NothingToUndo,

    /// The round is finished and already scored.
    #[display("Round is over, start a new one")]
    RoundOver,
}

/// Live game plus score across rounds.
#[derive(Debug, Clone, Getters)]
pub struct Session {
    /// Current board.
    state: BoardState,
    /// Opponent setup.
    mode: GameMode,
    /// Mark that moved first this round.
    starting: Mark,
    /// Mark played by the human (by the first human in two-player mode).
    human: Mark,
    /// Swap the starting mark after every round.
    alternate_start: bool,
    /// Scores across rounds.
    scores: Scoreboard,
    /// Moves of the current round.
    history: Vec<Move>,
}

impl Session {
    /// Starts a session whose first round opens with X.
    #[instrument]
    pub fn new(mode: GameMode, human: Mark, alternate_start: bool) -> Self {
        info!("Starting session");
        Self {
            state: BoardState::empty(Mark::X),
            mode,
            starting: Mark::X,
            human,
            alternate_start,
            scores: Scoreboard::default(),
            history: Vec::new(),
        }
    }

    /// The engine's mark, if the engine plays.
    pub fn computer(&self) -> Option<Mark> {
        self.mode.is_computer_mode().then(|| self.human.opponent())
    }

    /// Derived status of the current round.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// True when the round is running and the engine must supply the move.
    pub fn is_computer_turn(&self) -> bool {
        !self.outcome().is_over() && self.computer() == Some(self.state.current())
    }

    /// Plays a human move.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotYourTurn`] while the engine is to move, or the
    /// board's [`MoveError`].
    #[instrument(skip(self), fields(current = %self.state.current()))]
    pub fn play(&mut self, position: Position) -> Result<Outcome, SessionError> {
        if self.is_computer_turn() {
            return Err(SessionError::NotYourTurn);
        }
        self.apply(position)
    }

    /// Lets the engine move. Returns the move it made.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotComputerTurn`] if a human is to move or the round
    /// is over, [`SessionError::NoLegalMove`] if the engine has no answer.
    #[instrument(skip(self, engine, rng), fields(tier = %engine.tier()))]
    pub fn computer_turn<R: Rng + ?Sized>(
        &mut self,
        engine: &Engine,
        rng: &mut R,
    ) -> Result<Move, SessionError> {
        if !self.is_computer_turn() {
            return Err(SessionError::NotComputerTurn);
        }
        let mark = self.state.current();
        let position = engine
            .decide(&self.state, rng)
            .ok_or(SessionError::NoLegalMove)?;
        self.apply(position)?;
        Ok(Move::new(mark, position))
    }

    fn apply(&mut self, position: Position) -> Result<Outcome, SessionError> {
        let mark = self.state.current();
        self.state = self.state.attempt_move(position)?;
        self.history.push(Move::new(mark, position));
        debug!(%mark, %position, "Move applied");

        let outcome = self.state.outcome();
        if outcome.is_over() {
            self.scores.record(&outcome);
            info!(%outcome, scores = %self.scores, "Round finished");
        }
        Ok(outcome)
    }

    /// Takes back the last human move, along with any engine reply.
    ///
    /// # Errors
    ///
    /// [`SessionError::RoundOver`] once the round is scored,
    /// [`SessionError::NothingToUndo`] when no human move remains.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<(), SessionError> {
        if self.outcome().is_over() {
            return Err(SessionError::RoundOver);
        }

        let computer = self.computer();
        let mut history = self.history.clone();
        loop {
            let last = history.pop().ok_or(SessionError::NothingToUndo)?;
            if Some(last.mark) != computer {
                break;
            }
        }

        let positions: Vec<Position> = history.iter().map(|m| m.position).collect();
        self.state = BoardState::replay(self.starting, &positions)?;
        self.history = history;
        debug!(moves = self.history.len(), "Undo applied");
        Ok(())
    }

    /// Clears the board for another round.
    #[instrument(skip(self))]
    pub fn next_round(&mut self) {
        if self.alternate_start {
            self.starting = self.starting.opponent();
        }
        self.state = BoardState::empty(self.starting);
        self.history.clear();
        info!(starting = %self.starting, "New round");
    }

    /// Zeroes the scoreboard.
    pub fn reset_scores(&mut self) {
        self.scores = Scoreboard::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_scoreboard_record() {
        let mut scores = Scoreboard::default();
        scores.record(&Outcome::Draw);
        scores.record(&Outcome::InProgress);
        assert_eq!(scores.rounds(), 1);
        assert_eq!(*scores.draws(), 1);
        assert_eq!(scores.to_string(), "X 0 - O 0 (draws 1)");
    }

    #[test]
    fn test_two_player_has_no_computer() {
        let session = Session::new(GameMode::TwoPlayer, Mark::X, true);
        assert_eq!(session.computer(), None);
        assert!(!session.is_computer_turn());
    }

    #[test]
    fn test_computer_refuses_out_of_turn() {
        let mut session = Session::new(GameMode::VsComputer(Tier::Optimal), Mark::X, true);
        let mut rng = SmallRng::seed_from_u64(0);
        let engine = Engine::new(Tier::Optimal);
        assert_eq!(
            session.computer_turn(&engine, &mut rng),
            Err(SessionError::NotComputerTurn)
        );
    }
}
