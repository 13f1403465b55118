//! Cross-round session: cumulative score over successive rounds.

use super::error::BoardError;
use super::game::Match;
use super::types::{BoardConfig, Score};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A running series of rounds on the same board dimensions.
///
/// The tally outlives individual rounds: each finished round's score is
/// folded in when a new board is dealt. The session owns the score
/// explicitly - there is no ambient shared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    config: BoardConfig,
    game: Match,
    tally: Score,
    rounds_played: u32,
}

impl Session {
    /// Opens a session and deals the first round.
    ///
    /// # Errors
    ///
    /// Propagates [`BoardError::OutOfBounds`] for degenerate dimensions.
    #[instrument]
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        let game = Match::start(config.width, config.height)?;
        info!(?config, "Opening session");
        Ok(Self {
            config,
            game,
            tally: Score::default(),
            rounds_played: 0,
        })
    }

    /// The board dimensions every round is dealt with.
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// The round currently in play.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Mutable access for driving the current round.
    pub fn game_mut(&mut self) -> &mut Match {
        &mut self.game
    }

    /// Cumulative score across finished rounds.
    pub fn tally(&self) -> Score {
        self.tally
    }

    /// Number of finished rounds folded into the tally.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Deals a fresh board, folding the current round into the tally if it
    /// reached a terminal phase. A round still in progress is discarded
    /// without affecting the tally.
    ///
    /// # Errors
    ///
    /// Propagates board construction errors.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) -> Result<(), BoardError> {
        if self.game.is_terminal() {
            self.tally.merge(self.game.score());
            self.rounds_played += 1;
        } else {
            debug!("Discarding a round in progress");
        }
        self.game = Match::start(self.config.width, self.config.height)?;
        info!(tally = ?self.tally, rounds = self.rounds_played, "New round");
        Ok(())
    }
}
