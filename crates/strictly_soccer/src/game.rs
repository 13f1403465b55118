//! Match control: move execution, turn handling, scoring, stalemate.

use super::action::{Move, MoveError};
use super::board::BoardState;
use super::error::{BoardError, MatchError};
use super::invariants::assert_invariants;
use super::rules;
use super::types::{BoardConfig, CellKind, Coord, Phase, Score, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The ball moved; the round goes on.
    Continue,
    /// The ball reached the goal owned by this side; the round is over.
    GoalScored(Side),
    /// The side now to move has no legal reply; the round is over.
    Stalemate,
}

// ─────────────────────────────────────────────────────────────
//  Match state
// ─────────────────────────────────────────────────────────────

/// One round of paper soccer: board, turn order, score, phase.
///
/// Owns the [`BoardState`] for the duration of the round. The legality
/// rules and the executor are pure functions over it; all mutation goes
/// through [`Match::attempt_move`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    board: BoardState,
    current_side: Side,
    score: Score,
    phase: Phase,
    history: Vec<Move>,
}

impl Match {
    /// Starts a round on a board of the given dimensions. Side A moves
    /// first.
    ///
    /// # Errors
    ///
    /// Propagates [`BoardError::OutOfBounds`] for degenerate dimensions.
    #[instrument]
    pub fn start(width: u16, height: u16) -> Result<Self, BoardError> {
        let board = BoardState::build(width, height)?;
        info!(width, height, "Starting round");
        Ok(Self {
            board,
            current_side: Side::A,
            score: Score::default(),
            phase: Phase::InProgress,
            history: Vec::new(),
        })
    }

    /// Starts a round on the default 9x13 board.
    pub fn start_default() -> Result<Self, BoardError> {
        let config = BoardConfig::default();
        Self::start(config.width, config.height)
    }

    /// Read-only view of the board for rendering and queries.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The side whose turn it is.
    pub fn current_side(&self) -> Side {
        self.current_side
    }

    /// Goals scored this round.
    pub fn score(&self) -> Score {
        self.score
    }

    /// The round's phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Every move applied this round, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once the round has ended in a goal or a stalemate.
    pub fn is_terminal(&self) -> bool {
        self.phase != Phase::InProgress
    }

    /// Destinations the side to move may choose from.
    pub fn legal_moves(&self) -> Vec<Coord> {
        rules::legal_moves(&self.board, self.board.ball_pos())
    }

    // ─────────────────────────────────────────────────────────────
    //  Move execution
    // ─────────────────────────────────────────────────────────────

    /// Attempts to push the ball to `destination` on behalf of `side`.
    ///
    /// A goal destination ends the round and credits the goal's own side;
    /// the ball stays put. Otherwise the traversed edge is recorded, the
    /// vacated node becomes a wall, and the turn passes - unless the
    /// destination was already walled before the move (a bounce), in which
    /// case the same side moves again. If the side then to move has no
    /// legal reply, the round ends in a stalemate.
    ///
    /// # Errors
    ///
    /// - [`MoveError::RoundOver`] if the round already ended.
    /// - [`MoveError::WrongTurn`] if it is not `side`'s turn.
    /// - [`MoveError::InvalidMove`] if `destination` is not currently legal.
    ///
    /// No error path mutates any state.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, side: Side, destination: Coord) -> Result<Outcome, MoveError> {
        if self.phase != Phase::InProgress {
            warn!(phase = ?self.phase, "Move attempted after round ended");
            return Err(MoveError::RoundOver);
        }
        if side != self.current_side {
            warn!(expected = ?self.current_side, "Move attempted out of turn");
            return Err(MoveError::WrongTurn(side));
        }
        if !self.legal_moves().contains(&destination) {
            debug!("Destination not in the legal set");
            return Err(MoveError::InvalidMove(destination));
        }

        self.history.push(Move::new(side, destination));

        // Scoring move: the round ends and the ball stays put.
        if let Some(CellKind::Goal { side: goal_side }) = self.board.cell(destination) {
            self.score.record(goal_side);
            self.phase = Phase::Scored;
            info!(goal = ?goal_side, score = ?self.score, "Goal");
            return Ok(Outcome::GoalScored(goal_side));
        }

        // A destination that was already walled lets the same side move
        // again; a fresh node passes the turn.
        let landed_on_wall = matches!(self.board.cell(destination), Some(CellKind::Wall));
        self.board.move_ball(destination);
        if !landed_on_wall {
            self.current_side = self.current_side.opponent();
        }

        assert_invariants(self);

        if self.legal_moves().is_empty() {
            self.phase = Phase::Stalemate;
            info!(stuck = ?self.current_side, "Stalemate");
            return Ok(Outcome::Stalemate);
        }
        debug!(ball = %destination, next = ?self.current_side, "Move applied");
        Ok(Outcome::Continue)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut BoardState {
        &mut self.board
    }

    /// Rebuilds a match by replaying recorded moves on a default board.
    ///
    /// Replay stops at the first terminal outcome, exactly as live play
    /// would; trailing moves past it are ignored.
    ///
    /// # Errors
    ///
    /// Propagates any build or move error encountered while replaying.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, MatchError> {
        let mut game = Self::start_default()?;
        for mov in moves {
            if game.is_terminal() {
                break;
            }
            game.attempt_move(mov.side, mov.to)?;
        }
        Ok(game)
    }
}
