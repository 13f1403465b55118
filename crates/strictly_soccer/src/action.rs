//! First-class move actions for paper soccer.
//!
//! Moves are domain events, not side effects. They represent a side's
//! intent to push the ball and can be validated, stored, and replayed.

use super::types::{Coord, Side};
use serde::{Deserialize, Serialize};

/// A move: a side pushing the ball to a destination node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// Destination node for the ball.
    pub to: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(side: Side, to: Coord) -> Self {
        Self { side, to }
    }

    /// Returns the side making this move.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns the destination of this move.
    pub fn to(&self) -> Coord {
        self.to
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.side, self.to)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The destination is not in the current legal-move set.
    #[display("No legal move to {}", _0)]
    InvalidMove(Coord),

    /// A side attempted to move out of turn.
    #[display("It's not side {:?}'s turn", _0)]
    WrongTurn(Side),

    /// The round has already ended.
    #[display("Round is already over")]
    RoundOver,
}

impl std::error::Error for MoveError {}
