//! Core domain types for paper soccer.

use serde::{Deserialize, Serialize};

/// One of the two competing sides.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Side {
    /// Side A, owning the goal on the top row. Moves first.
    A,
    /// Side B, owning the goal on the bottom row.
    B,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Row of this side's goal on a board of the given height.
    pub fn goal_row(self, height: u16) -> u16 {
        match self {
            Side::A => 0,
            Side::B => height - 1,
        }
    }
}

/// A node coordinate on the board grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Coord {
    /// Row index, 0 at side A's goal line.
    pub row: u16,
    /// Column index, 0 at the left side line.
    pub col: u16,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What occupies a node on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Playable node; tracks whether the ball sits here.
    Free {
        /// True while the ball occupies this node.
        has_ball: bool,
    },
    /// Blocked terrain: the perimeter fence, or a node the ball has vacated.
    Wall,
    /// One of the two goal mouths.
    Goal {
        /// The side this goal belongs to; reaching it scores for that side.
        side: Side,
    },
}

impl CellKind {
    /// True for playable (free) nodes.
    pub fn is_free(self) -> bool {
        matches!(self, CellKind::Free { .. })
    }

    /// True for walled nodes.
    pub fn is_wall(self) -> bool {
        matches!(self, CellKind::Wall)
    }

    /// The owning side, if this is a goal node.
    pub fn goal_side(self) -> Option<Side> {
        match self {
            CellKind::Goal { side } => Some(side),
            _ => None,
        }
    }
}

/// Status of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Moves can be made.
    InProgress,
    /// The ball reached a goal; the round is over.
    Scored,
    /// The side to move has no legal move; the round is over.
    Stalemate,
}

/// Goals scored per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Goals credited to side A.
    pub side_a: u32,
    /// Goals credited to side B.
    pub side_b: u32,
}

impl Score {
    /// Credits one goal to the given side.
    pub fn record(&mut self, side: Side) {
        match side {
            Side::A => self.side_a += 1,
            Side::B => self.side_b += 1,
        }
    }

    /// Goals credited to the given side.
    pub fn get(self, side: Side) -> u32 {
        match side {
            Side::A => self.side_a,
            Side::B => self.side_b,
        }
    }

    /// Adds another score into this one.
    pub fn merge(&mut self, other: Score) {
        self.side_a += other.side_a;
        self.side_b += other.side_b;
    }

    /// The score as an `(A, B)` pair.
    pub fn as_pair(self) -> (u32, u32) {
        (self.side_a, self.side_b)
    }
}

/// Board dimensions for a round.
///
/// The default is the standard 9x13 field. Any odd width of at least 3 and
/// height of at least 4 is accepted by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of columns.
    pub width: u16,
    /// Number of rows.
    pub height: u16,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 9,
            height: 13,
        }
    }
}
