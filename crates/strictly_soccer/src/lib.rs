//! Strictly Soccer - paper soccer game logic
//!
//! Rule engine for a paper-soccer style board game: a ball moves across a
//! grid of nodes, each traversed edge becomes unusable, vacated nodes turn
//! to walls, and a round ends when the ball reaches a goal mouth or the
//! side to move runs out of legal replies.
//!
//! # Architecture
//!
//! - **Board**: fixed node grid with a pre-seeded perimeter fence in the
//!   used-edge ledger ([`BoardState`])
//! - **Rules**: legal-move generation over the ledger ([`legal_moves`])
//! - **Match**: move execution, turn handling, scoring, stalemate
//!   ([`Match`])
//! - **Heuristic**: greedy opponent move chooser ([`choose_move`])
//! - **Session**: cumulative score across rounds ([`Session`])
//!
//! The crate is a pure in-process library: no I/O, no rendering, no
//! transport. Presentation layers consume the read-only board snapshot and
//! drive the match through [`Match::attempt_move`].
//!
//! # Example
//!
//! ```
//! use strictly_soccer::{Match, Outcome, Side};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Match::start_default()?;
//! let destination = game.legal_moves()[0];
//! let outcome = game.attempt_move(Side::A, destination)?;
//! assert_eq!(outcome, Outcome::Continue);
//! assert_eq!(game.current_side(), Side::B);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod error;
mod game;
mod heuristic;
mod invariants;
mod rules;
mod session;
mod types;

// Crate-level exports - Actions and errors
pub use action::{Move, MoveError};
pub use error::{BoardError, MatchError};

// Crate-level exports - Board model
pub use board::{BoardState, EdgeKey};

// Crate-level exports - Rules
pub use rules::{is_stalemated, legal_moves};

// Crate-level exports - Match control
pub use game::{Match, Outcome};

// Crate-level exports - Opponent heuristic
pub use heuristic::choose_move;

// Crate-level exports - Session management
pub use session::Session;

// Crate-level exports - Invariants
pub use invariants::{
    assert_invariants, BallPlaced, Invariant, InvariantSet, InvariantViolation, LedgerSymmetric,
    SoccerInvariants, WallsMonotonic,
};

// Crate-level exports - Core types
pub use types::{BoardConfig, CellKind, Coord, Phase, Score, Side};
