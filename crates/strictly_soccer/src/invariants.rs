//! First-class invariants for paper soccer.
//!
//! Invariants are logical properties that must hold throughout a round.
//! They are testable independently and serve as documentation of system
//! guarantees.

use super::game::Match;
use super::types::{CellKind, Coord};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the used-edge ledger answers queries symmetrically.
///
/// Every ledger entry must be reachable querying either endpoint first;
/// the canonical key encoding makes this structural, and this check keeps
/// it honest.
pub struct LedgerSymmetric;

impl Invariant<Match> for LedgerSymmetric {
    fn holds(game: &Match) -> bool {
        let board = game.board();
        board.edge_keys().all(|key| {
            let (a, b) = key.endpoints();
            board.edge_used(a, b) && board.edge_used(b, a)
        })
    }

    fn description() -> &'static str {
        "used-edge ledger answers queries symmetrically"
    }
}

/// Invariant: every node the ball has vacated stays a wall.
///
/// Verified against the move history: any past destination the ball has
/// since left must read as walled terrain (goals end the round, so a goal
/// destination is exempt).
pub struct WallsMonotonic;

impl Invariant<Match> for WallsMonotonic {
    fn holds(game: &Match) -> bool {
        let board = game.board();
        game.history().iter().all(|mov| match board.cell(mov.to) {
            Some(CellKind::Goal { .. }) => true,
            Some(kind) => mov.to == board.ball_pos() || kind == CellKind::Wall,
            None => false,
        })
    }

    fn description() -> &'static str {
        "vacated nodes stay walled"
    }
}

/// Invariant: exactly one ball, where the board says it is.
///
/// The ball position must be on the grid and off the goal mouths; a free
/// node carries the ball flag iff it is the ball position.
pub struct BallPlaced;

impl Invariant<Match> for BallPlaced {
    fn holds(game: &Match) -> bool {
        let board = game.board();
        let ball = board.ball_pos();
        match board.cell(ball) {
            Some(CellKind::Free { has_ball }) => {
                if !has_ball {
                    return false;
                }
            }
            // A bounce may park the ball on a walled node.
            Some(CellKind::Wall) => {}
            _ => return false,
        }
        for row in 0..board.height() {
            for col in 0..board.width() {
                let c = Coord::new(row, col);
                if let Some(CellKind::Free { has_ball: true }) = board.cell(c)
                    && c != ball
                {
                    return false;
                }
            }
        }
        true
    }

    fn description() -> &'static str {
        "the ball flag matches the ball position"
    }
}

/// All paper-soccer invariants as a composable set.
pub type SoccerInvariants = (LedgerSymmetric, WallsMonotonic, BallPlaced);

/// Asserts that all match invariants hold (checked in debug builds only).
pub fn assert_invariants(game: &Match) {
    debug_assert!(
        LedgerSymmetric::holds(game),
        "ledger symmetry violated"
    );
    debug_assert!(WallsMonotonic::holds(game), "wall monotonicity violated");
    debug_assert!(BallPlaced::holds(game), "ball placement violated");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    #[test]
    fn test_invariant_set_holds_for_fresh_match() {
        let game = Match::start_default().unwrap();
        assert!(SoccerInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Match::start_default().unwrap();
        game.attempt_move(Side::A, Coord::new(5, 4)).unwrap();
        game.attempt_move(Side::B, Coord::new(4, 3)).unwrap();
        assert!(SoccerInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_corruption() {
        let mut game = Match::start_default().unwrap();
        game.attempt_move(Side::A, Coord::new(5, 4)).unwrap();

        // Resurrect the vacated node.
        game.board_mut()
            .corrupt_cell(Coord::new(6, 4), CellKind::Free { has_ball: false });

        let violations = SoccerInvariants::check_all(&game).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_ball_flag_mismatch_violates() {
        let mut game = Match::start_default().unwrap();
        game.board_mut()
            .corrupt_cell(Coord::new(6, 4), CellKind::Free { has_ball: false });
        assert!(!BallPlaced::holds(&game));
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Match::start_default().unwrap();

        type TwoInvariants = (LedgerSymmetric, BallPlaced);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
