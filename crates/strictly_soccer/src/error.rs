//! Errors raised when constructing boards and matches.

use super::action::MoveError;

/// Error rejecting degenerate board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The grid cannot host the fixed topology.
    #[display(
        "Board {}x{} rejected: width must be odd and at least 3, height at least 4",
        width,
        height
    )]
    OutOfBounds {
        /// Requested number of columns.
        width: u16,
        /// Requested number of rows.
        height: u16,
    },
}

impl std::error::Error for BoardError {}

/// Error starting or replaying a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum MatchError {
    /// Board construction failed.
    #[display("{}", _0)]
    Board(BoardError),

    /// A recorded move failed to apply.
    #[display("{}", _0)]
    Move(MoveError),
}

impl std::error::Error for MatchError {}
