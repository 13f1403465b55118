//! Move legality rules for paper soccer.
//!
//! Pure queries over [`BoardState`] - no mutation, no state of their own
//! between calls.

use super::board::BoardState;
use super::types::{CellKind, Coord};
use tracing::instrument;

/// All destinations reachable from `from` in one move.
///
/// Scans the 8-neighborhood clipped to the grid, row-major ascending (row
/// outer, column inner). A goal neighbor is always reachable; the node the
/// ball sits on never is; any other neighbor is reachable iff the
/// connecting edge is untraveled. The scan order is deterministic, but
/// callers must not treat it as a preference ranking.
///
/// An empty result means the side to move is stalemated.
#[instrument(skip(board))]
pub fn legal_moves(board: &BoardState, from: Coord) -> Vec<Coord> {
    let mut moves = Vec::new();
    let row_start = from.row.saturating_sub(1);
    let row_end = (from.row + 1).min(board.height() - 1);
    let col_start = from.col.saturating_sub(1);
    let col_end = (from.col + 1).min(board.width() - 1);

    for row in row_start..=row_end {
        for col in col_start..=col_end {
            let to = Coord::new(row, col);
            if to == from {
                continue;
            }
            let Some(kind) = board.cell(to) else {
                continue;
            };
            if matches!(kind, CellKind::Goal { .. }) {
                // Goals are not edge-limited.
                moves.push(to);
                continue;
            }
            if !board.edge_used(from, to) {
                moves.push(to);
            }
        }
    }
    moves
}

/// True when no move is available from `from`.
pub fn is_stalemated(board: &BoardState, from: Coord) -> bool {
    legal_moves(board, from).is_empty()
}
