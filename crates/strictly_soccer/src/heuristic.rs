//! Opponent move heuristic.
//!
//! Greedy single-ply chooser: prefer stepping toward the target goal,
//! breaking ties at random. Intentionally not a search.

use super::board::BoardState;
use super::types::{Coord, Side};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks a destination among `legal` for a mover attacking `target`'s goal.
///
/// The scan prefers, in order:
/// 1. the first legal move stepping one row toward the target goal whose
///    column also drifts toward the center column (taken immediately);
/// 2. a uniformly random move among those stepping a row toward the target;
/// 3. a uniformly random move among all legal moves.
///
/// `legal` is scanned in the order given, so the immediate pick depends on
/// the generator's row-major scan order. Returns
/// `None` only when `legal` is empty - callers should have checked for
/// stalemate first.
#[instrument(skip(board, legal, rng))]
pub fn choose_move<R: Rng>(
    board: &BoardState,
    from: Coord,
    legal: &[Coord],
    target: Side,
    rng: &mut R,
) -> Option<Coord> {
    let target_row = target.goal_row(board.height());
    let forward = (target_row as i32 - from.row as i32).signum();
    let bias = (board.center_col() as i32 - from.col as i32).signum();
    let preferred_col = from.col as i32 + bias;

    let mut toward = Vec::new();
    if forward != 0 {
        for &to in legal {
            if to.row as i32 - from.row as i32 != forward {
                continue;
            }
            if to.col as i32 == preferred_col {
                debug!(to = %to, "Taking the direct step toward goal");
                return Some(to);
            }
            toward.push(to);
        }
    }

    if let Some(&to) = toward.choose(rng) {
        debug!(to = %to, "Picked among forward moves");
        return Some(to);
    }
    legal.choose(rng).copied()
}
