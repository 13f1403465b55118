//! Board topology and state: node grid, used-edge ledger, ball position.

use super::error::BoardError;
use super::types::{BoardConfig, CellKind, Coord, Side};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Canonical unordered edge between two neighboring nodes.
///
/// The constructor orders the endpoints, so `(a, b)` and `(b, a)` produce
/// the same key and a single ledger entry answers queries in both
/// directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    a: Coord,
    b: Coord,
}

impl EdgeKey {
    /// Creates the canonical key for the edge between `x` and `y`.
    pub fn new(x: Coord, y: Coord) -> Self {
        if x <= y {
            Self { a: x, b: y }
        } else {
            Self { a: y, b: x }
        }
    }

    /// The two endpoints in canonical order.
    pub fn endpoints(self) -> (Coord, Coord) {
        (self.a, self.b)
    }
}

/// Full board state for one round.
///
/// Owns the node grid, the used-edge ledger (pre-seeded with the field
/// fence), and the ball position. Built once per round; mutated only
/// through the match controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    width: u16,
    height: u16,
    /// Node kinds in row-major order.
    cells: Vec<CellKind>,
    /// Edges already traversed this round, boundary fence included.
    used_edges: HashSet<EdgeKey>,
    ball_pos: Coord,
}

impl BoardState {
    /// Builds the initial board for the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for dimensions that cannot host
    /// the topology: `width` must be odd and at least 3 (a goal needs a
    /// center column), `height` at least 4.
    #[instrument]
    pub fn build(width: u16, height: u16) -> Result<Self, BoardError> {
        if width < 3 || width % 2 == 0 || height < 4 {
            return Err(BoardError::OutOfBounds { width, height });
        }

        let ball_pos = Coord::new((height - 1) / 2, (width - 1) / 2);
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for row in 0..height {
            for col in 0..width {
                cells.push(Self::classify(Coord::new(row, col), width, height, ball_pos));
            }
        }

        let mut board = Self {
            width,
            height,
            cells,
            used_edges: HashSet::new(),
            ball_pos,
        };
        board.seed_boundary_edges();
        debug!(
            width,
            height,
            boundary_edges = board.used_edges.len(),
            "Built board"
        );
        Ok(board)
    }

    /// Builds a board from a config.
    pub fn from_config(config: BoardConfig) -> Result<Self, BoardError> {
        Self::build(config.width, config.height)
    }

    /// Determines what a node is from its position alone.
    ///
    /// The short edges carry the goals in the center column with walls on
    /// either side; the rows just inside them are walled except for the
    /// goal mouth; the long edges are side-line walls; everything else is
    /// playable field.
    fn classify(c: Coord, width: u16, height: u16, ball: Coord) -> CellKind {
        let center_col = (width - 1) / 2;
        if c.row == 0 || c.row == height - 1 {
            if c.col == center_col {
                let side = if c.row == 0 { Side::A } else { Side::B };
                return CellKind::Goal { side };
            }
            return CellKind::Wall;
        }
        if c.row == 1 || c.row == height - 2 {
            if c.col == center_col {
                return CellKind::Free { has_ball: c == ball };
            }
            return CellKind::Wall;
        }
        if c.col == 0 || c.col == width - 1 {
            return CellKind::Wall;
        }
        CellKind::Free { has_ball: c == ball }
    }

    /// Pre-marks the field fence as traversed so the ball can never be
    /// walked along or through the perimeter: two horizontal rims, the
    /// vertical connectors between them (broken at the goal column), an
    /// inner rim with its diagonals (stopping short of the goal mouth),
    /// and the side lines.
    fn seed_boundary_edges(&mut self) {
        let (w, h) = (self.width, self.height);
        let center_col = (w - 1) / 2;
        for j in 0..w - 1 {
            // Horizontal rim along the top and bottom rows.
            self.mark_used(Coord::new(0, j), Coord::new(0, j + 1));
            self.mark_used(Coord::new(h - 1, j), Coord::new(h - 1, j + 1));
            if j != center_col {
                // Connectors between the rim rows, except where the goal is.
                self.mark_used(Coord::new(0, j), Coord::new(1, j));
                self.mark_used(Coord::new(h - 1, j), Coord::new(h - 2, j));
                if j != center_col - 1 {
                    // Inner rim, closer to the middle.
                    self.mark_used(Coord::new(1, j), Coord::new(1, j + 1));
                    self.mark_used(Coord::new(h - 2, j), Coord::new(h - 2, j + 1));
                    // Diagonals between the two rim rows.
                    self.mark_used(Coord::new(0, j), Coord::new(1, j + 1));
                    self.mark_used(Coord::new(h - 1, j), Coord::new(h - 2, j + 1));
                }
            }
        }
        for i in 1..h - 1 {
            // Side lines on the left and right.
            self.mark_used(Coord::new(i, 0), Coord::new(i + 1, 0));
            self.mark_used(Coord::new(i, w - 1), Coord::new(i + 1, w - 1));
        }
    }

    fn mark_used(&mut self, a: Coord, b: Coord) {
        self.used_edges.insert(EdgeKey::new(a, b));
    }

    fn index(&self, c: Coord) -> usize {
        c.row as usize * self.width as usize + c.col as usize
    }

    fn set_cell(&mut self, c: Coord, kind: CellKind) {
        let idx = self.index(c);
        self.cells[idx] = kind;
    }

    /// Number of columns.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The goal column, shared by both goals.
    pub fn center_col(&self) -> u16 {
        (self.width - 1) / 2
    }

    /// True if the coordinate lies on the grid.
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.row < self.height && c.col < self.width
    }

    /// The kind of the node at `c`, or `None` off the grid.
    pub fn cell(&self, c: Coord) -> Option<CellKind> {
        if self.in_bounds(c) {
            Some(self.cells[self.index(c)])
        } else {
            None
        }
    }

    /// The node currently holding the ball.
    pub fn ball_pos(&self) -> Coord {
        self.ball_pos
    }

    /// True if the ball sits on `c`.
    ///
    /// Answered from the ball position rather than the cell flag, since a
    /// bounce can park the ball on a walled node that carries no flag.
    pub fn has_ball(&self, c: Coord) -> bool {
        self.ball_pos == c
    }

    /// True if the edge between `a` and `b` has been traversed. Symmetric.
    pub fn edge_used(&self, a: Coord, b: Coord) -> bool {
        self.used_edges.contains(&EdgeKey::new(a, b))
    }

    /// Number of entries in the used-edge ledger, fence included.
    pub fn used_edge_count(&self) -> usize {
        self.used_edges.len()
    }

    pub(crate) fn edge_keys(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.used_edges.iter().copied()
    }

    /// Applies the node-level effects of pushing the ball to `to`: records
    /// the traversed edge, turns the vacated node to wall, and re-homes the
    /// ball. The caller has already validated legality.
    pub(crate) fn move_ball(&mut self, to: Coord) {
        let from = self.ball_pos;
        self.mark_used(from, to);
        self.set_cell(from, CellKind::Wall);
        if let Some(CellKind::Free { .. }) = self.cell(to) {
            self.set_cell(to, CellKind::Free { has_ball: true });
        }
        self.ball_pos = to;
    }

    #[cfg(test)]
    pub(crate) fn corrupt_cell(&mut self, c: Coord, kind: CellKind) {
        self.set_cell(c, kind);
    }

    /// Renders the board as text: `#` wall, `.` free, `o` ball, `A`/`B`
    /// goal mouths. One line per row, top row first.
    pub fn display(&self) -> String {
        let mut out = String::new();
        for row in 0..self.height {
            for col in 0..self.width {
                let c = Coord::new(row, col);
                let symbol = if self.has_ball(c) {
                    'o'
                } else {
                    match self.cells[self.index(c)] {
                        CellKind::Free { .. } => '.',
                        CellKind::Wall => '#',
                        CellKind::Goal { side: Side::A } => 'A',
                        CellKind::Goal { side: Side::B } => 'B',
                    }
                };
                out.push(symbol);
            }
            if row < self.height - 1 {
                out.push('\n');
            }
        }
        out
    }
}
