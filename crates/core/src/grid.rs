//! Grid geometry shared by the hazard layout and the belief model.

use crate::config::ConfigError;
use crate::types::{Direction, Pos};

/// Validated board dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSize {
    rows: usize,
    cols: usize,
}

impl Default for GridSize {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl GridSize {
    pub const STANDARD: GridSize = GridSize { rows: 4, cols: 4 };
    pub const MAX_SIDE: usize = 32;
    /// Origin, gold, wumpus and two pits.
    const MIN_CELLS: usize = 5;

    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows > Self::MAX_SIDE || cols > Self::MAX_SIDE {
            return Err(ConfigError::GridTooLarge { rows, cols });
        }
        if rows * cols < Self::MIN_CELLS {
            return Err(ConfigError::GridTooSmall { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(self) -> usize {
        self.rows
    }

    pub fn cols(self) -> usize {
        self.cols
    }

    pub fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    pub fn in_bounds(self, pos: Pos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    pub fn index(self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos).then(|| (pos.row as usize) * self.cols + (pos.col as usize))
    }

    /// All cells in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0..self.cell_count()).map(move |index| Pos::new((index / cols) as i32, (index % cols) as i32))
    }

    /// Orthogonal neighbors clipped at the edges, in `Direction::ALL` order.
    pub fn neighbors(self, pos: Pos) -> impl Iterator<Item = Pos> {
        Direction::ALL.into_iter().map(move |direction| pos.step(direction)).filter(move |next| self.in_bounds(*next))
    }
}
