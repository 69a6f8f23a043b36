//! Per-cell knowledge derived solely from percepts already observed.
//!
//! Every predicate is written through `TriState::settle`, so a settled value never
//! changes. Three writers step outside that rule and are kept here so they stay
//! visible: the grid-wide wumpus clear after a confirmed kill, the shot target
//! being marked safe, and the death cell being marked unsafe once the round ends.

use crate::grid::GridSize;
use crate::types::{Hazard, Pos, TriState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BeliefCell {
    pub visited: bool,
    pub safe: TriState,
    pub pit_suspected: TriState,
    pub wumpus_suspected: TriState,
}

impl BeliefCell {
    pub fn suspicion(&self, hazard: Hazard) -> TriState {
        match hazard {
            Hazard::Pit => self.pit_suspected,
            Hazard::Wumpus => self.wumpus_suspected,
        }
    }

    fn suspicion_mut(&mut self, hazard: Hazard) -> &mut TriState {
        match hazard {
            Hazard::Pit => &mut self.pit_suspected,
            Hazard::Wumpus => &mut self.wumpus_suspected,
        }
    }

    /// Neither hazard is believed present.
    pub fn not_suspected(&self) -> bool {
        !self.pit_suspected.is_true() && !self.wumpus_suspected.is_true()
    }

    /// Settled safe with no hazard believed present.
    pub fn known_safe(&self) -> bool {
        self.safe.is_true() && self.not_suspected()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeliefGrid {
    size: GridSize,
    cells: Vec<BeliefCell>,
}

impl BeliefGrid {
    pub fn new(size: GridSize) -> Self {
        Self { size, cells: vec![BeliefCell::default(); size.cell_count()] }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Out-of-bounds cells read as fully unknown.
    pub fn cell(&self, pos: Pos) -> BeliefCell {
        self.size.index(pos).map(|index| self.cells[index]).unwrap_or_default()
    }

    pub fn cells(&self) -> impl Iterator<Item = (Pos, BeliefCell)> + '_ {
        self.size.positions().zip(self.cells.iter().copied())
    }

    fn cell_mut(&mut self, pos: Pos) -> Option<&mut BeliefCell> {
        self.size.index(pos).map(|index| &mut self.cells[index])
    }

    /// Returns whether this was the first visit.
    pub fn mark_visited(&mut self, pos: Pos) -> bool {
        let Some(cell) = self.cell_mut(pos) else {
            return false;
        };
        let first_visit = !cell.visited;
        cell.visited = true;
        cell.safe.settle(true);
        first_visit
    }

    pub fn settle_safe(&mut self, pos: Pos, safe: bool) -> bool {
        self.cell_mut(pos).is_some_and(|cell| cell.safe.settle(safe))
    }

    pub fn settle_suspicion(&mut self, pos: Pos, hazard: Hazard, present: bool) -> bool {
        self.cell_mut(pos).is_some_and(|cell| cell.suspicion_mut(hazard).settle(present))
    }

    /// The wumpus is confirmed dead: nowhere can hold it any more.
    pub fn clear_wumpus_suspicion(&mut self) {
        for cell in &mut self.cells {
            cell.wumpus_suspected = TriState::False;
        }
    }

    /// Shot target. The arrow settles the cell whether or not it hit, unless a
    /// hazard is still believed to be there: a miss proves nothing about a pit.
    pub fn force_safe(&mut self, pos: Pos) {
        if let Some(cell) = self.cell_mut(pos)
            && cell.not_suspected()
        {
            cell.safe = TriState::True;
        }
    }

    /// The agent died here.
    pub fn mark_deadly(&mut self, pos: Pos) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.safe = TriState::False;
        }
    }
}
