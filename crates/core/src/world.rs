//! Hidden hazard layout and the percepts it produces.
//! The agent never reads this directly; it only sees `percepts`.

use std::error::Error;
use std::fmt;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::grid::GridSize;
use crate::types::{DeathCause, ORIGIN, Percepts, Pos};

/// Hand-specified placement of every item, used by tests and scenario tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldLayout {
    pub gold: Pos,
    pub wumpus: Pos,
    pub pits: [Pos; 2],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutError {
    OutOfBounds(Pos),
    OccupiesOrigin,
    Overlapping(Pos),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::OutOfBounds(pos) => write!(f, "{pos} is outside the grid"),
            LayoutError::OccupiesOrigin => f.write_str("no item may be placed on the origin"),
            LayoutError::Overlapping(pos) => write!(f, "{pos} holds more than one item"),
        }
    }
}

impl Error for LayoutError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    size: GridSize,
    pits: [Pos; 2],
    wumpus: Pos,
    wumpus_alive: bool,
    gold: Option<Pos>,
}

impl World {
    /// Shuffles every non-origin cell and deals gold, wumpus and two pits from the top.
    pub fn generate(size: GridSize, rng: &mut ChaCha8Rng) -> Self {
        let mut cells: Vec<Pos> = size.positions().filter(|pos| *pos != ORIGIN).collect();
        for index in (1..cells.len()).rev() {
            let swap_with = (rng.next_u64() % (index as u64 + 1)) as usize;
            cells.swap(index, swap_with);
        }

        // `GridSize` guarantees at least four non-origin cells.
        let layout = WorldLayout {
            gold: cells[0],
            wumpus: cells[1],
            pits: [cells[2], cells[3]],
        };
        Self::install(size, layout)
    }

    pub fn from_layout(size: GridSize, layout: WorldLayout) -> Result<Self, LayoutError> {
        let items = [layout.gold, layout.wumpus, layout.pits[0], layout.pits[1]];
        for (index, pos) in items.iter().enumerate() {
            if !size.in_bounds(*pos) {
                return Err(LayoutError::OutOfBounds(*pos));
            }
            if *pos == ORIGIN {
                return Err(LayoutError::OccupiesOrigin);
            }
            if items[..index].contains(pos) {
                return Err(LayoutError::Overlapping(*pos));
            }
        }
        Ok(Self::install(size, layout))
    }

    fn install(size: GridSize, layout: WorldLayout) -> Self {
        Self {
            size,
            pits: layout.pits,
            wumpus: layout.wumpus,
            wumpus_alive: true,
            gold: Some(layout.gold),
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn pits(&self) -> [Pos; 2] {
        self.pits
    }

    pub fn wumpus(&self) -> Pos {
        self.wumpus
    }

    pub fn wumpus_alive(&self) -> bool {
        self.wumpus_alive
    }

    /// `None` once the gold has been picked up.
    pub fn gold(&self) -> Option<Pos> {
        self.gold
    }

    pub fn has_pit(&self, pos: Pos) -> bool {
        self.pits.contains(&pos)
    }

    pub fn has_live_wumpus(&self, pos: Pos) -> bool {
        self.wumpus_alive && self.wumpus == pos
    }

    pub fn has_gold(&self, pos: Pos) -> bool {
        self.gold == Some(pos)
    }

    /// What kills an agent standing on `pos`, if anything.
    pub fn lethal_at(&self, pos: Pos) -> Option<DeathCause> {
        if self.has_pit(pos) {
            Some(DeathCause::Pit)
        } else if self.has_live_wumpus(pos) {
            Some(DeathCause::Wumpus)
        } else {
            None
        }
    }

    pub fn percepts(&self, pos: Pos) -> Percepts {
        let mut percepts = Percepts { glitter: self.has_gold(pos), ..Percepts::NONE };
        for neighbor in self.size.neighbors(pos) {
            percepts.stench |= self.has_live_wumpus(neighbor);
            percepts.breeze |= self.has_pit(neighbor);
        }
        percepts
    }

    /// Removes the gold from `pos`. Returns whether there was any.
    pub fn take_gold(&mut self, pos: Pos) -> bool {
        if self.has_gold(pos) {
            self.gold = None;
            true
        } else {
            false
        }
    }

    /// Resolves an arrow landing on `target`. Returns whether it killed the wumpus.
    pub fn arrow_hits(&mut self, target: Pos) -> bool {
        if self.has_live_wumpus(target) {
            self.wumpus_alive = false;
            true
        } else {
            false
        }
    }
}
