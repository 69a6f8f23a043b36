//! Percept-driven belief updates.
//! Blanket elimination always runs first, so a neighbor ruled out by any clean
//! observation can never be picked up later as a deduction candidate.

use crate::belief::BeliefGrid;
use crate::types::{Hazard, Percepts, Pos};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Observation {
    pub first_visit: bool,
    /// Cells newly proven to hold a hazard by this observation.
    pub deductions: Vec<(Pos, Hazard)>,
}

pub fn observe(
    beliefs: &mut BeliefGrid,
    pos: Pos,
    percepts: Percepts,
    deduce: bool,
) -> Observation {
    let first_visit = beliefs.mark_visited(pos);
    eliminate(beliefs, pos, percepts);

    let mut deductions = Vec::new();
    if deduce {
        for (hazard, present) in [(Hazard::Pit, percepts.breeze), (Hazard::Wumpus, percepts.stench)] {
            if present && let Some(cell) = deduce_single_candidate(beliefs, pos, hazard) {
                deductions.push((cell, hazard));
            }
        }
    }

    Observation { first_visit, deductions }
}

fn eliminate(beliefs: &mut BeliefGrid, pos: Pos, percepts: Percepts) {
    let size = beliefs.size();
    for neighbor in size.neighbors(pos) {
        if !percepts.stench {
            beliefs.settle_suspicion(neighbor, Hazard::Wumpus, false);
        }
        if !percepts.breeze {
            beliefs.settle_suspicion(neighbor, Hazard::Pit, false);
        }
        if !percepts.stench && !percepts.breeze {
            beliefs.settle_safe(neighbor, true);
        }
    }
}

/// Marks the hazard when exactly one neighbor could still explain the signal.
/// Returns the cell only if the mark changed anything.
fn deduce_single_candidate(beliefs: &mut BeliefGrid, pos: Pos, hazard: Hazard) -> Option<Pos> {
    let size = beliefs.size();
    let mut candidates = size.neighbors(pos).filter(|neighbor| {
        let cell = beliefs.cell(*neighbor);
        !cell.visited && !cell.safe.is_true() && !cell.suspicion(hazard).is_false()
    });
    let candidate = candidates.next()?;
    if candidates.next().is_some() {
        return None;
    }

    let suspected = beliefs.settle_suspicion(candidate, hazard, true);
    let unsafe_marked = beliefs.settle_safe(candidate, false);
    (suspected || unsafe_marked).then_some(candidate)
}
