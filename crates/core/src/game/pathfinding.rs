//! A* over the belief grid.
//! Stateless: the policy re-plans from scratch every tick, so nothing here caches.

use std::collections::{BTreeMap, BTreeSet};

use crate::belief::{BeliefCell, BeliefGrid};
use crate::types::{Pos, RiskMode};

/// Open-set entry. Field order makes the set pop lowest `f`, then lowest `h`,
/// then row-major position, which fixes the tie-break.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenNode {
    f: u32,
    h: u32,
    row: i32,
    col: i32,
}

pub fn is_admissible(cell: BeliefCell, mode: RiskMode) -> bool {
    match mode {
        RiskMode::Strict => cell.known_safe(),
        RiskMode::Permissive => !cell.safe.is_false() && cell.not_suspected(),
    }
}

/// Shortest route from `start` to `goal`, excluding `start`.
/// `None` when the goal cannot be reached; an empty route when `start == goal`.
pub fn find_path(beliefs: &BeliefGrid, start: Pos, goal: Pos, mode: RiskMode) -> Option<Vec<Pos>> {
    let size = beliefs.size();
    if !size.in_bounds(start) || !size.in_bounds(goal) {
        return None;
    }
    if start == goal {
        return Some(Vec::new());
    }
    if !is_admissible(beliefs.cell(goal), mode) {
        return None;
    }

    let mut open_set = BTreeSet::new();
    let mut g_score: BTreeMap<Pos, u32> = BTreeMap::new();
    let mut came_from: BTreeMap<Pos, Pos> = BTreeMap::new();

    let h = start.manhattan(goal);
    open_set.insert(OpenNode { f: h, h, row: start.row, col: start.col });
    g_score.insert(start, 0);

    while let Some(node) = open_set.pop_first() {
        let current = Pos::new(node.row, node.col);
        if current == goal {
            return Some(reconstruct_path(&came_from, start, goal));
        }

        let current_g = g_score.get(&current).copied().unwrap_or(u32::MAX);
        // Stale entry left behind by a later improvement.
        if node.f > current_g.saturating_add(node.h) {
            continue;
        }

        for neighbor in size.neighbors(current) {
            if !is_admissible(beliefs.cell(neighbor), mode) {
                continue;
            }
            let tentative_g = current_g.saturating_add(1);
            if tentative_g >= g_score.get(&neighbor).copied().unwrap_or(u32::MAX) {
                continue;
            }
            came_from.insert(neighbor, current);
            g_score.insert(neighbor, tentative_g);
            let h = neighbor.manhattan(goal);
            open_set.insert(OpenNode { f: tentative_g + h, h, row: neighbor.row, col: neighbor.col });
        }
    }

    None
}

fn reconstruct_path(came_from: &BTreeMap<Pos, Pos>, start: Pos, goal: Pos) -> Vec<Pos> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(previous) = came_from.get(&current).copied() {
        if previous == start {
            break;
        }
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
