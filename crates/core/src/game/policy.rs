//! Fixed-priority decision procedure.
//! Pure: reads beliefs and agent state, returns exactly one action. The belief
//! update for the current cell has already run when `decide` is called.

use crate::belief::{BeliefCell, BeliefGrid};
use crate::config::AgentLevel;
use crate::state::AgentState;
use crate::types::*;

use super::pathfinding::find_path;

pub fn decide(
    beliefs: &BeliefGrid,
    agent: &AgentState,
    percepts: Percepts,
    level: AgentLevel,
) -> AgentAction {
    if level.aims_shots()
        && let Some(action) = aimed_shot(beliefs, agent, percepts)
    {
        return action;
    }

    if agent.has_gold {
        return retreat(beliefs, agent.pos);
    }

    if percepts.glitter {
        return AgentAction::PickUpGold;
    }

    if let Some(action) = explore_known_safe(beliefs, agent.pos) {
        return action;
    }

    if let Some(action) = calculated_risk(beliefs, agent.pos) {
        return action;
    }

    AgentAction::GiveUp(StuckReason::NoOptions)
}

/// Fires only when the stench has exactly one unvisited neighbor left to explain it.
fn aimed_shot(beliefs: &BeliefGrid, agent: &AgentState, percepts: Percepts) -> Option<AgentAction> {
    if !agent.weapon_available || !agent.wumpus_alive || !percepts.stench {
        return None;
    }

    let mut candidates = beliefs.size().neighbors(agent.pos).filter(|neighbor| {
        let cell = beliefs.cell(*neighbor);
        !cell.visited && !cell.wumpus_suspected.is_false()
    });
    let target = candidates.next()?;
    if candidates.next().is_some() {
        return None;
    }
    let direction = Direction::between(agent.pos, target)?;
    Some(AgentAction::Shoot { target, direction })
}

fn retreat(beliefs: &BeliefGrid, pos: Pos) -> AgentAction {
    let route = find_path(beliefs, pos, ORIGIN, RiskMode::Strict)
        .or_else(|| find_path(beliefs, pos, ORIGIN, RiskMode::Permissive));
    route
        .and_then(|path| first_move(pos, &path, MoveReason::Retreat))
        .unwrap_or(AgentAction::GiveUp(StuckReason::NoRetreatPath))
}

fn explore_known_safe(beliefs: &BeliefGrid, pos: Pos) -> Option<AgentAction> {
    nearest_first(beliefs, pos, BeliefCell::known_safe).into_iter().find_map(|target| {
        let path = find_path(beliefs, pos, target, RiskMode::Strict)?;
        first_move(pos, &path, MoveReason::ExploreSafe)
    })
}

fn calculated_risk(beliefs: &BeliefGrid, pos: Pos) -> Option<AgentAction> {
    nearest_first(beliefs, pos, |cell| cell.not_suspected()).into_iter().find_map(|target| {
        let path = find_path(beliefs, pos, target, RiskMode::Permissive)?;
        first_move(pos, &path, MoveReason::CalculatedRisk)
    })
}

/// Unvisited cells accepted by `accept`, ordered by Manhattan distance from `pos`
/// and then row-major.
pub fn nearest_first(
    beliefs: &BeliefGrid,
    pos: Pos,
    accept: impl Fn(&BeliefCell) -> bool,
) -> Vec<Pos> {
    let mut targets: Vec<Pos> = beliefs
        .cells()
        .filter(|(_, cell)| !cell.visited && accept(cell))
        .map(|(target, _)| target)
        .collect();
    targets.sort_by_key(|target| (pos.manhattan(*target), target.row, target.col));
    targets
}

fn first_move(pos: Pos, path: &[Pos], reason: MoveReason) -> Option<AgentAction> {
    let to = path.first().copied()?;
    let direction = Direction::between(pos, to)?;
    Some(AgentAction::Move { to, direction, reason })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::inference::observe;
    use crate::grid::GridSize;

    const STENCH: Percepts = Percepts { glitter: false, stench: true, breeze: false };

    fn agent_at(pos: Pos) -> AgentState {
        AgentState { pos, ..AgentState::default() }
    }

    #[test]
    fn explores_nearest_safe_cell_in_row_major_order() {
        let mut beliefs = BeliefGrid::new(GridSize::STANDARD);
        observe(&mut beliefs, ORIGIN, Percepts::NONE, true);
        let action = decide(&beliefs, &agent_at(ORIGIN), Percepts::NONE, AgentLevel::Deductive);
        assert_eq!(
            action,
            AgentAction::Move {
                to: Pos::new(0, 1),
                direction: Direction::Right,
                reason: MoveReason::ExploreSafe
            }
        );
    }

    #[test]
    fn shoots_the_only_remaining_stench_candidate() {
        let mut beliefs = BeliefGrid::new(GridSize::STANDARD);
        for pos in [Pos::new(0, 2), Pos::new(1, 1), Pos::new(1, 3)] {
            beliefs.mark_visited(pos);
        }
        let pos = Pos::new(1, 2);
        observe(&mut beliefs, pos, STENCH, false);
        let action = decide(&beliefs, &agent_at(pos), STENCH, AgentLevel::Deductive);
        assert_eq!(action, AgentAction::Shoot { target: Pos::new(2, 2), direction: Direction::Down });

        let elimination = decide(&beliefs, &agent_at(pos), STENCH, AgentLevel::Elimination);
        assert!(!matches!(elimination, AgentAction::Shoot { .. }));
    }

    #[test]
    fn holds_fire_without_weapon_or_with_two_candidates() {
        let mut beliefs = BeliefGrid::new(GridSize::STANDARD);
        let pos = Pos::new(1, 2);
        observe(&mut beliefs, pos, STENCH, false);
        let action = decide(&beliefs, &agent_at(pos), STENCH, AgentLevel::Deductive);
        assert!(!matches!(action, AgentAction::Shoot { .. }));

        for visited in [Pos::new(0, 2), Pos::new(1, 1), Pos::new(1, 3)] {
            beliefs.mark_visited(visited);
        }
        let unarmed = AgentState { weapon_available: false, ..agent_at(pos) };
        let action = decide(&beliefs, &unarmed, STENCH, AgentLevel::Deductive);
        assert!(!matches!(action, AgentAction::Shoot { .. }));
    }

    #[test]
    fn gold_holder_retreats_toward_origin() {
        let mut beliefs = BeliefGrid::new(GridSize::STANDARD);
        for pos in [ORIGIN, Pos::new(0, 1), Pos::new(1, 1)] {
            beliefs.mark_visited(pos);
        }
        let agent = AgentState { has_gold: true, ..agent_at(Pos::new(1, 1)) };
        let action = decide(&beliefs, &agent, Percepts::NONE, AgentLevel::Deductive);
        assert_eq!(
            action,
            AgentAction::Move { to: Pos::new(0, 1), direction: Direction::Up, reason: MoveReason::Retreat }
        );
    }

    #[test]
    fn gold_holder_without_any_route_is_stuck() {
        let mut beliefs = BeliefGrid::new(GridSize::STANDARD);
        beliefs.mark_visited(Pos::new(2, 2));
        for blocked in GridSize::STANDARD.neighbors(Pos::new(2, 2)) {
            beliefs.settle_suspicion(blocked, Hazard::Pit, true);
        }
        let agent = AgentState { has_gold: true, ..agent_at(Pos::new(2, 2)) };
        let action = decide(&beliefs, &agent, Percepts::NONE, AgentLevel::Deductive);
        assert_eq!(action, AgentAction::GiveUp(StuckReason::NoRetreatPath));
    }

    #[test]
    fn glitter_means_pick_up_before_exploring() {
        let mut beliefs = BeliefGrid::new(GridSize::STANDARD);
        observe(&mut beliefs, Pos::new(1, 1), Percepts::NONE, true);
        let glitter = Percepts { glitter: true, ..Percepts::NONE };
        let action = decide(&beliefs, &agent_at(Pos::new(1, 1)), glitter, AgentLevel::Deductive);
        assert_eq!(action, AgentAction::PickUpGold);
    }

    #[test]
    fn falls_back_to_calculated_risk_then_gives_up() {
        let mut beliefs = BeliefGrid::new(GridSize::STANDARD);
        let breeze = Percepts { breeze: true, ..Percepts::NONE };
        observe(&mut beliefs, ORIGIN, breeze, true);
        let action = decide(&beliefs, &agent_at(ORIGIN), breeze, AgentLevel::Deductive);
        assert_eq!(
            action,
            AgentAction::Move {
                to: Pos::new(0, 1),
                direction: Direction::Right,
                reason: MoveReason::CalculatedRisk
            }
        );

        beliefs.settle_suspicion(Pos::new(0, 1), Hazard::Pit, true);
        beliefs.settle_suspicion(Pos::new(1, 0), Hazard::Pit, true);
        let action = decide(&beliefs, &agent_at(ORIGIN), breeze, AgentLevel::Deductive);
        assert_eq!(action, AgentAction::GiveUp(StuckReason::NoOptions));
    }

    #[test]
    fn unreachable_safe_target_yields_to_the_next_nearest() {
        let mut beliefs = BeliefGrid::new(GridSize::STANDARD);
        for pos in [ORIGIN, Pos::new(0, 1), Pos::new(0, 2)] {
            beliefs.mark_visited(pos);
        }
        beliefs.settle_safe(Pos::new(1, 0), false);
        beliefs.settle_safe(Pos::new(2, 0), true);
        beliefs.settle_safe(Pos::new(0, 3), true);

        let action = decide(&beliefs, &agent_at(ORIGIN), Percepts::NONE, AgentLevel::Deductive);
        assert_eq!(
            action,
            AgentAction::Move {
                to: Pos::new(0, 1),
                direction: Direction::Right,
                reason: MoveReason::ExploreSafe
            }
        );
    }

    #[test]
    fn safe_cell_with_a_standing_suspicion_is_not_explored() {
        let mut beliefs = BeliefGrid::new(GridSize::STANDARD);
        beliefs.mark_visited(ORIGIN);
        beliefs.settle_safe(Pos::new(0, 1), true);
        beliefs.settle_suspicion(Pos::new(0, 1), Hazard::Pit, true);
        beliefs.settle_safe(Pos::new(1, 0), false);

        let action = decide(&beliefs, &agent_at(ORIGIN), Percepts::NONE, AgentLevel::Deductive);
        assert_eq!(action, AgentAction::GiveUp(StuckReason::NoOptions));
    }

    #[test]
    fn nearest_first_orders_by_distance_then_row() {
        let beliefs = BeliefGrid::new(GridSize::STANDARD);
        let order = nearest_first(&beliefs, Pos::new(1, 1), |_| true);
        assert_eq!(&order[..5], &[
            Pos::new(1, 1),
            Pos::new(0, 1),
            Pos::new(1, 0),
            Pos::new(1, 2),
            Pos::new(2, 1)
        ]);
    }
}
