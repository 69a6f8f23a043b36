//! One decision cycle: observe, decide, act, resolve.

use rand_chacha::rand_core::Rng;

use super::*;

impl Game {
    /// Runs exactly one decision cycle and returns the action it took.
    /// `None` once the round is over.
    pub fn step(&mut self) -> Option<AgentAction> {
        if !self.state.agent.terminal.is_playing() {
            return None;
        }
        Some(self.run_decision_cycle())
    }

    fn run_decision_cycle(&mut self) -> AgentAction {
        self.observe_current();

        let level = self.config.agent_level;
        let action = if level == AgentLevel::RandomWalk {
            self.random_walk_action()
        } else {
            let percepts = self.current_percepts();
            policy::decide(&self.state.beliefs, &self.state.agent, percepts, level)
        };

        self.execute(action);
        self.resolve_outcome();
        action
    }

    fn random_walk_action(&mut self) -> AgentAction {
        let from = self.state.agent.pos;
        let options: Vec<Pos> = self.state.world.size().neighbors(from).collect();
        if options.is_empty() {
            return AgentAction::GiveUp(StuckReason::NoOptions);
        }
        let to = options[(self.rng.next_u64() % options.len() as u64) as usize];
        match Direction::between(from, to) {
            Some(direction) => AgentAction::Move { to, direction, reason: MoveReason::RandomWalk },
            None => AgentAction::GiveUp(StuckReason::NoOptions),
        }
    }

    fn execute(&mut self, action: AgentAction) {
        match action {
            AgentAction::Shoot { target, direction } => self.loose_arrow(target, direction),
            AgentAction::Move { to, direction, reason } => self.move_agent(to, direction, reason),
            AgentAction::PickUpGold => self.pick_up_gold(),
            AgentAction::GiveUp(reason) => {
                self.state.agent.terminal = Terminal::Stuck(reason);
                self.log.push(LogEvent::Stuck { reason });
            }
        }
    }
}
