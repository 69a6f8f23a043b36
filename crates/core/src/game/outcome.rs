//! Consequences of standing on a cell: death, gold pickup, and extraction.
//! Runs once after every action, autonomous or manual.

use super::*;

impl Game {
    pub(super) fn resolve_outcome(&mut self) {
        if !self.state.agent.terminal.is_playing() {
            return;
        }
        let pos = self.state.agent.pos;

        if let Some(cause) = self.state.world.lethal_at(pos) {
            self.state.agent.score += self.config.scoring.death;
            self.state.beliefs.mark_deadly(pos);
            self.state.agent.terminal = Terminal::Lost(cause);
            self.log.push(LogEvent::Died { pos, cause });
            return;
        }

        if !self.state.agent.has_gold && self.state.world.has_gold(pos) {
            self.pick_up_gold();
        }

        if self.state.agent.has_gold && pos == ORIGIN {
            self.state.agent.score += self.config.scoring.return_with_gold;
            self.state.agent.terminal = Terminal::Won;
            self.log.push(LogEvent::Won { score: self.state.agent.score });
        }
    }

    pub(super) fn pick_up_gold(&mut self) {
        let pos = self.state.agent.pos;
        if self.state.agent.has_gold || !self.state.world.take_gold(pos) {
            return;
        }
        self.state.agent.has_gold = true;
        self.state.agent.score += self.config.scoring.gold_pickup;
        self.log.push(LogEvent::GoldPickedUp { pos });
    }
}
