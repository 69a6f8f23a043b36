//! The single-use arrow, shared by the aimed policy shot and the manual shot.

use super::*;

impl Game {
    /// Consumes the arrow and resolves it against `target`.
    pub(super) fn loose_arrow(&mut self, target: Pos, direction: Direction) {
        let agent = &mut self.state.agent;
        agent.facing = direction;
        agent.weapon_available = false;

        let hit = self.state.world.arrow_hits(target);
        if hit {
            self.state.agent.wumpus_alive = false;
            self.state.agent.score += self.config.scoring.wumpus_kill;
            self.state.beliefs.clear_wumpus_suspicion();
        }
        self.state.beliefs.force_safe(target);
        self.log.push(LogEvent::Shot { target, hit });
    }
}
