//! Discrete inputs from the embedding application.
//! Rejected intents leave the state untouched and do not advance the input sequence.

use super::*;

impl Game {
    pub fn apply_intent(&mut self, intent: Intent) -> Result<(), GameError> {
        match intent {
            Intent::Move(direction) => self.manual_move(direction)?,
            Intent::Shoot => self.manual_shot()?,
            Intent::Step => {
                self.ensure_playing()?;
                self.step();
            }
            Intent::Reset => self.reset(derive_next_seed(self.seed)),
            Intent::ToggleAutoMode => {
                self.auto_mode = !self.auto_mode;
                self.log.push(LogEvent::AutoModeChanged { enabled: self.auto_mode });
            }
        }
        self.next_input_seq += 1;
        Ok(())
    }

    fn ensure_playing(&self) -> Result<(), GameError> {
        if self.state.agent.terminal.is_playing() { Ok(()) } else { Err(GameError::NotPlaying) }
    }

    fn manual_move(&mut self, direction: Direction) -> Result<(), GameError> {
        self.ensure_playing()?;
        let to = self.state.agent.pos.step(direction);
        if !self.state.world.size().in_bounds(to) {
            return Err(GameError::InvalidMove(InvalidMoveReason::OutOfBounds));
        }
        let cell = self.state.beliefs.cell(to);
        if cell.safe.is_false() || !cell.not_suspected() {
            return Err(GameError::InvalidMove(InvalidMoveReason::KnownUnsafe));
        }

        self.move_agent(to, direction, MoveReason::Manual);
        self.resolve_outcome();
        if self.state.agent.terminal.is_playing() {
            self.observe_current();
        }
        Ok(())
    }

    fn manual_shot(&mut self) -> Result<(), GameError> {
        self.ensure_playing()?;
        let agent = &self.state.agent;
        if !agent.weapon_available {
            return Err(GameError::NoWeapon);
        }
        if !agent.wumpus_alive {
            return Err(GameError::WumpusAlreadyDead);
        }
        let direction = agent.facing;
        let target = agent.pos.step(direction);
        if !self.state.world.size().in_bounds(target) {
            return Err(GameError::ShotOutOfBounds);
        }

        self.loose_arrow(target, direction);
        self.resolve_outcome();
        Ok(())
    }

    pub(super) fn move_agent(&mut self, to: Pos, direction: Direction, reason: MoveReason) {
        let from = self.state.agent.pos;
        self.state.agent.pos = to;
        self.state.agent.facing = direction;
        self.state.agent.steps += 1;
        self.log.push(LogEvent::Moved { from, to, reason });
    }
}
