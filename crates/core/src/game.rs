use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::belief::BeliefGrid;
use crate::config::{AgentLevel, ConfigError, GameConfig};
use crate::state::{AgentState, GameState};
use crate::types::*;
use crate::world::World;

mod arrow;
mod engine;
mod hash;
pub mod inference;
mod intents;
mod outcome;
pub mod pathfinding;
pub mod policy;

#[cfg(test)]
mod test_support;

pub struct Game {
    seed: u64,
    tick: u64,
    rng: ChaCha8Rng,
    config: GameConfig,
    state: GameState,
    log: Vec<LogEvent>,
    next_input_seq: u64,
    auto_mode: bool,
}

impl Game {
    pub fn new(seed: u64, config: &GameConfig) -> Result<Self, ConfigError> {
        let size = config.grid_size()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let world = World::generate(size, &mut rng);
        Ok(Self::assemble(seed, rng, config, world))
    }

    /// Starts from a hand-built world. The grid size comes from `world`.
    pub fn with_world(seed: u64, config: &GameConfig, world: World) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        Self::assemble(seed, rng, config, world)
    }

    fn assemble(seed: u64, rng: ChaCha8Rng, config: &GameConfig, world: World) -> Self {
        let mut game = Self {
            seed,
            tick: 0,
            rng,
            config: config.clone(),
            state: GameState::new(world),
            log: vec![LogEvent::WorldReset { seed }],
            next_input_seq: 0,
            auto_mode: false,
        };
        game.observe_current();
        game
    }

    /// Replaces world, beliefs and agent in one step. Auto mode and the tick clock carry over.
    pub fn reset(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let world = World::generate(self.state.world.size(), &mut rng);
        self.seed = seed;
        self.rng = rng;
        self.state = GameState::new(world);
        self.log.push(LogEvent::WorldReset { seed });
        self.observe_current();
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn next_input_seq(&self) -> u64 {
        self.next_input_seq
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn level(&self) -> AgentLevel {
        self.config.agent_level
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn agent(&self) -> &AgentState {
        &self.state.agent
    }

    pub fn beliefs(&self) -> &BeliefGrid {
        &self.state.beliefs
    }

    pub fn world(&self) -> &World {
        &self.state.world
    }

    pub fn terminal(&self) -> Terminal {
        self.state.agent.terminal
    }

    pub fn auto_mode(&self) -> bool {
        self.auto_mode
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn current_percepts(&self) -> Percepts {
        self.state.world.percepts(self.state.agent.pos)
    }

    /// Runs the belief update for the agent's cell at the current capability level.
    fn observe_current(&mut self) {
        let pos = self.state.agent.pos;
        let level = self.config.agent_level;
        if level == AgentLevel::RandomWalk {
            self.state.beliefs.mark_visited(pos);
            return;
        }

        let percepts = self.state.world.percepts(pos);
        let observation =
            inference::observe(&mut self.state.beliefs, pos, percepts, level.deduces());
        if observation.first_visit {
            self.log.push(LogEvent::Observed { pos, percepts });
        }
        for (cell, hazard) in observation.deductions {
            self.log.push(LogEvent::Deduced { pos: cell, hazard });
        }
    }
}

/// Seed for the world that follows `seed` when a reset does not name one.
pub fn derive_next_seed(seed: u64) -> u64 {
    let mut mixed = seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}
