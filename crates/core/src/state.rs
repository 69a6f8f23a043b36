use crate::belief::BeliefGrid;
use crate::types::{Direction, ORIGIN, Pos, Terminal};
use crate::world::World;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentState {
    pub pos: Pos,
    pub facing: Direction,
    pub has_gold: bool,
    pub weapon_available: bool,
    /// The agent's knowledge, flipped only by its own confirmed kill.
    pub wumpus_alive: bool,
    pub score: i32,
    pub steps: u32,
    pub terminal: Terminal,
}

impl Default for AgentState {
    fn default() -> Self {
        Self {
            pos: ORIGIN,
            facing: Direction::Right,
            has_gold: false,
            weapon_available: true,
            wumpus_alive: true,
            score: 0,
            steps: 0,
            terminal: Terminal::Playing,
        }
    }
}

/// Everything a reset replaces in one piece.
#[derive(Clone, Debug)]
pub struct GameState {
    pub world: World,
    pub beliefs: BeliefGrid,
    pub agent: AgentState,
}

impl GameState {
    pub fn new(world: World) -> Self {
        let beliefs = BeliefGrid::new(world.size());
        Self { world, beliefs, agent: AgentState::default() }
    }
}
