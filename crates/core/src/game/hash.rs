//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from simulation control code.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::belief::BeliefCell;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);
        hasher.write_u64(self.next_input_seq);
        hasher.write_u8(u8::from(self.auto_mode));

        let agent = &self.state.agent;
        hasher.write_i32(agent.pos.row);
        hasher.write_i32(agent.pos.col);
        hasher.write_u8(agent.facing as u8);
        hasher.write_u8(u8::from(agent.has_gold));
        hasher.write_u8(u8::from(agent.weapon_available));
        hasher.write_u8(u8::from(agent.wumpus_alive));
        hasher.write_i32(agent.score);
        hasher.write_u32(agent.steps);
        hasher.write_u8(terminal_code(agent.terminal));

        let world = &self.state.world;
        hasher.write_u8(u8::from(world.wumpus_alive()));
        hasher.write_u8(u8::from(world.gold().is_some()));

        for (_, cell) in self.state.beliefs.cells() {
            hasher.write_u8(cell_code(cell));
        }
        hasher.finish()
    }
}

fn terminal_code(terminal: Terminal) -> u8 {
    match terminal {
        Terminal::Playing => 0,
        Terminal::Won => 1,
        Terminal::Lost(DeathCause::Pit) => 2,
        Terminal::Lost(DeathCause::Wumpus) => 3,
        Terminal::Stuck(StuckReason::NoRetreatPath) => 4,
        Terminal::Stuck(StuckReason::NoOptions) => 5,
    }
}

/// Packs one cell into a byte: two bits per predicate plus the visited bit.
fn cell_code(cell: BeliefCell) -> u8 {
    let tri = |value: TriState| match value {
        TriState::Unknown => 0u8,
        TriState::True => 1,
        TriState::False => 2,
    };
    u8::from(cell.visited)
        | tri(cell.safe) << 1
        | tri(cell.pit_suspected) << 3
        | tri(cell.wumpus_suspected) << 5
}
