//! Shared test fixtures for the `game` submodule test suites.

use super::*;
use crate::grid::GridSize;
use crate::world::WorldLayout;

/// Gold (1,1), wumpus (2,2), pits (3,0) and (0,3) on the 4x4 board.
pub(super) fn classic_layout() -> WorldLayout {
    WorldLayout { gold: Pos::new(1, 1), wumpus: Pos::new(2, 2), pits: [Pos::new(3, 0), Pos::new(0, 3)] }
}

/// Gold (3,3), wumpus (2,2), pits (3,0) and (0,3): the wumpus guards the gold.
pub(super) fn guarded_gold_layout() -> WorldLayout {
    WorldLayout { gold: Pos::new(3, 3), ..classic_layout() }
}

/// One-row board whose only exit from the origin is a pit.
pub(super) fn corridor_game(level: AgentLevel) -> Game {
    let config = GameConfig { rows: 1, cols: 5, agent_level: level, ..GameConfig::default() };
    let size = config.grid_size().expect("corridor size");
    let layout = WorldLayout {
        gold: Pos::new(0, 4),
        wumpus: Pos::new(0, 3),
        pits: [Pos::new(0, 1), Pos::new(0, 2)],
    };
    let world = World::from_layout(size, layout).expect("corridor layout");
    Game::with_world(11, &config, world)
}

pub(super) fn game_with(layout: WorldLayout, level: AgentLevel) -> Game {
    let config = GameConfig { agent_level: level, ..GameConfig::default() };
    let world = World::from_layout(GridSize::STANDARD, layout).expect("fixture layout");
    Game::with_world(7, &config, world)
}

pub(super) fn classic_game(level: AgentLevel) -> Game {
    game_with(classic_layout(), level)
}

pub(super) fn walk(game: &mut Game, moves: &[Direction]) {
    for direction in moves {
        game.apply_intent(Intent::Move(*direction)).expect("fixture move");
    }
}
