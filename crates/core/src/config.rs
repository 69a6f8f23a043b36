//! Run configuration: grid dimensions, scoring rules, and agent capability level.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::GridSize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRules {
    pub gold_pickup: i32,
    pub wumpus_kill: i32,
    pub return_with_gold: i32,
    pub death: i32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self { gold_pickup: 100, wumpus_kill: 50, return_with_gold: 50, death: -100 }
    }
}

/// Successive capability levels of the same agent design.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentLevel {
    /// Uniformly random step to an in-bounds neighbor every tick.
    RandomWalk,
    /// Belief tracking with blanket elimination only, no deduction and no aimed shot.
    Elimination,
    /// Elimination, single-candidate deduction, and the aimed shot.
    #[default]
    Deductive,
}

impl AgentLevel {
    pub fn deduces(self) -> bool {
        matches!(self, AgentLevel::Deductive)
    }

    pub fn aims_shots(self) -> bool {
        matches!(self, AgentLevel::Deductive)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub scoring: ScoreRules,
    pub agent_level: AgentLevel,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: GridSize::STANDARD.rows(),
            cols: GridSize::STANDARD.cols(),
            scoring: ScoreRules::default(),
            agent_level: AgentLevel::default(),
        }
    }
}

impl GameConfig {
    pub fn grid_size(&self) -> Result<GridSize, ConfigError> {
        GridSize::new(self.rows, self.cols)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid_size().map(|_| ())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The origin plus the gold, the wumpus and both pits need five distinct cells.
    GridTooSmall { rows: usize, cols: usize },
    GridTooLarge { rows: usize, cols: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::GridTooSmall { rows, cols } => {
                write!(f, "a {rows}x{cols} grid cannot hold the origin, gold, wumpus and two pits")
            }
            ConfigError::GridTooLarge { rows, cols } => {
                write!(f, "a {rows}x{cols} grid exceeds the {0}x{0} limit", GridSize::MAX_SIDE)
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_the_classic_board() {
        let config = GameConfig::default();
        assert_eq!((config.rows, config.cols), (4, 4));
        assert_eq!(config.agent_level, AgentLevel::Deductive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_rejects_grids_without_room_for_every_item() {
        let config = GameConfig { rows: 2, cols: 2, ..GameConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::GridTooSmall { rows: 2, cols: 2 }));

        let single_row = GameConfig { rows: 1, cols: 5, ..GameConfig::default() };
        assert!(single_row.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "agent_level": "Elimination" }"#).expect("config json");
        assert_eq!(config.agent_level, AgentLevel::Elimination);
        assert_eq!(config.scoring, ScoreRules::default());
        assert_eq!((config.rows, config.cols), (4, 4));
    }
}
