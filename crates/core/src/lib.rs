pub mod belief;
pub mod config;
pub mod game;
pub mod grid;
pub mod journal;
pub mod replay;
pub mod state;
pub mod types;
pub mod world;

pub use belief::{BeliefCell, BeliefGrid};
pub use config::{AgentLevel, ConfigError, GameConfig, ScoreRules};
pub use game::{Game, derive_next_seed};
pub use grid::GridSize;
pub use journal::{InputJournal, InputRecord, JOURNAL_FORMAT_VERSION};
pub use replay::*;
pub use state::{AgentState, GameState};
pub use types::*;
pub use world::{LayoutError, World, WorldLayout};
