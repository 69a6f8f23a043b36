use std::error::Error;
use std::fmt;

use crate::{
    AdvanceStopReason, GameError, Terminal,
    config::{ConfigError, GameConfig},
    game::Game,
    journal::{InputJournal, JOURNAL_FORMAT_VERSION},
};

#[derive(Debug, PartialEq)]
pub enum ReplayError {
    Config(ConfigError),
    UnsupportedVersion(u16),
    /// A record's tick boundary lies before the clock it would be applied at.
    OutOfOrder { seq: u64 },
    IntentRejected { seq: u64, error: GameError },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Config(error) => write!(f, "invalid configuration: {error}"),
            ReplayError::UnsupportedVersion(version) => {
                write!(f, "journal format {version} is not supported")
            }
            ReplayError::OutOfOrder { seq } => write!(f, "input {seq} is out of tick order"),
            ReplayError::IntentRejected { seq, error } => write!(f, "input {seq} was rejected: {error}"),
        }
    }
}

impl Error for ReplayError {}

impl From<ConfigError> for ReplayError {
    fn from(error: ConfigError) -> Self {
        ReplayError::Config(error)
    }
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub terminal: Terminal,
    pub final_snapshot_hash: u64,
    pub final_tick: u64,
    pub score: i32,
}

/// Rebuilds the game from the journal seed, applies every input at its recorded
/// tick boundary, then runs headless until the round ends or `max_ticks` more
/// cycles have run. A level recorded in the journal overrides `config`.
pub fn replay_to_end(
    config: &GameConfig,
    journal: &InputJournal,
    max_ticks: u32,
) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedVersion(journal.format_version));
    }
    let config = match journal.agent_level {
        Some(agent_level) => GameConfig { agent_level, ..config.clone() },
        None => config.clone(),
    };
    let mut game = Game::new(journal.seed, &config)?;

    for record in &journal.inputs {
        if record.tick_boundary < game.current_tick() {
            return Err(ReplayError::OutOfOrder { seq: record.seq });
        }
        while game.current_tick() < record.tick_boundary {
            game.tick();
        }
        game.apply_intent(record.intent)
            .map_err(|error| ReplayError::IntentRejected { seq: record.seq, error })?;
    }

    let result = game.advance(max_ticks);
    let terminal = match result.stop_reason {
        AdvanceStopReason::Finished(terminal) => terminal,
        AdvanceStopReason::BudgetExhausted => game.terminal(),
    };
    Ok(ReplayResult {
        terminal,
        final_snapshot_hash: game.snapshot_hash(),
        final_tick: game.current_tick(),
        score: game.agent().score,
    })
}

#[cfg(test)]
mod tests;
