//! Shared command-line plumbing for the headless tools.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs;
use std::path::Path;
use wumpus_core::{AgentLevel, GameConfig, InputJournal, Terminal};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    Random,
    Elimination,
    Deductive,
}

impl From<LevelArg> for AgentLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Random => AgentLevel::RandomWalk,
            LevelArg::Elimination => AgentLevel::Elimination,
            LevelArg::Deductive => AgentLevel::Deductive,
        }
    }
}

/// Reads a JSON `GameConfig`, or the default one when no path is given.
/// The result is validated before it is returned.
pub fn load_config(path: Option<&Path>, level: Option<LevelArg>) -> Result<GameConfig> {
    let mut config = match path {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_json::from_str(&data)
                .with_context(|| format!("Failed to parse config JSON: {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(level) = level {
        config.agent_level = level.into();
    }
    config.validate().context("Invalid game configuration")?;
    Ok(config)
}

pub fn load_journal(path: &Path) -> Result<InputJournal> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file: {}", path.display()))?;
    serde_json::from_str(&data).context("Failed to deserialize journal JSON")
}

pub fn terminal_label(terminal: Terminal) -> String {
    match terminal {
        Terminal::Playing => "unfinished".to_string(),
        Terminal::Won => "won".to_string(),
        Terminal::Lost(cause) => format!("lost ({cause:?})"),
        Terminal::Stuck(reason) => format!("stuck ({reason:?})"),
    }
}
