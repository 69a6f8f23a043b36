use serde::{Deserialize, Serialize};

use crate::config::AgentLevel;
use crate::types::Intent;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    /// Level the session was played at; replay uses it over the configured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_level: Option<AgentLevel>,
    pub inputs: Vec<InputRecord>,
}

/// One accepted intent, applied after `tick_boundary` ticks had elapsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub tick_boundary: u64,
    pub intent: Intent,
}

impl InputJournal {
    pub fn new(seed: u64) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, agent_level: None, inputs: Vec::new() }
    }

    pub fn with_agent_level(seed: u64, level: AgentLevel) -> Self {
        Self { agent_level: Some(level), ..Self::new(seed) }
    }

    pub fn append_intent(&mut self, tick_boundary: u64, intent: Intent, seq: u64) {
        self.inputs.push(InputRecord { seq, tick_boundary, intent });
    }
}
