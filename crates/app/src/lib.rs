pub mod app_loop;
pub mod seed;
pub mod settings_file;
pub mod ui_scale;

use wumpus_core::{DeathCause, StuckReason, Terminal};

pub const APP_NAME: &str = "Wumpus World";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Map a round status to its reason code string.
pub fn terminal_code(terminal: Terminal) -> &'static str {
    match terminal {
        Terminal::Playing => "IN_PROGRESS",
        Terminal::Won => "WIN_GOLD_RETURNED",
        Terminal::Lost(DeathCause::Pit) => "LOST_PIT",
        Terminal::Lost(DeathCause::Wumpus) => "LOST_WUMPUS",
        Terminal::Stuck(StuckReason::NoRetreatPath) => "STUCK_NO_RETREAT_PATH",
        Terminal::Stuck(StuckReason::NoOptions) => "STUCK_NO_OPTIONS",
    }
}
