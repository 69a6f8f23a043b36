//! Text for the sidebar, info bar, end-of-round banner and event log entries.

use wumpus_app::app_loop::{AppMode, AppState};
use wumpus_app::{format_seed, format_snapshot_hash, terminal_code};
use wumpus_core::{
    AgentLevel, DeathCause, Direction, Game, Hazard, LogEvent, MoveReason, StuckReason, Terminal,
};

use crate::game_layout::SidebarButton;

pub fn status_text(mode: &AppMode) -> String {
    match mode {
        AppMode::Manual => "Manual (arrows move, A shoots, N steps)".to_string(),
        AppMode::AutoPlay => "Auto ON (Space to pause)".to_string(),
        AppMode::Finished(terminal) => format!("Finished: {}", terminal_code(*terminal)),
    }
}

pub fn button_label(button: SidebarButton, game: &Game, app: &AppState) -> String {
    match button {
        SidebarButton::Reset => "[R]eset".to_string(),
        SidebarButton::Auto => format!("Auto: {}", on_off(game.auto_mode())),
        SidebarButton::Step => "Step [N]".to_string(),
        SidebarButton::Sound => format!("[S]ound: {}", on_off(app.sound_enabled)),
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "ON" } else { "OFF" }
}

pub fn info_bar_lines(game: &Game) -> [String; 2] {
    let agent = game.agent();
    let gold = u8::from(agent.has_gold);
    let arrow = if agent.weapon_available { "Yes" } else { "No" };
    [
        format!("Score: {}   Steps: {}   Gold: {gold}   Arrow: {arrow}", agent.score, agent.steps),
        format!("Percepts: {}", game.current_percepts()),
    ]
}

pub fn banner_text(terminal: Terminal) -> Option<&'static str> {
    match terminal {
        Terminal::Playing => None,
        Terminal::Won => Some("You Win!"),
        Terminal::Lost(_) => Some("Game Over!"),
        Terminal::Stuck(_) => Some("Agent Stuck"),
    }
}

pub fn level_label(level: AgentLevel) -> &'static str {
    match level {
        AgentLevel::RandomWalk => "random walk",
        AgentLevel::Elimination => "elimination",
        AgentLevel::Deductive => "deductive",
    }
}

pub fn session_lines(game: &Game) -> Vec<String> {
    vec![
        format!("Agent: {}", level_label(game.level())),
        format!("Seed: {}", format_seed(game.seed())),
        format!("Tick: {}", game.current_tick()),
        format!("Snapshot: {}", format_snapshot_hash(game.snapshot_hash())),
    ]
}

pub fn facing_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "^",
        Direction::Down => "v",
        Direction::Left => "<",
        Direction::Right => ">",
    }
}

fn move_reason_text(reason: MoveReason) -> &'static str {
    match reason {
        MoveReason::Manual => "manual",
        MoveReason::Retreat => "retreat",
        MoveReason::ExploreSafe => "explore safe",
        MoveReason::CalculatedRisk => "calculated risk",
        MoveReason::RandomWalk => "random walk",
    }
}

pub fn event_log_line(event: &LogEvent) -> String {
    match event {
        LogEvent::WorldReset { seed } => format!("new world, seed {seed}"),
        LogEvent::Observed { pos, percepts } => format!("at {pos}: {percepts}"),
        LogEvent::Deduced { pos, hazard: Hazard::Pit } => format!("pit deduced at {pos}"),
        LogEvent::Deduced { pos, hazard: Hazard::Wumpus } => format!("wumpus deduced at {pos}"),
        LogEvent::Shot { target, hit: true } => format!("arrow hit the wumpus at {target}"),
        LogEvent::Shot { target, hit: false } => format!("arrow missed at {target}"),
        LogEvent::Moved { to, reason, .. } => {
            format!("moved to {to} ({})", move_reason_text(*reason))
        }
        LogEvent::GoldPickedUp { pos } => format!("picked up gold at {pos}"),
        LogEvent::Died { pos, cause: DeathCause::Pit } => format!("fell into a pit at {pos}"),
        LogEvent::Died { pos, cause: DeathCause::Wumpus } => format!("eaten by the wumpus at {pos}"),
        LogEvent::Won { score } => format!("returned with the gold, score {score}"),
        LogEvent::Stuck { reason: StuckReason::NoRetreatPath } => {
            "stuck: no route back to the start".to_string()
        }
        LogEvent::Stuck { reason: StuckReason::NoOptions } => {
            "stuck: nothing left worth the risk".to_string()
        }
        LogEvent::AutoModeChanged { enabled } => format!("auto mode {}", on_off(*enabled)),
    }
}
