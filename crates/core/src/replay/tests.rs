use super::*;
use crate::config::AgentLevel;
use crate::types::{Direction, Intent};

/// Drives a live game the way the app does and records every accepted intent.
fn record_session(seed: u64, script: &[(u32, Intent)]) -> (Game, InputJournal) {
    let config = GameConfig::default();
    let mut game = Game::new(seed, &config).expect("game");
    let mut journal = InputJournal::new(seed);
    for (ticks_before, intent) in script {
        for _ in 0..*ticks_before {
            game.tick();
        }
        let seq = game.next_input_seq();
        let tick = game.current_tick();
        if game.apply_intent(*intent).is_ok() {
            journal.append_intent(tick, *intent, seq);
        }
    }
    (game, journal)
}

#[test]
fn replay_matches_a_live_autonomous_run() {
    let (mut live, journal) = record_session(777, &[(0, Intent::ToggleAutoMode)]);
    live.advance(200);

    let replayed = replay_to_end(&GameConfig::default(), &journal, 200).expect("replay");
    assert_eq!(replayed.final_snapshot_hash, live.snapshot_hash());
    assert_eq!(replayed.terminal, live.terminal());
    assert_eq!(replayed.score, live.agent().score);
    assert_eq!(replayed.final_tick, live.current_tick());
}

#[test]
fn replay_matches_mixed_manual_and_auto_input() {
    let script = [
        (0, Intent::Move(Direction::Right)),
        (3, Intent::Step),
        (0, Intent::ToggleAutoMode),
        (5, Intent::ToggleAutoMode),
        (2, Intent::Reset),
        (0, Intent::Move(Direction::Down)),
        (1, Intent::Shoot),
    ];
    let (mut live, journal) = record_session(4242, &script);
    live.advance(200);

    let replayed = replay_to_end(&GameConfig::default(), &journal, 200).expect("replay");
    assert_eq!(replayed.final_snapshot_hash, live.snapshot_hash());
}

#[test]
fn rejected_input_in_journal_is_reported() {
    let mut journal = InputJournal::new(5);
    journal.append_intent(0, Intent::Move(Direction::Up), 0);
    let error = replay_to_end(&GameConfig::default(), &journal, 10).expect_err("origin edge");
    assert_eq!(
        error,
        ReplayError::IntentRejected {
            seq: 0,
            error: GameError::InvalidMove(crate::types::InvalidMoveReason::OutOfBounds)
        }
    );
}

#[test]
fn out_of_order_boundaries_are_refused() {
    let mut journal = InputJournal::new(5);
    journal.append_intent(3, Intent::ToggleAutoMode, 0);
    journal.append_intent(1, Intent::ToggleAutoMode, 1);
    let error = replay_to_end(&GameConfig::default(), &journal, 10).expect_err("order");
    assert_eq!(error, ReplayError::OutOfOrder { seq: 1 });
}

#[test]
fn unknown_format_version_is_refused() {
    let journal = InputJournal { format_version: 9, ..InputJournal::new(1) };
    let error = replay_to_end(&GameConfig::default(), &journal, 10).expect_err("version");
    assert_eq!(error, ReplayError::UnsupportedVersion(9));
}

#[test]
fn recorded_level_overrides_the_configured_one() {
    let config = GameConfig { agent_level: AgentLevel::RandomWalk, ..GameConfig::default() };
    let mut live = Game::new(31, &config).expect("game");
    let mut journal = InputJournal::with_agent_level(31, AgentLevel::RandomWalk);
    let seq = live.next_input_seq();
    live.apply_intent(Intent::ToggleAutoMode).expect("toggle");
    journal.append_intent(0, Intent::ToggleAutoMode, seq);
    live.advance(40);

    let replayed = replay_to_end(&GameConfig::default(), &journal, 40).expect("replay");
    assert_eq!(replayed.final_snapshot_hash, live.snapshot_hash());
    assert_eq!(replayed.final_tick, live.current_tick());
}
