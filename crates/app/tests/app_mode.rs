use macroquad::prelude::KeyCode;
use wumpus_app::app_loop::{AppMode, AppState};
use wumpus_core::journal::InputJournal;
use wumpus_core::replay::replay_to_end;
use wumpus_core::{
    AgentLevel, DeathCause, Game, GameConfig, GridSize, Intent, Pos, Terminal, World, WorldLayout,
};

fn classic_game(level: AgentLevel) -> Game {
    let config = GameConfig { agent_level: level, ..GameConfig::default() };
    let layout = WorldLayout {
        gold: Pos::new(1, 1),
        wumpus: Pos::new(2, 2),
        pits: [Pos::new(3, 0), Pos::new(0, 3)],
    };
    let world = World::from_layout(GridSize::STANDARD, layout).expect("valid layout");
    Game::with_world(7, &config, world)
}

#[test]
fn test_arrow_keys_move_and_a_shoots_along_facing() {
    let mut game = classic_game(AgentLevel::Deductive);
    let mut app = AppState::new();

    for key in [KeyCode::Down, KeyCode::Down, KeyCode::Right] {
        app.tick(&mut game, &[key]);
    }
    assert_eq!(game.agent().pos, Pos::new(2, 1));
    assert_eq!(app.mode, AppMode::Manual);

    app.tick(&mut game, &[KeyCode::A]);
    assert!(!game.world().wumpus_alive());
    assert_eq!(game.agent().score, 50);
    assert_eq!(app.accepted_inputs.len(), 1);
    assert_eq!(app.accepted_inputs[0].intent, Intent::Shoot);
    assert_eq!(app.accepted_inputs[0].seq, 3);
}

#[test]
fn test_rejected_keys_are_not_recorded() {
    let mut game = classic_game(AgentLevel::Deductive);
    let mut app = AppState::new();

    app.tick(&mut game, &[KeyCode::Up]);
    assert!(app.accepted_inputs.is_empty());
    assert_eq!(game.next_input_seq(), 0);

    for key in [KeyCode::Down, KeyCode::Down, KeyCode::Down] {
        app.tick(&mut game, &[key]);
    }
    assert_eq!(app.mode, AppMode::Finished(Terminal::Lost(DeathCause::Pit)));

    app.tick(&mut game, &[KeyCode::Right, KeyCode::A, KeyCode::N]);
    assert!(app.accepted_inputs.is_empty(), "moves, shots and steps are refused after a loss");
}

#[test]
fn test_auto_play_paces_decision_cycles_by_frame_count() {
    let mut game = classic_game(AgentLevel::Deductive);
    let mut app = AppState::with_auto_step_frames(3);

    app.tick(&mut game, &[KeyCode::Space]);
    app.tick(&mut game, &[]);
    assert_eq!(game.current_tick(), 0);
    assert_eq!(game.agent().pos, Pos::new(0, 0));

    app.tick(&mut game, &[]);
    assert_eq!(game.current_tick(), 1);
    assert_eq!(game.agent().pos, Pos::new(0, 1));

    app.tick(&mut game, &[KeyCode::Space]);
    for _ in 0..10 {
        app.tick(&mut game, &[]);
    }
    assert_eq!(app.mode, AppMode::Manual);
    assert_eq!(game.current_tick(), 1, "paused play never advances the clock");
}

#[test]
fn test_auto_play_reaches_a_final_mode() {
    let mut game = classic_game(AgentLevel::Deductive);
    let mut app = AppState::with_auto_step_frames(1);

    app.tick(&mut game, &[KeyCode::Space]);
    for _ in 0..20 {
        app.tick(&mut game, &[]);
    }
    assert_eq!(app.mode, AppMode::Finished(Terminal::Won));
    assert_eq!(game.agent().score, 150);
}

#[test]
fn test_step_key_runs_one_cycle_without_auto_mode() {
    let mut game = classic_game(AgentLevel::Deductive);
    let mut app = AppState::new();

    app.tick(&mut game, &[KeyCode::N]);
    assert_eq!(game.agent().pos, Pos::new(0, 1));
    assert_eq!(app.mode, AppMode::Manual);
    assert_eq!(app.accepted_inputs[0].intent, Intent::Step);
}

#[test]
fn test_reset_key_starts_a_new_round_and_keeps_sound_flag() {
    let mut game = classic_game(AgentLevel::Deductive);
    let mut app = AppState::new();

    app.tick(&mut game, &[KeyCode::S]);
    for key in [KeyCode::Down, KeyCode::Down, KeyCode::Down] {
        app.tick(&mut game, &[key]);
    }
    let seed = game.seed();
    app.tick(&mut game, &[KeyCode::R]);

    assert_eq!(app.mode, AppMode::Manual);
    assert_ne!(game.seed(), seed);
    assert_eq!(game.agent().score, 0);
    assert!(!app.sound_enabled);
}

#[test]
fn test_recorded_session_replays_to_the_same_snapshot() {
    let config = GameConfig::default();
    let mut game = Game::new(2024, &config).expect("default config is valid");
    let mut app = AppState::with_auto_step_frames(2);
    let mut journal = InputJournal::new(game.seed());

    let mut frames: Vec<Vec<KeyCode>> = vec![vec![KeyCode::Right], vec![KeyCode::Space]];
    frames.extend((0..9).map(|_| Vec::new()));
    frames.push(vec![KeyCode::Space]);

    for keys in &frames {
        app.tick(&mut game, keys);
        for accepted in app.accepted_inputs.drain(..) {
            journal.append_intent(accepted.tick_boundary, accepted.intent, accepted.seq);
        }
    }

    let result = replay_to_end(&config, &journal, 0).expect("replay");
    assert_eq!(result.final_tick, game.current_tick());
    assert_eq!(result.final_snapshot_hash, game.snapshot_hash());
}

#[test]
fn test_session_played_at_another_level_replays_with_default_config() {
    let config = GameConfig { agent_level: AgentLevel::Elimination, ..GameConfig::default() };
    let mut game = Game::new(99, &config).expect("valid config");
    let mut app = AppState::with_auto_step_frames(1);
    let mut journal = InputJournal::with_agent_level(game.seed(), config.agent_level);

    app.tick(&mut game, &[KeyCode::Space]);
    for _ in 0..6 {
        app.tick(&mut game, &[]);
    }
    app.tick(&mut game, &[KeyCode::Space]);
    for accepted in app.accepted_inputs.drain(..) {
        journal.append_intent(accepted.tick_boundary, accepted.intent, accepted.seq);
    }

    let result = replay_to_end(&GameConfig::default(), &journal, 0).expect("replay");
    assert_eq!(result.final_tick, game.current_tick());
    assert_eq!(result.final_snapshot_hash, game.snapshot_hash());
}
