use macroquad::prelude::KeyCode;
use wumpus_core::{Direction, Game, Intent, Terminal};

use crate::settings_file::DEFAULT_AUTO_STEP_FRAMES;

/// An intent that was accepted by the simulation this frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcceptedInput {
    pub seq: u64,
    pub tick_boundary: u64,
    pub intent: Intent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Manual,
    AutoPlay,
    Finished(Terminal),
}

impl AppMode {
    pub fn of(game: &Game) -> Self {
        match game.terminal() {
            Terminal::Playing if game.auto_mode() => AppMode::AutoPlay,
            Terminal::Playing => AppMode::Manual,
            terminal => AppMode::Finished(terminal),
        }
    }
}

const MOVE_KEYS: [(KeyCode, Direction); 4] = [
    (KeyCode::Up, Direction::Up),
    (KeyCode::Down, Direction::Down),
    (KeyCode::Left, Direction::Left),
    (KeyCode::Right, Direction::Right),
];

pub struct AppState {
    pub mode: AppMode,
    pub sound_enabled: bool,
    /// Frames between two autonomous decision cycles.
    pub auto_step_frames: u32,
    frames_since_step: u32,
    /// Intents accepted during the current frame's `tick()` call.
    /// Drained by the caller after each tick to extend the session journal.
    pub accepted_inputs: Vec<AcceptedInput>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_auto_step_frames(DEFAULT_AUTO_STEP_FRAMES)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auto_step_frames(auto_step_frames: u32) -> Self {
        Self {
            mode: AppMode::Manual,
            sound_enabled: true,
            auto_step_frames: auto_step_frames.max(1),
            frames_since_step: 0,
            accepted_inputs: Vec::new(),
        }
    }

    /// Process input and logic for a single frame. Keys are the ones pressed
    /// this frame, so tests can drive the loop without a window.
    pub fn tick(&mut self, game: &mut Game, keys_pressed: &[KeyCode]) {
        self.accepted_inputs.clear();

        if keys_pressed.contains(&KeyCode::S) {
            self.sound_enabled = !self.sound_enabled;
        }
        if keys_pressed.contains(&KeyCode::R) {
            self.apply_and_record(game, Intent::Reset);
            self.frames_since_step = 0;
        }
        if keys_pressed.contains(&KeyCode::Space) {
            self.apply_and_record(game, Intent::ToggleAutoMode);
            self.frames_since_step = 0;
        }
        if keys_pressed.contains(&KeyCode::N) {
            self.apply_and_record(game, Intent::Step);
        }
        for (key, direction) in MOVE_KEYS {
            if keys_pressed.contains(&key) {
                self.apply_and_record(game, Intent::Move(direction));
            }
        }
        if keys_pressed.contains(&KeyCode::A) {
            self.apply_and_record(game, Intent::Shoot);
        }

        if game.auto_mode() && game.terminal().is_playing() {
            self.frames_since_step += 1;
            if self.frames_since_step >= self.auto_step_frames {
                self.frames_since_step = 0;
                game.tick();
            }
        }

        self.mode = AppMode::of(game);
    }

    /// Rejected intents are dropped silently; the round state already explains why.
    fn apply_and_record(&mut self, game: &mut Game, intent: Intent) {
        let tick_boundary = game.current_tick();
        let seq = game.next_input_seq();
        if game.apply_intent(intent).is_ok() {
            self.accepted_inputs.push(AcceptedInput { seq, tick_boundary, intent });
        }
    }
}
