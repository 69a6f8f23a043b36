mod frame_input;
mod game_layout;
mod ui_render;
mod ui_text;
mod window_config;

use std::env;
use std::process;

use frame_input::capture_frame_input;
use game_layout::{compute_frame_layout, setup_layout};
use macroquad::prelude::{next_frame, screen_height, screen_width};
use taffy::TaffyTree;
use ui_render::draw_frame;
use window_config::{build_window_conf, runtime_ui_scale};
use wumpus_app::app_loop::AppState;
use wumpus_app::format_seed;
use wumpus_app::seed::{SeedChoice, generate_runtime_seed, parse_launch_options};
use wumpus_app::settings_file::{AppSettingsFile, session_journal_path, write_json_atomic};
use wumpus_app::ui_scale::apply_ui_scale_action;
use wumpus_core::{Game, GameConfig, InputJournal};

#[macroquad::main(build_window_conf)]
async fn main() {
    let args: Vec<String> = env::args().collect();
    let options = match parse_launch_options(&args, generate_runtime_seed()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };

    let settings_path = AppSettingsFile::get_default_path();
    let mut settings = AppSettingsFile::load_or_default(settings_path.as_deref());

    let mut config = GameConfig::default();
    if let Some(level) = options.level {
        config.agent_level = level;
    }
    let mut game = match Game::new(options.seed.value(), &config) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            process::exit(2);
        }
    };
    if let SeedChoice::Generated(seed) = options.seed {
        println!("seed {} (pass --seed {} to replay this world)", format_seed(seed), seed);
    }

    let mut app = AppState::with_auto_step_frames(settings.auto_step_frames());
    let mut journal = InputJournal::with_agent_level(game.seed(), config.agent_level);
    let mut ui_scale = runtime_ui_scale(settings.ui_scale);
    let mut taffy = TaffyTree::new();
    let nodes = setup_layout(&mut taffy);

    loop {
        let layout = compute_frame_layout(&mut taffy, &nodes, screen_width(), screen_height());
        let input = capture_frame_input(layout.sidebar, ui_scale);
        if input.quit_requested {
            break;
        }

        if let Some(action) = input.ui_scale_action {
            ui_scale = apply_ui_scale_action(ui_scale, action);
            settings.ui_scale = Some(ui_scale);
            if let Some(path) = settings_path.as_deref()
                && let Err(err) = settings.write_atomic(path)
            {
                eprintln!("could not save settings: {err}");
            }
        }

        app.tick(&mut game, &input.keys_pressed);
        for accepted in app.accepted_inputs.drain(..) {
            journal.append_intent(accepted.tick_boundary, accepted.intent, accepted.seq);
        }

        draw_frame(&game, &app, &layout, ui_scale);
        next_frame().await;
    }

    if let Some(path) = session_journal_path() {
        match write_json_atomic(&journal, &path) {
            Ok(()) => println!("session journal saved to {}", path.display()),
            Err(err) => eprintln!("could not save session journal: {err}"),
        }
    }
}
