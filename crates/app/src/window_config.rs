//! Window configuration for the desktop app.

use macroquad::window::{Conf, screen_dpi_scale};
use std::env;
use wumpus_app::APP_NAME;
use wumpus_app::ui_scale::{UI_SCALE_ENV, resolve_ui_scale};

const DEFAULT_WINDOW_WIDTH: i32 = 1000;
const DEFAULT_WINDOW_HEIGHT: i32 = 750;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH,
        window_height: DEFAULT_WINDOW_HEIGHT,
        // Request a high-DPI framebuffer so text tracks the display scale.
        high_dpi: true,
        ..Default::default()
    }
}

pub fn runtime_ui_scale(persisted_ui_scale: Option<f32>) -> f32 {
    let override_value = env::var(UI_SCALE_ENV).ok();
    resolve_ui_scale(screen_dpi_scale(), persisted_ui_scale, override_value.as_deref())
}

#[cfg(test)]
mod tests {
    use super::build_window_conf;

    #[test]
    fn enables_high_dpi_rendering_at_the_default_size() {
        let conf = build_window_conf();
        assert!(conf.high_dpi);
        assert_eq!((conf.window_width, conf.window_height), (1000, 750));
        assert_eq!(conf.window_title, "Wumpus World");
    }
}
