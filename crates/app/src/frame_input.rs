//! Keyboard and mouse input collection for one rendered frame.

use crate::game_layout::{PanelRect, SidebarButton, button_at};
use macroquad::prelude::{
    KeyCode, MouseButton, is_key_down, is_key_pressed, is_mouse_button_pressed, mouse_position,
};
use wumpus_app::ui_scale::UiScaleAction;

const ACTION_KEYS: [KeyCode; 10] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::A,
    KeyCode::Space,
    KeyCode::N,
    KeyCode::R,
    KeyCode::S,
    KeyCode::Escape,
];

#[derive(Default)]
pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
    pub ui_scale_action: Option<UiScaleAction>,
    pub quit_requested: bool,
}

pub fn capture_frame_input(sidebar: PanelRect, ui_scale: f32) -> FrameInput {
    let ctrl_down = is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl);
    let mut keys_pressed = Vec::with_capacity(ACTION_KEYS.len());

    if !ctrl_down {
        for key in ACTION_KEYS {
            if is_key_pressed(key) {
                keys_pressed.push(key);
            }
        }
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        if let Some(button) = button_at(sidebar, ui_scale, x, y) {
            keys_pressed.push(button_key(button));
        }
    }

    let ui_scale_action = if ctrl_down && is_key_pressed(KeyCode::Equal) {
        Some(UiScaleAction::Increase)
    } else if ctrl_down && is_key_pressed(KeyCode::Minus) {
        Some(UiScaleAction::Decrease)
    } else if ctrl_down && is_key_pressed(KeyCode::Key0) {
        Some(UiScaleAction::Reset)
    } else {
        None
    };

    let quit_requested = keys_pressed.contains(&KeyCode::Escape);
    FrameInput { keys_pressed, ui_scale_action, quit_requested }
}

/// Sidebar clicks behave exactly like their keyboard shortcut.
fn button_key(button: SidebarButton) -> KeyCode {
    match button {
        SidebarButton::Reset => KeyCode::R,
        SidebarButton::Auto => KeyCode::Space,
        SidebarButton::Step => KeyCode::N,
        SidebarButton::Sound => KeyCode::S,
    }
}
