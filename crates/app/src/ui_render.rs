//! Rendering for the belief grid and the surrounding panels.

use crate::game_layout::{FrameLayout, PanelRect, cell_size, sidebar_buttons};
use crate::ui_text::{
    banner_text, button_label, event_log_line, facing_glyph, info_bar_lines, session_lines,
    status_text,
};
use macroquad::prelude::*;
use wumpus_app::app_loop::AppState;
use wumpus_core::{BeliefCell, Game, Pos, World};

const BACKGROUND: Color = Color { r: 0.6, g: 0.6, b: 1.0, a: 1.0 };
const GRID_LINE: Color = Color { r: 0.0, g: 0.07, b: 0.3, a: 1.0 };
const VISITED_FILL: Color = Color { r: 0.9, g: 0.925, b: 1.0, a: 1.0 };
const SAFE_FILL: Color = Color { r: 0.75, g: 0.92, b: 0.75, a: 1.0 };
const UNSAFE_FILL: Color = Color { r: 1.0, g: 0.7, b: 0.7, a: 1.0 };
const PANEL_FILL: Color = Color { r: 0.0, g: 0.0, b: 0.5, a: 1.0 };
const BUTTON_FILL: Color = Color { r: 0.46, g: 0.46, b: 0.64, a: 1.0 };
const BORDER_THICKNESS: f32 = 1.0;
const PANEL_PAD_X: f32 = 15.0;
const PANEL_PAD_Y: f32 = 25.0;
const LINE_HEIGHT: f32 = 18.0;
const EVENT_LOG_LINES: usize = 14;

type Marker = (&'static str, Color);

pub fn draw_frame(game: &Game, app_state: &AppState, layout: &FrameLayout, ui_scale: f32) {
    clear_background(BACKGROUND);
    draw_grid(game, layout.grid, ui_scale);
    draw_sidebar(game, app_state, layout.sidebar, ui_scale);
    draw_event_log(game, layout.event_log, ui_scale);
    draw_info_bar(game, app_state, layout.info_bar, ui_scale);
    draw_banner(game, layout.grid, ui_scale);
}

fn draw_grid(game: &Game, panel: PanelRect, ui_scale: f32) {
    let beliefs = game.beliefs();
    let size = beliefs.size();
    let side = cell_size(panel, size.rows(), size.cols());
    let agent = game.agent();

    for pos in size.positions() {
        let x = panel.x + pos.col as f32 * side;
        let y = panel.y + pos.row as f32 * side;
        let cell = beliefs.cell(pos);
        if let Some(fill) = cell_fill(cell) {
            draw_rectangle(x, y, side, side, fill);
        }
        draw_rectangle_lines(x, y, side, side, scaled(BORDER_THICKNESS, ui_scale), GRID_LINE);

        let markers = cell_markers(game.world(), cell, pos);
        for (index, (glyph, color)) in markers.iter().enumerate() {
            draw_text(
                glyph,
                x + scaled(6.0, ui_scale) + index as f32 * scaled(22.0, ui_scale),
                y + scaled(22.0, ui_scale),
                scaled(22.0, ui_scale),
                *color,
            );
        }

        if pos == agent.pos {
            let label = format!("A{}", facing_glyph(agent.facing));
            draw_text(&label, x + side * 0.35, y + side * 0.6, scaled(30.0, ui_scale), DARKBLUE);
        }
    }
}

/// Background colour from what the agent believes about the cell.
fn cell_fill(cell: BeliefCell) -> Option<Color> {
    if cell.visited {
        Some(VISITED_FILL)
    } else if cell.safe.is_false() {
        Some(UNSAFE_FILL)
    } else if cell.safe.is_true() {
        Some(SAFE_FILL)
    } else {
        None
    }
}

/// Ground-truth contents first, then open suspicions the agent holds.
fn cell_markers(world: &World, cell: BeliefCell, pos: Pos) -> Vec<Marker> {
    let mut markers = Vec::new();
    if world.has_gold(pos) {
        markers.push(("G", GOLD));
    }
    if world.has_pit(pos) {
        markers.push(("P", BLACK));
    }
    if world.has_live_wumpus(pos) {
        markers.push(("W", MAROON));
    }
    if !cell.visited {
        if cell.pit_suspected.is_true() {
            markers.push(("p?", DARKGRAY));
        }
        if cell.wumpus_suspected.is_true() {
            markers.push(("w?", DARKGRAY));
        }
    }
    markers
}

fn draw_sidebar(game: &Game, app_state: &AppState, panel: PanelRect, ui_scale: f32) {
    draw_rectangle(panel.x, panel.y, panel.width, panel.height, PANEL_FILL);
    for (button, rect) in sidebar_buttons(panel, ui_scale) {
        draw_rectangle(rect.x, rect.y, rect.width, rect.height, BUTTON_FILL);
        draw_text(
            &button_label(button, game, app_state),
            rect.x + scaled(PANEL_PAD_X, ui_scale),
            rect.y + rect.height * 0.65,
            scaled(22.0, ui_scale),
            BLACK,
        );
    }
}

fn draw_event_log(game: &Game, panel: PanelRect, ui_scale: f32) {
    draw_rectangle_lines(
        panel.x,
        panel.y,
        panel.width,
        panel.height,
        scaled(BORDER_THICKNESS, ui_scale),
        GRID_LINE,
    );
    let text_x = panel.x + scaled(PANEL_PAD_X, ui_scale);
    let mut text_y = panel.y + scaled(PANEL_PAD_Y, ui_scale);
    draw_text("Event log", text_x, text_y, scaled(22.0, ui_scale), DARKBLUE);

    let lines = latest_lines(game, EVENT_LOG_LINES);
    for line in fit_lines_to_panel(
        &lines,
        panel.height - scaled(LINE_HEIGHT, ui_scale),
        scaled(LINE_HEIGHT, ui_scale),
        scaled(PANEL_PAD_Y, ui_scale),
    ) {
        text_y += scaled(LINE_HEIGHT, ui_scale);
        draw_text(&line, text_x, text_y, scaled(16.0, ui_scale), BLACK);
    }
}

/// Newest events last, at most `limit` of them.
fn latest_lines(game: &Game, limit: usize) -> Vec<String> {
    let events = game.log();
    let start = events.len().saturating_sub(limit);
    events[start..].iter().map(event_log_line).collect()
}

fn fit_lines_to_panel(
    lines: &[String],
    panel_height: f32,
    line_step: f32,
    panel_pad_y: f32,
) -> Vec<String> {
    if line_step <= 0.0 {
        return Vec::new();
    }

    let usable_height = (panel_height - panel_pad_y).max(0.0);
    let max_lines = (usable_height / line_step).floor() as usize;
    if lines.len() <= max_lines {
        return lines.to_vec();
    }
    // Keep the newest lines; the log reads top to bottom.
    lines[lines.len() - max_lines..].to_vec()
}

fn draw_info_bar(game: &Game, app_state: &AppState, panel: PanelRect, ui_scale: f32) {
    draw_rectangle(panel.x, panel.y, panel.width, panel.height, PANEL_FILL);
    let text_x = panel.x + scaled(PANEL_PAD_X, ui_scale);
    let mut text_y = panel.y + scaled(PANEL_PAD_Y, ui_scale);

    for line in info_bar_lines(game) {
        draw_text(&line, text_x, text_y, scaled(22.0, ui_scale), WHITE);
        text_y += scaled(24.0, ui_scale);
    }
    draw_text(&status_text(&app_state.mode), text_x, text_y, scaled(18.0, ui_scale), LIGHTGRAY);

    let session_x = panel.x + panel.width * 0.62;
    let mut session_y = panel.y + scaled(PANEL_PAD_Y, ui_scale) - scaled(6.0, ui_scale);
    for line in session_lines(game) {
        draw_text(&line, session_x, session_y, scaled(16.0, ui_scale), LIGHTGRAY);
        session_y += scaled(LINE_HEIGHT, ui_scale);
    }
}

fn draw_banner(game: &Game, grid: PanelRect, ui_scale: f32) {
    let Some(message) = banner_text(game.terminal()) else {
        return;
    };
    let font_size = scaled(40.0, ui_scale);
    let dims = measure_text(message, None, font_size as u16, 1.0);
    let padding = scaled(10.0, ui_scale);
    let x = grid.x + (grid.width - dims.width) / 2.0;
    let y = grid.y + grid.height / 2.0;

    draw_rectangle(
        x - padding,
        y - dims.offset_y - padding,
        dims.width + 2.0 * padding,
        dims.height + 2.0 * padding,
        Color { r: 1.0, g: 0.7, b: 0.7, a: 1.0 },
    );
    draw_rectangle_lines(
        x - padding,
        y - dims.offset_y - padding,
        dims.width + 2.0 * padding,
        dims.height + 2.0 * padding,
        scaled(2.0, ui_scale),
        RED,
    );
    draw_text(message, x, y, font_size, RED);
}

fn scaled(value: f32, ui_scale: f32) -> f32 {
    value * ui_scale
}
