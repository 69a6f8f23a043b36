//! UI scale selection: an environment override wins, then the saved setting,
//! then the display's DPI scale.

pub const DEFAULT_UI_SCALE: f32 = 1.0;
pub const MIN_UI_SCALE: f32 = 0.5;
pub const MAX_UI_SCALE: f32 = 3.0;
pub const UI_SCALE_STEP: f32 = 0.25;
pub const UI_SCALE_ENV: &str = "WUMPUS_UI_SCALE";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiScaleAction {
    Increase,
    Decrease,
    Reset,
}

pub fn clamp_ui_scale(value: f32) -> f32 {
    if !value.is_finite() {
        return DEFAULT_UI_SCALE;
    }
    value.clamp(MIN_UI_SCALE, MAX_UI_SCALE)
}

pub fn apply_ui_scale_action(current: f32, action: UiScaleAction) -> f32 {
    match action {
        UiScaleAction::Increase => clamp_ui_scale(current + UI_SCALE_STEP),
        UiScaleAction::Decrease => clamp_ui_scale(current - UI_SCALE_STEP),
        UiScaleAction::Reset => DEFAULT_UI_SCALE,
    }
}

pub fn resolve_ui_scale(
    dpi_scale: f32,
    persisted_ui_scale: Option<f32>,
    ui_scale_override: Option<&str>,
) -> f32 {
    let override_scale =
        ui_scale_override.and_then(|raw| raw.trim().parse::<f32>().ok()).map(clamp_ui_scale);
    if let Some(scale) = override_scale.or(persisted_ui_scale.map(clamp_ui_scale)) {
        return scale;
    }
    if dpi_scale.is_finite() && dpi_scale > 1.0 {
        return clamp_ui_scale(dpi_scale);
    }
    DEFAULT_UI_SCALE
}
