//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(24, 26, 32);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(36, 39, 46);
pub const BG_SURFACE: Color32 = Color32::from_rgb(48, 52, 60);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(228, 229, 231);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(158, 163, 172);
pub const ACCENT: Color32 = Color32::from_rgb(52, 152, 219);
pub const SUCCESS: Color32 = Color32::from_rgb(46, 204, 113);
pub const ERROR: Color32 = Color32::from_rgb(231, 76, 60);
pub const WARNING: Color32 = Color32::from_rgb(243, 156, 18);
pub const BANNER_BG: Color32 = Color32::from_rgb(54, 38, 20);
pub const ERROR_BG: Color32 = Color32::from_rgb(50, 22, 22);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

/// Meter fill color for a usage percentage, shifting to the warning
/// palette once the quota is nearly exhausted.
pub fn meter_color(percent: f32) -> Color32 {
    if percent > 80.0 {
        WARNING
    } else {
        ACCENT
    }
}

/// Apply the dark theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_SECONDARY;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
