use egui::{Color32, FontId, Rounding, Stroke, Visuals};
use work_tracker::present::Category;

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_APP: Color32 = Color32::from_rgb(249, 250, 251);
pub const BG_PANEL: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_FIELD: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_SELECTED: Color32 = Color32::from_rgb(239, 246, 255);
pub const BG_STATUS_BAR: Color32 = Color32::from_rgb(243, 244, 246);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(229, 231, 235);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(17, 24, 39);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(75, 85, 99);
pub const TEXT_DIM: Color32 = Color32::from_rgb(156, 163, 175);

pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const PROGRESS_TRACK: Color32 = Color32::from_rgb(229, 231, 235);

pub const STAT_BLUE: Color32 = Color32::from_rgb(37, 99, 235);
pub const STAT_ORANGE: Color32 = Color32::from_rgb(234, 88, 12);
pub const STAT_RED: Color32 = Color32::from_rgb(220, 38, 38);
pub const STAT_GREEN: Color32 = Color32::from_rgb(22, 163, 74);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const SIDEBAR_WIDTH: f32 = 210.0;
pub const STATUS_BAR_HEIGHT: f32 = 24.0;
pub const CARD_ROUNDING: f32 = 10.0;
pub const BADGE_ROUNDING: f32 = 9.0;
pub const CARD_MARGIN: f32 = 16.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_title() -> FontId {
    FontId::proportional(24.0)
}

pub fn font_heading() -> FontId {
    FontId::proportional(16.0)
}

pub fn font_body() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_small() -> FontId {
    FontId::proportional(11.0)
}

pub fn font_stat() -> FontId {
    FontId::proportional(26.0)
}

// ── Badge colours ────────────────────────────────────────────────────────────

/// `(background, text)` colours of a badge in the given category.
pub fn category_colors(category: Category) -> (Color32, Color32) {
    match category {
        Category::Neutral => (Color32::from_rgb(243, 244, 246), Color32::from_rgb(31, 41, 55)),
        Category::Info => (Color32::from_rgb(219, 234, 254), Color32::from_rgb(30, 64, 175)),
        Category::Warning => (Color32::from_rgb(255, 237, 213), Color32::from_rgb(154, 52, 18)),
        Category::Danger => (Color32::from_rgb(254, 226, 226), Color32::from_rgb(153, 27, 27)),
        Category::Success => (Color32::from_rgb(220, 252, 231), Color32::from_rgb(22, 101, 52)),
        Category::Accent => (Color32::from_rgb(243, 232, 255), Color32::from_rgb(107, 33, 168)),
    }
}

/// Solid dot colour for checklist entries.
pub fn category_dot(category: Category) -> Color32 {
    match category {
        Category::Success => Color32::from_rgb(34, 197, 94),
        Category::Warning => Color32::from_rgb(249, 115, 22),
        Category::Danger => Color32::from_rgb(239, 68, 68),
        Category::Info | Category::Accent => Color32::from_rgb(59, 130, 246),
        Category::Neutral => Color32::from_rgb(209, 213, 219),
    }
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::light();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_APP;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_FIELD;
    visuals.faint_bg_color = BG_APP;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(6.0);

    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.inactive.rounding = Rounding::same(6.0);

    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.rounding = Rounding::same(6.0);

    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.rounding = Rounding::same(6.0);

    visuals.selection.bg_fill = BG_SELECTED;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    visuals.window_rounding = Rounding::same(CARD_ROUNDING);
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    ctx.set_style(style);
}
