//! Small reusable pieces shared by the views.

use egui::{Color32, RichText, Ui};
use work_tracker::present::{Category, Presentable};

use crate::ui::theme;

/// White rounded card with a subtle border.
pub fn card_frame() -> egui::Frame {
    egui::Frame {
        fill: theme::BG_PANEL,
        rounding: egui::Rounding::same(theme::CARD_ROUNDING),
        inner_margin: egui::Margin::same(theme::CARD_MARGIN),
        outer_margin: egui::Margin::ZERO,
        stroke: egui::Stroke::new(1.0, theme::BORDER_SUBTLE),
        shadow: egui::epaint::Shadow::NONE,
    }
}

/// Pill showing the label of an enumerated value in its category colours.
pub fn badge(ui: &mut Ui, value: &impl Presentable) {
    pill(ui, value.label(), value.category());
}

pub fn pill(ui: &mut Ui, text: &str, category: Category) {
    let (bg, fg) = theme::category_colors(category);
    egui::Frame::none()
        .fill(bg)
        .rounding(egui::Rounding::same(theme::BADGE_ROUNDING))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).font(theme::font_small()).color(fg));
        });
}

/// Page title with an optional right-aligned caption.
pub fn page_title(ui: &mut Ui, title: &str, caption: Option<&str>) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(title).font(theme::font_title()).strong());
        if let Some(caption) = caption {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(caption).color(theme::TEXT_SECONDARY));
            });
        }
    });
    ui.add_space(12.0);
}

/// Dashboard counter card.
pub fn stat_card(ui: &mut Ui, title: &str, value: usize, icon: &str, color: Color32) {
    card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(title)
                        .font(theme::font_small())
                        .color(theme::TEXT_SECONDARY),
                );
                ui.label(RichText::new(value.to_string()).font(theme::font_stat()).color(color).strong());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(icon).size(26.0).color(color));
            });
        });
    });
}

/// Thin progress bar for a 0..=100 percentage.
pub fn progress_bar(ui: &mut Ui, pct: u8) {
    ui.scope(|ui| {
        // The bar paints its track with the extreme background colour.
        ui.visuals_mut().extreme_bg_color = theme::PROGRESS_TRACK;
        let bar = egui::ProgressBar::new(f32::from(pct) / 100.0)
            .desired_width(ui.available_width())
            .desired_height(8.0)
            .fill(theme::ACCENT)
            .rounding(egui::Rounding::same(4.0));
        ui.add(bar);
    });
}

/// Muted `label: value` pair used in card metadata rows.
pub fn meta(ui: &mut Ui, label: &str, value: &str) {
    ui.label(
        RichText::new(format!("{label}: {value}"))
            .font(theme::font_small())
            .color(theme::TEXT_SECONDARY),
    );
}
