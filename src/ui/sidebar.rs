use egui::{RichText, Ui};
use egui_phosphor::regular as icon;
use work_tracker::model::Catalog;
use work_tracker::settings::Section;

use crate::ui::theme;

fn section_icon(section: Section) -> &'static str {
    match section {
        Section::Dashboard => icon::CHART_BAR,
        Section::Projects => icon::FOLDER,
        Section::WorkItems => icon::CALENDAR,
    }
}

/// Render the navigation sidebar. Returns the section the user clicked, if any.
pub fn show_sidebar(active: Section, catalog: &Catalog, dataset_label: &str, ui: &mut Ui) -> Option<Section> {
    let mut picked = None;

    ui.add_space(12.0);
    ui.label(RichText::new("Work Tracker").font(theme::font_heading()).strong());
    ui.add_space(12.0);

    for section in Section::ALL {
        let text = RichText::new(format!("{}   {}", section_icon(section), section.title()))
            .font(theme::font_body());
        let resp = ui.add_sized(
            [ui.available_width(), 30.0],
            egui::SelectableLabel::new(section == active, text),
        );
        if resp.clicked() && section != active {
            picked = Some(section);
        }
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        ui.add_space(10.0);
        ui.label(
            RichText::new(format!(
                "{} projects · {} work items · {} users",
                catalog.projects.len(),
                catalog.work_items.len(),
                catalog.users.len()
            ))
            .font(theme::font_small())
            .color(theme::TEXT_DIM),
        );
        ui.label(
            RichText::new(format!("{}  {}", icon::DATABASE, dataset_label))
                .font(theme::font_small())
                .color(theme::TEXT_SECONDARY),
        );
        ui.separator();
    });

    picked
}
