use egui::{RichText, Ui};
use work_tracker::engine::{Filter, ProjectQuery, WorkItemQuery};
use work_tracker::model::{ProjectStatus, WorkItemStatus, WorkItemType};
use work_tracker::present::Presentable;

use crate::ui::{theme, widgets};

/// Combo box over `All` plus every value of an enumerated domain.
fn filter_combo<T>(ui: &mut Ui, id: &str, filter: &mut Filter<T>, values: &[T], all_label: &str)
where
    T: Presentable + Copy + PartialEq,
{
    let selected = match filter {
        Filter::All => all_label,
        Filter::Only(value) => value.label(),
    };
    egui::ComboBox::from_id_salt(id)
        .selected_text(RichText::new(format!("{}  {}", egui_phosphor::regular::FUNNEL, selected)))
        .width(170.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(filter, Filter::All, all_label);
            for value in values {
                ui.selectable_value(filter, Filter::Only(*value), value.label());
            }
        });
}

fn search_field(ui: &mut Ui, text: &mut String, hint: &str, width: f32) {
    ui.label(RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS).color(theme::TEXT_DIM));
    ui.add(
        egui::TextEdit::singleline(text)
            .hint_text(hint)
            .desired_width(width),
    );
}

fn clear_button(ui: &mut Ui, active: bool) -> bool {
    ui.add_enabled(active, egui::Button::new("Clear")).clicked()
}

/// Search box and status filter of the project list.
pub fn show_project_filters(query: &mut ProjectQuery, ui: &mut Ui) {
    widgets::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            search_field(ui, &mut query.search, "Search by name or code...", 320.0);
            ui.add_space(8.0);
            filter_combo(ui, "project_status_filter", &mut query.status, ProjectStatus::ALL, "All statuses");
            if clear_button(ui, query.is_active()) {
                query.clear();
            }
        });
    });
}

/// Search box, status filter and type filter of the work-item list.
pub fn show_work_item_filters(query: &mut WorkItemQuery, ui: &mut Ui) {
    widgets::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            search_field(ui, &mut query.search, "Search work items...", 260.0);
            ui.add_space(8.0);
            filter_combo(ui, "work_item_status_filter", &mut query.status, WorkItemStatus::ALL, "All statuses");
            filter_combo(ui, "work_item_type_filter", &mut query.work_type, WorkItemType::ALL, "All types");
            if clear_button(ui, query.is_active()) {
                query.clear();
            }
        });
    });
}
