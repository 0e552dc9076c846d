use egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};
use work_tracker::engine::ProjectQuery;
use work_tracker::model::Catalog;
use work_tracker::present::{format_date, format_planned_days};

use crate::ui::{filter_bar, theme, widgets};

/// Actions that the project list can request.
pub enum ProjectListAction {
    None,
    Export,
}

/// Render the filterable project table.
pub fn show_project_list(catalog: &Catalog, query: &mut ProjectQuery, ui: &mut Ui) -> ProjectListAction {
    let mut action = ProjectListAction::None;

    ui.horizontal(|ui| {
        ui.label(RichText::new("Projects").font(theme::font_title()).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let export = egui::Button::new(format!("{}  Export CSV", egui_phosphor::regular::DOWNLOAD_SIMPLE));
            if ui.add(export).clicked() {
                action = ProjectListAction::Export;
            }
        });
    });
    ui.add_space(12.0);

    filter_bar::show_project_filters(query, ui);
    ui.add_space(12.0);

    let projects = query.apply(&catalog.projects);
    ui.label(
        RichText::new(format!("{} of {} projects", projects.len(), catalog.projects.len()))
            .font(theme::font_small())
            .color(theme::TEXT_DIM),
    );

    widgets::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(90.0))
            .column(Column::remainder().at_least(220.0))
            .column(Column::exact(130.0))
            .column(Column::exact(100.0))
            .column(Column::exact(90.0))
            .column(Column::exact(80.0))
            .header(22.0, |mut header| {
                for title in ["CODE", "NAME", "DATES", "STATUS", "PRIORITY", "WORK ITEMS"] {
                    header.col(|ui| {
                        ui.label(RichText::new(title).font(theme::font_small()).color(theme::TEXT_DIM).strong());
                    });
                }
            })
            .body(|mut body| {
                for project in &projects {
                    body.row(60.0, |mut row| {
                        row.col(|ui| {
                            ui.label(RichText::new(&project.code).monospace().strong());
                        });
                        row.col(|ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&project.name).strong());
                                ui.label(
                                    RichText::new(&project.description)
                                        .font(theme::font_small())
                                        .color(theme::TEXT_SECONDARY),
                                );
                            });
                        });
                        row.col(|ui| {
                            ui.vertical(|ui| {
                                widgets::meta(ui, "Start", &format_date(project.start_date));
                                widgets::meta(ui, "End", &format_date(project.planned_end_date));
                                widgets::meta(ui, "Duration", &format_planned_days(project));
                            });
                        });
                        row.col(|ui| widgets::badge(ui, &project.status));
                        row.col(|ui| widgets::badge(ui, &project.priority));
                        row.col(|ui| {
                            let count = catalog.work_items_for_project(&project.id).len();
                            ui.label(count.to_string());
                        });
                    });
                }
            });
    });

    if projects.is_empty() {
        ui.add_space(8.0);
        ui.label(RichText::new("No project matches the current filters").color(theme::TEXT_DIM));
    }

    action
}
