use chrono::{DateTime, Utc};
use egui::{RichText, Ui};
use work_tracker::engine::{checklist_counts, is_overdue, progress, WorkItemQuery};
use work_tracker::model::{Catalog, ChecklistStatus, WorkItem};
use work_tracker::present::{
    format_date, owner_names, resolve_owner_name, resolve_project_name, Category, Presentable,
};

use crate::ui::{filter_bar, theme, widgets};

/// Actions that the work-item list can request.
pub enum WorkItemListAction {
    None,
    Export,
}

/// Render the filterable list of work-item cards.
pub fn show_work_item_list(
    catalog: &Catalog,
    query: &mut WorkItemQuery,
    now: DateTime<Utc>,
    ui: &mut Ui,
) -> WorkItemListAction {
    let mut action = WorkItemListAction::None;

    ui.horizontal(|ui| {
        ui.label(RichText::new("Work items").font(theme::font_title()).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let export = egui::Button::new(format!("{}  Export CSV", egui_phosphor::regular::DOWNLOAD_SIMPLE));
            if ui.add(export).clicked() {
                action = WorkItemListAction::Export;
            }
        });
    });
    ui.add_space(12.0);

    filter_bar::show_work_item_filters(query, ui);
    ui.add_space(12.0);

    let items = query.apply(&catalog.work_items);
    ui.label(
        RichText::new(format!("{} of {} work items", items.len(), catalog.work_items.len()))
            .font(theme::font_small())
            .color(theme::TEXT_DIM),
    );

    if items.is_empty() {
        ui.label(RichText::new("No work item matches the current filters").color(theme::TEXT_DIM));
    }

    for item in items {
        show_card(catalog, item, now, ui);
        ui.add_space(10.0);
    }

    action
}

fn show_card(catalog: &Catalog, item: &WorkItem, now: DateTime<Utc>, ui: &mut Ui) {
    widgets::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        // Title row
        ui.horizontal(|ui| {
            ui.label(RichText::new(&item.description).font(theme::font_heading()).strong());
            widgets::badge(ui, &item.status);
            widgets::badge(ui, &item.work_type);
            if is_overdue(item, now) {
                widgets::pill(ui, "Overdue", Category::Danger);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!(
                        "{}  {} - {}",
                        egui_phosphor::regular::CALENDAR_BLANK,
                        format_date(item.start_date),
                        format_date(item.end_date)
                    ))
                    .color(theme::TEXT_SECONDARY),
                );
            });
        });

        ui.horizontal_wrapped(|ui| {
            widgets::meta(ui, "Project", resolve_project_name(&item.project_id, catalog));
            widgets::meta(ui, "Application", item.target_application.label());
            ui.label(RichText::new("Environment:").font(theme::font_small()).color(theme::TEXT_SECONDARY));
            widgets::badge(ui, &item.environment);
            widgets::meta(ui, "Owner", resolve_owner_name(&item.owner_id, catalog));
            if !item.team.is_empty() {
                widgets::meta(ui, "Team", &owner_names(&item.team, catalog));
            }
        });

        ui.add_space(6.0);
        ui.separator();
        show_checklist(catalog, item, ui);
    });
}

fn show_checklist(catalog: &Catalog, item: &WorkItem, ui: &mut Ui) {
    let (done, total) = checklist_counts(item);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Checklist").strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!("{done} / {total} done  ({}%)", progress(item)))
                    .color(theme::TEXT_SECONDARY),
            );
        });
    });
    widgets::progress_bar(ui, progress(item));
    ui.add_space(4.0);

    let entries = item.ordered_checklist();
    if entries.is_empty() {
        ui.label(RichText::new("No checklist").color(theme::TEXT_DIM));
        return;
    }

    egui::Grid::new(("checklist", item.id.as_str()))
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            for (i, entry) in entries.iter().enumerate() {
                ui.horizontal(|ui| {
                    let (dot, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(dot.center(), 5.0, theme::category_dot(entry.status.category()));

                    let mut text = RichText::new(&entry.description).font(theme::font_body());
                    text = match entry.status {
                        ChecklistStatus::Done => text.strikethrough().color(theme::category_colors(Category::Success).1),
                        ChecklistStatus::InProgress => text.color(theme::category_colors(Category::Warning).1),
                        ChecklistStatus::Blocked => text.color(theme::category_colors(Category::Danger).1),
                        ChecklistStatus::NotStarted => text.color(theme::TEXT_SECONDARY),
                    };
                    let resp = ui.label(text);

                    let mut hover = vec![entry.status.label().to_string()];
                    if let Some(owner) = &entry.owner_id {
                        hover.push(format!("Owner: {}", resolve_owner_name(owner, catalog)));
                    }
                    if let Some(due) = entry.due_date {
                        hover.push(format!("Due: {}", format_date(due)));
                    }
                    if let Some(comment) = &entry.comment {
                        hover.push(comment.clone());
                    }
                    resp.on_hover_text(hover.join("\n"));
                });
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}
