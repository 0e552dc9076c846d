use chrono::{DateTime, Utc};
use egui::{RichText, Ui};
use egui_phosphor::regular as icon;
use work_tracker::engine::{aggregate_counts, projects_with_status, recent_work_items};
use work_tracker::model::{Catalog, ProjectStatus};
use work_tracker::present::{format_date, Presentable};

use crate::ui::{theme, widgets};

/// Render the dashboard: four counters, recent work items and running projects.
pub fn show_dashboard(catalog: &Catalog, now: DateTime<Utc>, recent_limit: usize, ui: &mut Ui) {
    let caption = format!("{}  {}", icon::CALENDAR, format_date(now.date_naive()));
    widgets::page_title(ui, "Dashboard", Some(caption.as_str()));

    let stats = aggregate_counts(&catalog.projects, &catalog.work_items, now);
    ui.columns(4, |cols| {
        widgets::stat_card(&mut cols[0], "Total projects", stats.total_projects, icon::CLIPBOARD_TEXT, theme::STAT_BLUE);
        widgets::stat_card(&mut cols[1], "Projects in progress", stats.projects_in_progress, icon::CLOCK, theme::STAT_ORANGE);
        widgets::stat_card(&mut cols[2], "Overdue work items", stats.work_items_overdue, icon::WARNING, theme::STAT_RED);
        widgets::stat_card(&mut cols[3], "Completed work items", stats.work_items_done, icon::CHECK_CIRCLE, theme::STAT_GREEN);
    });

    ui.add_space(16.0);

    ui.columns(2, |cols| {
        show_recent(catalog, recent_limit, &mut cols[0]);
        show_running_projects(catalog, &mut cols[1]);
    });
}

fn show_recent(catalog: &Catalog, limit: usize, ui: &mut Ui) {
    widgets::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new("Recent work items").font(theme::font_heading()).strong());
        ui.add_space(8.0);

        let recent = recent_work_items(&catalog.work_items, limit);
        if recent.is_empty() {
            ui.label(RichText::new("No work items").color(theme::TEXT_DIM));
        }
        for item in recent {
            ui.separator();
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(&item.description).strong());
                    ui.label(
                        RichText::new(format!(
                            "{} • {}",
                            item.target_application.label(),
                            item.environment.label()
                        ))
                        .font(theme::font_small())
                        .color(theme::TEXT_SECONDARY),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::badge(ui, &item.status);
                });
            });
        }
    });
}

fn show_running_projects(catalog: &Catalog, ui: &mut Ui) {
    widgets::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new("Projects in progress").font(theme::font_heading()).strong());
        ui.add_space(8.0);

        let running = projects_with_status(&catalog.projects, ProjectStatus::InProgress);
        if running.is_empty() {
            ui.label(RichText::new("No project in progress").color(theme::TEXT_DIM));
        }
        for project in running {
            ui.separator();
            ui.horizontal(|ui| {
                ui.label(RichText::new(&project.name).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::badge(ui, &project.priority);
                });
            });
            if !project.description.is_empty() {
                ui.label(
                    RichText::new(&project.description)
                        .font(theme::font_body())
                        .color(theme::TEXT_SECONDARY),
                );
            }
            ui.horizontal(|ui| {
                widgets::meta(ui, "Start", &format_date(project.start_date));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::meta(ui, "End", &format_date(project.planned_end_date));
                });
            });
        }
    });
}
