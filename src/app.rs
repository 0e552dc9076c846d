use std::path::{Path, PathBuf};

use work_tracker::engine::{Clock, ProjectQuery, SystemClock, WorkItemQuery};
use work_tracker::io::{self, csv_export, seed, DataError};
use work_tracker::model::Catalog;
use work_tracker::settings::{AppSettings, Section, SettingsStore};

use crate::ui;

const SAMPLE_LABEL: &str = "Sample data";

/// Main application state.
pub struct TrackerApp {
    pub catalog: Catalog,
    /// Where `catalog` came from: a file name or the sample label.
    pub dataset_label: String,
    pub section: Section,

    // Filter / search, kept per list
    pub project_query: ProjectQuery,
    pub work_item_query: WorkItemQuery,

    // Status message
    pub status_message: String,

    // Dialog state
    pub show_about: bool,

    /// CSV written by the last successful export.
    pub last_export: Option<PathBuf>,

    settings: AppSettings,
    settings_store: SettingsStore,
    clock: SystemClock,
}

impl TrackerApp {
    /// `startup_path` wins over the snapshot remembered in the settings.
    pub fn new(cc: &eframe::CreationContext<'_>, startup_path: Option<PathBuf>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        ui::theme::apply_theme(&cc.egui_ctx);

        let settings_store = SettingsStore::from_config_dir();
        let mut settings = settings_store.load();
        tracing::debug!(path = %settings_store.path().display(), "Settings loaded");

        if let Some(path) = startup_path {
            settings.dataset_path = Some(path);
        }

        let mut app = Self {
            catalog: seed::sample_catalog(),
            dataset_label: SAMPLE_LABEL.to_string(),
            section: settings.last_section,
            project_query: ProjectQuery::default(),
            work_item_query: WorkItemQuery::default(),
            status_message: "Ready".to_string(),
            show_about: false,
            last_export: None,
            settings,
            settings_store,
            clock: SystemClock,
        };

        if let Some(path) = app.settings.dataset_path.clone() {
            app.load_dataset(path);
        }
        app
    }

    pub fn dataset_path(&self) -> Option<&Path> {
        self.settings.dataset_path.as_deref()
    }

    pub fn set_section(&mut self, section: Section) {
        self.section = section;
        self.settings.last_section = section;
        self.settings_store.save(&self.settings);
    }

    // --- Dataset operations ---

    pub fn open_dataset(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Dataset", &["json"])
            .pick_file()
        {
            self.load_dataset(path);
        }
    }

    /// Replace the catalog with the snapshot at `path`. On failure the
    /// current catalog stays active.
    pub fn load_dataset(&mut self, path: PathBuf) {
        match io::load_catalog(&path) {
            Ok(catalog) => {
                let dangling = catalog.dangling_references().len();
                self.catalog = catalog;
                self.dataset_label = file_label(&path);
                self.status_message = if dangling > 0 {
                    format!("Dataset loaded ({dangling} unresolved references)")
                } else {
                    "Dataset loaded".to_string()
                };
                self.settings.dataset_path = Some(path);
                self.settings_store.save(&self.settings);
            }
            Err(e) => {
                tracing::error!(error = %e, "Dataset load failed");
                self.status_message = format!("Error loading: {e}");
            }
        }
    }

    pub fn reload_dataset(&mut self) {
        if let Some(path) = self.settings.dataset_path.clone() {
            self.load_dataset(path);
        }
    }

    pub fn use_sample_data(&mut self) {
        self.catalog = seed::sample_catalog();
        self.dataset_label = SAMPLE_LABEL.to_string();
        self.settings.dataset_path = None;
        self.settings_store.save(&self.settings);
        self.status_message = "Sample data loaded".to_string();
    }

    pub fn save_dataset_as(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Dataset", &["json"])
            .set_file_name("dataset.json")
            .save_file()
        {
            match io::save_catalog(&self.catalog, &path) {
                Ok(()) => self.status_message = format!("Dataset saved to {}", file_label(&path)),
                Err(e) => {
                    tracing::error!(error = %e, "Dataset save failed");
                    self.status_message = format!("Error saving: {e}");
                }
            }
        }
    }

    // --- Exports ---

    pub fn export_projects_csv(&mut self) {
        let projects = self.project_query.apply(&self.catalog.projects);
        let result = match csv_export::require_rows(&projects, csv_export::NO_PROJECTS) {
            Ok(()) => match csv_save_dialog("projects.csv") {
                Some(path) => csv_export::export_projects(&projects, &path).map(|n| (n, path)),
                None => return,
            },
            Err(e) => Err(e),
        };
        self.finish_export(result, "projects");
    }

    pub fn export_work_items_csv(&mut self) {
        let items = self.work_item_query.apply(&self.catalog.work_items);
        let result = match csv_export::require_rows(&items, csv_export::NO_WORK_ITEMS) {
            Ok(()) => match csv_save_dialog("work_items.csv") {
                Some(path) => {
                    csv_export::export_work_items(&items, &self.catalog, &path).map(|n| (n, path))
                }
                None => return,
            },
            Err(e) => Err(e),
        };
        self.finish_export(result, "work items");
    }

    fn finish_export(&mut self, result: Result<(usize, PathBuf), DataError>, what: &str) {
        let result = result.map(|(count, path)| {
            self.last_export = Some(path);
            count
        });
        if let Err(e) = &result {
            tracing::error!(error = %e, "CSV export failed");
        }
        self.status_message = export_message(&result, what);
    }

    /// Open the last exported CSV with the system default application.
    pub fn show_last_export(&mut self) {
        if let Some(path) = &self.last_export {
            if let Err(e) = open::that(path) {
                tracing::warn!(path = %path.display(), error = %e, "Cannot open exported file");
                self.status_message = format!("Cannot open {}: {e}", file_label(path));
            }
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset")
        .to_string()
}

fn csv_save_dialog(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("CSV Files", &["csv"])
        .set_file_name(default_name)
        .save_file()
}

fn export_message(result: &Result<usize, DataError>, what: &str) -> String {
    match result {
        Ok(count) => format!("Exported {count} {what} to CSV"),
        Err(DataError::Empty(reason)) => format!("Nothing to export: {reason}"),
        Err(e) => format!("CSV export failed: {e}"),
    }
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Read fresh every frame; overdue state depends on it.
        let now = self.clock.now();

        // Handle keyboard shortcuts outside closures to avoid borrow issues
        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            self.reload_dataset();
        }

        // Top panel: menu bar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_STATUS_BAR)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_small())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(&self.dataset_label)
                                .font(ui::theme::font_small())
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Left panel: navigation
        let mut picked = None;
        egui::SidePanel::left("sidebar")
            .exact_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::same(10.0))
                    .stroke(egui::Stroke::new(1.0, ui::theme::BORDER_SUBTLE)),
            )
            .show(ctx, |ui| {
                picked = ui::sidebar::show_sidebar(self.section, &self.catalog, &self.dataset_label, ui);
            });
        if let Some(section) = picked {
            self.set_section(section);
        }

        // Central panel: active section
        let mut export = false;
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_APP)
                    .inner_margin(egui::Margin::same(24.0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.section {
                        Section::Dashboard => {
                            ui::dashboard::show_dashboard(&self.catalog, now, self.settings.recent_limit, ui);
                        }
                        Section::Projects => {
                            let action = ui::project_list::show_project_list(
                                &self.catalog,
                                &mut self.project_query,
                                ui,
                            );
                            export = matches!(action, ui::project_list::ProjectListAction::Export);
                        }
                        Section::WorkItems => {
                            let action = ui::work_item_list::show_work_item_list(
                                &self.catalog,
                                &mut self.work_item_query,
                                now,
                                ui,
                            );
                            export = matches!(action, ui::work_item_list::WorkItemListAction::Export);
                        }
                    });
            });

        if export {
            match self.section {
                Section::Projects => self.export_projects_csv(),
                Section::WorkItems => self.export_work_items_csv(),
                Section::Dashboard => {}
            }
        }

        // Dialogs
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }

        // Overdue flags flip with the clock even without input.
        ctx.request_repaint_after(std::time::Duration::from_secs(60));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_success_message() {
        assert_eq!(export_message(&Ok(3), "projects"), "Exported 3 projects to CSV");
    }

    #[test]
    fn empty_selection_reaches_the_status_bar() {
        let result = csv_export::require_rows::<u8>(&[], csv_export::NO_WORK_ITEMS).map(|()| 0);
        assert_eq!(
            export_message(&result, "work items"),
            "Nothing to export: no work item matches the current filters"
        );
    }

    #[test]
    fn other_failures_are_reported() {
        let err = DataError::Csv(csv::Error::from(std::io::Error::other("disk full")));
        let msg = export_message(&Err(err), "projects");
        assert!(msg.starts_with("CSV export failed: "), "{msg}");
    }

    #[test]
    fn file_label_uses_the_file_name() {
        assert_eq!(file_label(Path::new("/tmp/data/catalog.json")), "catalog.json");
        assert_eq!(file_label(Path::new("/")), "dataset");
    }
}
