use crate::app::TrackerApp;
use egui::{menu, RichText, Ui};
use work_tracker::settings::Section;

/// Render the top menu bar.
pub fn show_toolbar(app: &mut TrackerApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  "), |ui| {
            if ui.button("  Open dataset...").clicked() {
                app.open_dataset();
                ui.close_menu();
            }
            if ui
                .add_enabled(app.dataset_path().is_some(), egui::Button::new("  Reload          F5"))
                .clicked()
            {
                app.reload_dataset();
                ui.close_menu();
            }
            if ui.button("  Use sample data").clicked() {
                app.use_sample_data();
                ui.close_menu();
            }
            if ui.button("  Save dataset as...").clicked() {
                app.save_dataset_as();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Export projects CSV...").clicked() {
                app.export_projects_csv();
                ui.close_menu();
            }
            if ui.button("  Export work items CSV...").clicked() {
                app.export_work_items_csv();
                ui.close_menu();
            }
            if ui
                .add_enabled(app.last_export.is_some(), egui::Button::new("  Show exported file"))
                .clicked()
            {
                app.show_last_export();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.menu_button(RichText::new("  View  "), |ui| {
            for section in Section::ALL {
                if ui.radio(app.section == section, section.title()).clicked() {
                    app.set_section(section);
                    ui.close_menu();
                }
            }
        });

        ui.menu_button(RichText::new("  Help  "), |ui| {
            if ui.button("  About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });
    });
}
