use crate::app::{MilestoneApp, View};
use crate::ui::theme;
use egui::{menu, RichText, Ui};
use egui_phosphor::regular as icons;

/// Render the top menu bar.
pub fn show_toolbar(app: &mut MilestoneApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            let on_entry = app.view == View::Entry;
            if ui
                .add_enabled(
                    on_entry,
                    egui::Button::new(format!("{}  Save All Data     Ctrl+S", icons::FLOPPY_DISK)),
                )
                .clicked()
            {
                app.save_all();
                ui.close_menu();
            }
            ui.separator();
            if ui
                .button(format!("{}  Export Milestones CSV...", icons::EXPORT))
                .clicked()
            {
                app.export_csv();
                ui.close_menu();
            }
            if ui
                .button(format!("{}  Open Data Folder", icons::FOLDER_OPEN))
                .clicked()
            {
                app.open_data_folder();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  ").font(theme::font_menu()), |ui| {
            if ui
                .radio(app.view == View::Entry, format!("{}  Data Input", icons::PENCIL_SIMPLE))
                .clicked()
            {
                app.show_entry();
                ui.close_menu();
            }
            if ui
                .radio(
                    app.view == View::Dashboard,
                    format!("{}  Dashboard", icons::CHART_BAR),
                )
                .clicked()
            {
                app.show_dashboard();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        ui.separator();

        // Quick navigation tabs
        for (view, label) in [(View::Entry, "Data Input"), (View::Dashboard, "Dashboard")] {
            let selected = app.view == view;
            if ui.selectable_label(selected, label).clicked() && !selected {
                match view {
                    View::Entry => app.show_entry(),
                    View::Dashboard => app.show_dashboard(),
                }
            }
        }

        // Right-aligned project name
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(app.current_project_name())
                    .size(11.0)
                    .weak(),
            );
        });
    });
}
