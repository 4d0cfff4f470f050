use crate::model::timeline::{
    TableSize, TABLE_HEIGHT_RANGE, TABLE_HEIGHT_STEP, TABLE_WIDTH_RANGE, TABLE_WIDTH_STEP,
};
use crate::model::{DashboardState, WidgetKey};
use crate::ui::{theme, timeline_table, widget_board};
use egui::{RichText, Ui};

/// Render the Dashboard view. Returns `(dragged, target)` when a widget card
/// was dropped onto another one this frame.
pub fn show_dashboard(dashboard: &mut DashboardState, ui: &mut Ui) -> Option<(WidgetKey, WidgetKey)> {
    let mut dropped = None;

    egui::ScrollArea::vertical()
        .id_salt("dashboard_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.heading(RichText::new(dashboard.title()).strong());
            ui.add_space(8.0);

            if dashboard.has_timeline() {
                show_size_controls(&mut dashboard.table_size, ui);
                ui.add_space(6.0);
                timeline_table::show_timeline_table(dashboard, ui);
            } else {
                ui.label(
                    RichText::new("No milestones yet. Enter an SOP date under Data Input and save.")
                        .italics()
                        .color(theme::TEXT_DIM),
                );
            }

            ui.add_space(16.0);
            ui.label(RichText::new("Widgets").strong().size(14.0));
            ui.label(
                RichText::new("Drag a card onto another to reorder.")
                    .size(11.0)
                    .color(theme::TEXT_DIM),
            );
            ui.add_space(6.0);
            dropped = widget_board::show_widget_board(dashboard, ui);
        });

    dropped
}

fn show_size_controls(size: &mut TableSize, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Table Width").color(theme::TEXT_SECONDARY));
        ui.add(
            egui::Slider::new(&mut size.width, TABLE_WIDTH_RANGE)
                .step_by(TABLE_WIDTH_STEP)
                .suffix("px"),
        );
        ui.add_space(16.0);
        ui.label(RichText::new("Table Height").color(theme::TEXT_SECONDARY));
        ui.add(
            egui::Slider::new(&mut size.height, TABLE_HEIGHT_RANGE)
                .step_by(TABLE_HEIGHT_STEP)
                .suffix("px"),
        );
    });
}
