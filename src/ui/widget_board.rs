use crate::model::chart::ChartData;
use crate::model::{DashboardState, WidgetEntries, WidgetKey};
use crate::ui::{bar_chart, theme};
use egui::{RichText, Stroke, Ui};
use egui_phosphor::regular as icons;

/// Render the widget cards in display order. Each card can be dragged onto
/// another; returns `(dragged, target)` when a drop lands on a different
/// card. Drops outside any card are ignored.
pub fn show_widget_board(dashboard: &mut DashboardState, ui: &mut Ui) -> Option<(WidgetKey, WidgetKey)> {
    let mut dropped = None;
    let order = dashboard.widget_order.keys().to_vec();

    egui::ScrollArea::horizontal()
        .id_salt("widget_board")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = 10.0;
                for key in order {
                    let chart = dashboard.chart(key);
                    let entries = dashboard.widgets.entries(key);
                    let response = ui
                        .dnd_drag_source(egui::Id::new(("widget-card", key)), key, |ui| {
                            show_card(key, entries, chart.as_ref(), ui);
                        })
                        .response;

                    if let Some(hovering) = response.dnd_hover_payload::<WidgetKey>() {
                        if *hovering != key {
                            ui.painter().rect_filled(response.rect, 6.0, theme::BG_DROP_TARGET);
                            ui.painter().rect_stroke(
                                response.rect,
                                6.0,
                                Stroke::new(2.0, theme::BORDER_ACCENT),
                            );
                        }
                    }
                    if let Some(from) = response.dnd_release_payload::<WidgetKey>() {
                        if *from != key {
                            dropped = Some((*from, key));
                        }
                    }
                }
            });
        });

    dropped
}

fn show_card(key: WidgetKey, entries: WidgetEntries<'_>, chart: Option<&ChartData>, ui: &mut Ui) {
    egui::Frame::default()
        .fill(theme::BG_CARD)
        .rounding(egui::Rounding::same(6.0))
        .stroke(Stroke::new(1.0, theme::BORDER_SUBTLE))
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_width(theme::CARD_WIDTH);
            ui.set_min_height(theme::CARD_MIN_HEIGHT);

            ui.horizontal(|ui| {
                ui.label(RichText::new(icons::DOTS_SIX_VERTICAL).color(theme::TEXT_DIM));
                ui.label(RichText::new(key.title()).strong().size(13.0));
            });
            ui.add_space(6.0);

            match entries {
                WidgetEntries::Text([]) => {
                    ui.label(RichText::new("No entries yet.").italics().color(theme::TEXT_DIM));
                }
                WidgetEntries::Text(items) => {
                    for item in items {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(RichText::new("•").color(theme::ACCENT));
                            ui.label(RichText::new(item).size(12.0));
                        });
                    }
                }
                WidgetEntries::Status(_) => match chart {
                    Some(chart) => bar_chart::show_bar_chart(chart, ui),
                    None => {
                        ui.label(RichText::new("No data yet").italics().color(theme::TEXT_DIM));
                    }
                },
            }
        });
}
