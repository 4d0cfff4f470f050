use crate::app::EntryState;
use crate::model::milestone::parse_sop;
use crate::model::{WidgetEntries, WidgetKey, WidgetKind};
use crate::ui::theme;
use egui::{Color32, RichText, Ui};
use egui_phosphor::regular as icons;

/// Actions the Data Input view can request.
pub enum EntryAction {
    None,
    Add(WidgetKey),
    Remove(WidgetKey, usize),
    Save,
}

/// Render the Data Input view.
pub fn show_data_entry(entry: &mut EntryState, ui: &mut Ui) -> EntryAction {
    let mut action = EntryAction::None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.heading(RichText::new("Data Input").strong());
            ui.add_space(8.0);

            show_project_card(entry, ui);
            ui.add_space(10.0);

            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
                for key in WidgetKey::ALL {
                    if let Some(a) = show_widget_card(entry, key, ui) {
                        action = a;
                    }
                }
            });
            ui.add_space(10.0);

            if !entry.sop_input.trim().is_empty() && !entry.milestones.is_empty() {
                show_preview(entry, ui);
                ui.add_space(10.0);
            }

            let save_btn = egui::Button::new(
                RichText::new(format!("{}  Save All Data", icons::FLOPPY_DISK))
                    .color(Color32::WHITE)
                    .size(13.0),
            )
            .fill(theme::ACCENT)
            .rounding(egui::Rounding::same(5.0));
            if ui.add_sized([180.0, 32.0], save_btn).clicked() {
                action = EntryAction::Save;
            }
        });

    action
}

fn card_frame() -> egui::Frame {
    egui::Frame::default()
        .fill(theme::BG_CARD)
        .rounding(egui::Rounding::same(6.0))
        .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE))
        .inner_margin(egui::Margin::same(10.0))
}

fn show_project_card(entry: &mut EntryState, ui: &mut Ui) {
    card_frame().show(ui, |ui| {
        ui.label(RichText::new("Project Info").strong().size(14.0));
        ui.add_space(4.0);

        egui::Grid::new("project_info_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Project Name").color(theme::TEXT_SECONDARY));
                ui.add_sized(
                    [240.0, 24.0],
                    egui::TextEdit::singleline(&mut entry.project_name)
                        .hint_text("Enter project name"),
                );
                ui.end_row();

                ui.label(RichText::new("SOP Date").color(theme::TEXT_SECONDARY));
                ui.horizontal(|ui| {
                    let text = ui.add_sized(
                        [120.0, 24.0],
                        egui::TextEdit::singleline(&mut entry.sop_input).hint_text("YYYY-MM-DD"),
                    );
                    if text.changed() {
                        entry.sop_error = None;
                    }
                    if let Ok(date) = parse_sop(&entry.sop_input) {
                        entry.sop_picker = date;
                    }
                    let picker = ui.add(
                        egui_extras::DatePickerButton::new(&mut entry.sop_picker).id_salt("sop_picker"),
                    );
                    if picker.changed() {
                        entry.sop_input = entry.sop_picker.format("%Y-%m-%d").to_string();
                        entry.sop_error = None;
                    }
                });
                ui.end_row();
            });

        if let Some(err) = &entry.sop_error {
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("{} {}", icons::WARNING, err))
                    .color(theme::TEXT_ERROR)
                    .size(11.0),
            );
        }
    });
}

fn show_widget_card(entry: &mut EntryState, key: WidgetKey, ui: &mut Ui) -> Option<EntryAction> {
    let mut action = None;

    card_frame().show(ui, |ui| {
        ui.set_width(theme::CARD_WIDTH);
        ui.label(RichText::new(key.title()).strong().size(13.0));
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            match key.kind() {
                WidgetKind::Text => {
                    let input = ui.add(
                        egui::TextEdit::singleline(entry.drafts.text_mut(key))
                            .hint_text(format!("Add to {}", key.title()))
                            .desired_width(theme::CARD_WIDTH - 60.0),
                    );
                    if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        action = Some(EntryAction::Add(key));
                    }
                }
                WidgetKind::Status => {
                    let draft = entry.drafts.status_mut(key);
                    for (value, hint) in [
                        (&mut draft.total, "Total"),
                        (&mut draft.done, key.done_label()),
                        (&mut draft.pending, "Pending"),
                    ] {
                        ui.add(
                            egui::TextEdit::singleline(value)
                                .hint_text(hint)
                                .desired_width(52.0),
                        );
                    }
                }
            }
            if ui.button(icons::PLUS).on_hover_text("Add").clicked() {
                action = Some(EntryAction::Add(key));
            }
        });

        if let Some(err) = entry.errors.get(&key) {
            ui.label(RichText::new(err).color(theme::TEXT_ERROR).size(11.0));
        }

        ui.add_space(4.0);
        match entry.widgets.entries(key) {
            WidgetEntries::Text(items) => {
                for (i, item) in items.iter().enumerate() {
                    if entry_row(ui, item) {
                        action = Some(EntryAction::Remove(key, i));
                    }
                }
            }
            WidgetEntries::Status(items) => {
                for (i, item) in items.iter().enumerate() {
                    let text = format!(
                        "Total {} · {} {} · Pending {}",
                        item.total,
                        key.done_label(),
                        item.done,
                        item.pending
                    );
                    if entry_row(ui, &text) {
                        action = Some(EntryAction::Remove(key, i));
                    }
                }
            }
        }
    });

    action
}

/// One existing entry with a remove button. Returns `true` when removal was
/// requested.
fn entry_row(ui: &mut Ui, text: &str) -> bool {
    let mut remove = false;
    ui.horizontal(|ui| {
        ui.add(egui::Label::new(RichText::new(text).size(12.0)).truncate());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let btn = ui.add(
                egui::Button::new(RichText::new(icons::X).size(10.0).color(theme::TEXT_DIM))
                    .frame(false),
            );
            remove = btn.on_hover_text("Remove entry").clicked();
        });
    });
    remove
}

fn show_preview(entry: &EntryState, ui: &mut Ui) {
    card_frame().show(ui, |ui| {
        ui.label(RichText::new("Milestone Preview").strong().size(14.0));
        ui.add_space(4.0);
        egui::Grid::new("milestone_preview")
            .num_columns(2)
            .striped(true)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Milestone").color(theme::TEXT_DIM).strong());
                ui.label(RichText::new("Date").color(theme::TEXT_DIM).strong());
                ui.end_row();
                for milestone in &entry.milestones {
                    ui.label(&milestone.name);
                    ui.label(milestone.date.format("%Y-%m-%d").to_string());
                    ui.end_row();
                }
            });
    });
}
