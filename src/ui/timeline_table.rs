use crate::model::milestone::Milestone;
use crate::model::timeline::TimelineGrid;
use crate::model::DashboardState;
use crate::ui::theme;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};

const ROW_H: f32 = theme::HEADER_ROW_HEIGHT;

/// Render the year / month / project timeline. The label column stays put
/// while the month columns scroll horizontally.
pub fn show_timeline_table(dashboard: &DashboardState, ui: &mut Ui) {
    let months = dashboard.grid.months();
    if months.is_empty() {
        return;
    }
    let size = dashboard.table_size;
    let col_w = size.width / months.len() as f32;
    let project_h = (size.height - 2.0 * ROW_H).max(ROW_H);
    let total_h = 2.0 * ROW_H + project_h;

    ui.horizontal_top(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        draw_label_column(ui, &dashboard.project_name, project_h);

        egui::ScrollArea::horizontal()
            .id_salt("timeline_table")
            .auto_shrink([false, true])
            .show(ui, |ui| {
                let (response, painter) =
                    ui.allocate_painter(Vec2::new(size.width, total_h), Sense::hover());
                let origin = response.rect.min;
                painter.rect_filled(response.rect, 0.0, theme::BG_DARK);

                // Year row
                let mut x = origin.x;
                for span in dashboard.grid.years() {
                    let w = span.months.len() as f32 * col_w;
                    let cell = Rect::from_min_size(Pos2::new(x, origin.y), Vec2::new(w, ROW_H));
                    painter.rect_filled(cell, 0.0, theme::BG_HEADER);
                    painter.rect_stroke(cell, 0.0, Stroke::new(0.5, theme::GRID_LINE));
                    painter.text(
                        cell.center(),
                        Align2::CENTER_CENTER,
                        span.year.to_string(),
                        theme::font_header(),
                        theme::TEXT_PRIMARY,
                    );
                    x += w;
                }

                // Month row and project row
                let month_font = FontId::proportional(size.month_font_size(months.len()));
                for (i, ym) in months.iter().enumerate() {
                    let x = origin.x + i as f32 * col_w;
                    let month_cell =
                        Rect::from_min_size(Pos2::new(x, origin.y + ROW_H), Vec2::new(col_w, ROW_H));
                    let project_cell = Rect::from_min_size(
                        Pos2::new(x, origin.y + 2.0 * ROW_H),
                        Vec2::new(col_w, project_h),
                    );
                    let hits = TimelineGrid::milestones_in(&dashboard.milestones, *ym);

                    let fill = if hits.is_empty() {
                        theme::BG_HEADER
                    } else {
                        theme::MILESTONE.gamma_multiply(0.35)
                    };
                    painter.rect_filled(month_cell, 0.0, fill);
                    painter.rect_stroke(month_cell, 0.0, Stroke::new(0.5, theme::GRID_LINE));
                    painter.rect_stroke(project_cell, 0.0, Stroke::new(0.5, theme::GRID_LINE));
                    painter.text(
                        month_cell.center(),
                        Align2::CENTER_CENTER,
                        ym.month.to_string(),
                        month_font.clone(),
                        theme::TEXT_SECONDARY,
                    );

                    if hits.is_empty() {
                        continue;
                    }

                    let marker = Rect::from_min_size(
                        project_cell.min + Vec2::new(1.0, 2.0),
                        Vec2::new((col_w - 2.0).max(1.0), 4.0),
                    );
                    painter.rect_filled(marker, 1.0, theme::MILESTONE);
                    let galley = painter.layout(
                        milestone_label(&hits),
                        theme::font_small(),
                        theme::MILESTONE,
                        (col_w - 2.0).max(1.0),
                    );
                    painter.with_clip_rect(project_cell).galley(
                        Pos2::new(project_cell.left() + 1.0, project_cell.top() + 8.0),
                        galley,
                        Color32::TRANSPARENT,
                    );

                    ui.interact(
                        month_cell.union(project_cell),
                        ui.id().with(("timeline-month", ym.year, ym.month)),
                        Sense::hover(),
                    )
                    .on_hover_text(milestone_tooltip(&hits));
                }
            });
    });
}

fn draw_label_column(ui: &mut Ui, project_name: &str, project_h: f32) {
    let (response, painter) = ui.allocate_painter(
        Vec2::new(theme::LABEL_COL_WIDTH, 2.0 * ROW_H + project_h),
        Sense::hover(),
    );
    let mut y = response.rect.top();
    for (label, h) in [("Year", ROW_H), ("Month", ROW_H), (project_name, project_h)] {
        let cell = Rect::from_min_size(
            Pos2::new(response.rect.left(), y),
            Vec2::new(theme::LABEL_COL_WIDTH, h),
        );
        painter.rect_filled(cell, 0.0, theme::BG_HEADER);
        painter.rect_stroke(cell, 0.0, Stroke::new(0.5, theme::GRID_LINE));
        painter.with_clip_rect(cell.shrink(2.0)).text(
            Pos2::new(cell.left() + 8.0, cell.top() + ROW_H / 2.0),
            Align2::LEFT_CENTER,
            label,
            theme::font_label(),
            theme::TEXT_PRIMARY,
        );
        y += h;
    }
}

/// Names of every milestone in one month, in schedule order.
fn milestone_label(hits: &[&Milestone]) -> String {
    hits.iter()
        .map(|m| m.name.as_str())
        .collect::<Vec<_>>()
        .join(" / ")
}

fn milestone_tooltip(hits: &[&Milestone]) -> String {
    hits.iter()
        .map(|m| format!("{}: {}", m.name, m.date.format("%Y-%m-%d")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn milestone(name: &str, d: u32) -> Milestone {
        Milestone {
            name: name.into(),
            offset: 0.0,
            date: NaiveDate::from_ymd_opt(2025, 1, d).unwrap(),
        }
    }

    #[test]
    fn shared_month_lists_every_milestone() {
        let (mpp, pilot) = (milestone("MPP", 3), milestone("Pilot", 28));
        assert_eq!(milestone_label(&[&mpp, &pilot]), "MPP / Pilot");
        assert_eq!(
            milestone_tooltip(&[&mpp, &pilot]),
            "MPP: 2025-01-03\nPilot: 2025-01-28"
        );
    }
}
