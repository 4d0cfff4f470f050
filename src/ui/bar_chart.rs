use crate::model::chart::{Bar, ChartData};
use crate::ui::theme;
use egui::{Align2, Color32, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};

const LEGEND_HEIGHT: f32 = 18.0;
const AXIS_LABEL_HEIGHT: f32 = 16.0;
const AXIS_WIDTH: f32 = 28.0;

/// Paint a two-bar chart into a fixed-height area of the card.
pub fn show_bar_chart(chart: &ChartData, ui: &mut Ui) {
    let width = ui.available_width();
    let (response, painter) =
        ui.allocate_painter(Vec2::new(width, theme::CHART_HEIGHT), Sense::hover());
    let rect = response.rect;

    // Legend
    let mut legend_x = rect.left() + AXIS_WIDTH;
    for (bar, color) in [(&chart.done, theme::CHART_DONE), (&chart.pending, theme::CHART_PENDING)] {
        let swatch = Rect::from_min_size(
            Pos2::new(legend_x, rect.top() + 4.0),
            Vec2::new(10.0, 10.0),
        );
        painter.rect_filled(swatch, Rounding::same(2.0), color);
        let galley = painter.layout_no_wrap(bar.label.to_string(), theme::font_small(), theme::TEXT_SECONDARY);
        let text_w = galley.size().x;
        painter.galley(Pos2::new(swatch.right() + 4.0, rect.top() + 3.0), galley, Color32::TRANSPARENT);
        legend_x = swatch.right() + text_w + 14.0;
    }

    let plot = Rect::from_min_max(
        Pos2::new(rect.left() + AXIS_WIDTH, rect.top() + LEGEND_HEIGHT + 4.0),
        Pos2::new(rect.right() - 4.0, rect.bottom() - AXIS_LABEL_HEIGHT),
    );
    let max = nice_max(chart.max_value());

    // Grid lines with value labels
    for step in 0..=4 {
        let frac = step as f32 / 4.0;
        let y = plot.bottom() - plot.height() * frac;
        painter.line_segment(
            [Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)],
            Stroke::new(0.5, theme::GRID_LINE),
        );
        painter.text(
            Pos2::new(plot.left() - 4.0, y),
            Align2::RIGHT_CENTER,
            format_value(max * frac as f64),
            theme::font_small(),
            theme::TEXT_DIM,
        );
    }

    // Bars, grouped in the middle of the plot
    let bar_w = (plot.width() / 5.0).min(48.0);
    let gap = 6.0;
    let group_left = plot.center().x - bar_w - gap / 2.0;
    let bars = [(&chart.done, theme::CHART_DONE), (&chart.pending, theme::CHART_PENDING)];
    for (i, (bar, color)) in bars.into_iter().enumerate() {
        let x = group_left + i as f32 * (bar_w + gap);
        let bar_rect = bar_bounds(bar, max, plot, x, bar_w);
        painter.rect_filled(bar_rect, Rounding { nw: 3.0, ne: 3.0, sw: 0.0, se: 0.0 }, color.gamma_multiply(0.85));

        ui.interact(bar_rect, ui.id().with(("chart-bar", i)), Sense::hover())
            .on_hover_text(format!("{}: {}", bar.label, format_value(bar.value)));
    }

    painter.text(
        Pos2::new(plot.center().x, rect.bottom() - AXIS_LABEL_HEIGHT / 2.0),
        Align2::CENTER_CENTER,
        chart.category,
        theme::font_small(),
        theme::TEXT_SECONDARY,
    );
}

fn bar_bounds(bar: &Bar, max: f64, plot: Rect, x: f32, width: f32) -> Rect {
    let frac = if max > 0.0 { (bar.value.max(0.0) / max) as f32 } else { 0.0 };
    let h = (plot.height() * frac).max(1.0);
    Rect::from_min_size(Pos2::new(x, plot.bottom() - h), Vec2::new(width, h))
}

/// Round the axis maximum up to a 1/2/5 × 10^n value.
pub fn nice_max(value: f64) -> f64 {
    if value <= 0.0 || !value.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powi(value.log10().floor() as i32);
    let normalized = value / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn format_value(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}
