use egui::{Color32, FontId, Rounding, Stroke, Visuals};

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_DARK: Color32 = Color32::from_rgb(24, 24, 32);
pub const BG_PANEL: Color32 = Color32::from_rgb(30, 30, 40);
pub const BG_HEADER: Color32 = Color32::from_rgb(34, 37, 48);
pub const BG_CARD: Color32 = Color32::from_rgb(36, 38, 50);
pub const BG_FIELD: Color32 = Color32::from_rgb(20, 20, 28);
pub const BG_STATUS_BAR: Color32 = Color32::from_rgb(28, 28, 36);
pub const BG_DROP_TARGET: Color32 = Color32::from_rgba_premultiplied(80, 140, 220, 40);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(50, 52, 64);
pub const BORDER_ACCENT: Color32 = Color32::from_rgb(90, 140, 220);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(155, 160, 178);
pub const TEXT_DIM: Color32 = Color32::from_rgb(100, 105, 120);
pub const TEXT_ERROR: Color32 = Color32::from_rgb(240, 100, 100);

pub const ACCENT: Color32 = Color32::from_rgb(80, 140, 220);
pub const GRID_LINE: Color32 = Color32::from_rgb(44, 46, 58);
pub const MILESTONE: Color32 = Color32::from_rgb(255, 165, 0);

/// "Completed" / "Released" series.
pub const CHART_DONE: Color32 = Color32::from_rgb(0, 123, 255);
/// "Pending" series.
pub const CHART_PENDING: Color32 = Color32::from_rgb(220, 53, 69);

// ── Sizes ────────────────────────────────────────────────────────────────────

/// Width of the sticky label column of the timeline table.
pub const LABEL_COL_WIDTH: f32 = 120.0;
pub const HEADER_ROW_HEIGHT: f32 = 24.0;
pub const CARD_WIDTH: f32 = 240.0;
pub const CARD_MIN_HEIGHT: f32 = 200.0;
pub const CHART_HEIGHT: f32 = 150.0;
pub const STATUS_BAR_HEIGHT: f32 = 24.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_header() -> FontId {
    FontId::proportional(12.0)
}

pub fn font_label() -> FontId {
    FontId::proportional(11.5)
}

pub fn font_small() -> FontId {
    FontId::proportional(9.5)
}

pub fn font_menu() -> FontId {
    FontId::proportional(13.0)
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_FIELD;

    let rounding = Rounding::same(4.0);
    let states = [
        (&mut visuals.widgets.noninteractive, BG_PANEL, BORDER_SUBTLE, TEXT_SECONDARY),
        (&mut visuals.widgets.inactive, Color32::from_rgb(42, 44, 56), BORDER_SUBTLE, TEXT_PRIMARY),
        (&mut visuals.widgets.hovered, Color32::from_rgb(52, 54, 68), ACCENT, TEXT_PRIMARY),
        (&mut visuals.widgets.active, Color32::from_rgb(60, 62, 76), ACCENT, Color32::WHITE),
        (&mut visuals.widgets.open, Color32::from_rgb(50, 52, 66), ACCENT, TEXT_PRIMARY),
    ];
    for (widget, fill, border, text) in states {
        widget.bg_fill = fill;
        widget.weak_bg_fill = fill;
        widget.bg_stroke = Stroke::new(1.0, border);
        widget.fg_stroke = Stroke::new(1.0, text);
        widget.rounding = rounding;
    }

    visuals.selection.bg_fill = Color32::from_rgba_premultiplied(80, 140, 220, 45);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.striped = false;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
