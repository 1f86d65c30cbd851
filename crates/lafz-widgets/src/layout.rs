//! Layout helpers: separators, section labels, panel frames.

use egui::{Color32, CornerRadius, Frame, Margin, Stroke, Ui};

use crate::{Palette, sizing};

/// Draw a horizontal separator line.
pub fn separator(ui: &mut Ui, palette: &Palette) {
    let rect = ui.available_rect_before_wrap();
    let y = rect.top() + 4.0;
    ui.painter().line_segment(
        [
            egui::Pos2::new(rect.left(), y),
            egui::Pos2::new(rect.right(), y),
        ],
        Stroke::new(1.0, palette.border),
    );
    ui.add_space(10.0);
}

/// Draw a section heading (small, muted text).
pub fn section_label(ui: &mut Ui, palette: &Palette, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(12.0)
            .strong()
            .color(palette.text_muted),
    );
}

/// Frame for modal panels.
pub fn panel_frame(palette: &Palette) -> Frame {
    Frame::new()
        .fill(palette.panel_bg)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, palette.border))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 16,
            offset: [0, 4],
            color: Color32::from_black_alpha(60),
        })
        .inner_margin(Margin::same(16))
}

/// Frame for transient toasts.
pub fn toast_frame(palette: &Palette) -> Frame {
    Frame::new()
        .fill(palette.panel_bg)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, palette.border))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 8,
            offset: [0, 2],
            color: Color32::from_black_alpha(40),
        })
        .inner_margin(Margin::symmetric(16, 10))
}
