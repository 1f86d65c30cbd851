//! An animated on/off switch.

use egui::{CornerRadius, CursorIcon, Response, Sense, Stroke, Ui, vec2};

use crate::{Palette, sizing};

/// Draw a toggle switch bound to `on`.
///
/// A disabled switch still shows its state but ignores clicks and skips
/// the pointer cursor. The returned response reports `changed` when the
/// value flipped this frame.
pub fn toggle_switch(ui: &mut Ui, palette: &Palette, on: &mut bool, enabled: bool) -> Response {
    let size = vec2(sizing::TOGGLE_WIDTH, sizing::TOGGLE_HEIGHT);
    let sense = if enabled {
        Sense::click()
    } else {
        Sense::hover()
    };
    let (rect, mut response) = ui.allocate_exact_size(size, sense);

    if enabled && response.clicked() {
        *on = !*on;
        response.mark_changed();
    }

    if ui.is_rect_visible(rect) {
        let how_on = ui.ctx().animate_bool(response.id, *on);
        let radius = rect.height() / 2.0;

        let off_color = egui::Rgba::from(palette.hover_bg);
        let on_color = egui::Rgba::from(palette.accent);
        let mut track: egui::Color32 = egui::lerp(off_color..=on_color, how_on).into();
        let mut knob = palette.accent_text;
        if !enabled {
            track = track.gamma_multiply(0.5);
            knob = knob.gamma_multiply(0.5);
        }

        ui.painter()
            .rect_filled(rect, CornerRadius::same(radius as u8), track);
        let knob_x = egui::lerp(
            (rect.left() + radius)..=(rect.right() - radius),
            how_on,
        );
        let center = egui::pos2(knob_x, rect.center().y);
        ui.painter()
            .circle(center, radius - 3.0, knob, Stroke::NONE);
    }

    if enabled {
        response = response.on_hover_cursor(CursorIcon::PointingHand);
    }
    response
}
