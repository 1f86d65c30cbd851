//! Button components: phrase tiles, chord buttons, nav buttons.

use egui::{
    Align2, CornerRadius, CursorIcon, FontId, Response, Sense, Stroke, StrokeKind, Ui, vec2,
};

use crate::{Palette, sizing};

/// A clickable tile showing one Arabic phrase.
///
/// Symbols render larger than full phrases, and the full-width variant
/// stretches across the row. The caller reads hover and click off the
/// returned response.
pub struct PhraseTile<'a> {
    text: &'a str,
    palette: &'a Palette,
    symbol: bool,
    full_width: bool,
}

impl<'a> PhraseTile<'a> {
    pub fn new(text: &'a str, palette: &'a Palette) -> Self {
        Self {
            text,
            palette,
            symbol: false,
            full_width: false,
        }
    }

    /// Render with the large single-ligature font.
    pub fn symbol(mut self, symbol: bool) -> Self {
        self.symbol = symbol;
        self
    }

    /// Stretch across the available width.
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Show the tile.
    pub fn show(self, ui: &mut Ui) -> Response {
        let size = if self.full_width {
            vec2(ui.available_width(), sizing::BASMALA_HEIGHT)
        } else {
            vec2(sizing::TILE_WIDTH, sizing::TILE_HEIGHT)
        };
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                self.palette.hover_bg
            } else {
                self.palette.tile_bg
            };
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter().rect_stroke(
                rect,
                CornerRadius::same(sizing::CORNER_RADIUS),
                Stroke::new(1.0, self.palette.border),
                StrokeKind::Inside,
            );

            let font_size = if self.full_width {
                sizing::BASMALA_FONT
            } else if self.symbol {
                sizing::SYMBOL_FONT
            } else {
                sizing::PHRASE_FONT
            };
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.text,
                FontId::proportional(font_size),
                self.palette.text,
            );
        }

        response.on_hover_cursor(CursorIcon::PointingHand)
    }
}

/// The shortcut cell in the settings table. Shows the current chord, or
/// the recording prompt while waiting for a key.
pub struct ChordButton<'a> {
    text: &'a str,
    palette: &'a Palette,
    recording: bool,
}

impl<'a> ChordButton<'a> {
    pub fn new(text: &'a str, palette: &'a Palette) -> Self {
        Self {
            text,
            palette,
            recording: false,
        }
    }

    /// Style as actively recording.
    pub fn recording(mut self, recording: bool) -> Self {
        self.recording = recording;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let size = vec2(sizing::CHORD_WIDTH, sizing::CHORD_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let (bg_color, text_color) = if self.recording {
                (self.palette.panel_bg, self.palette.accent)
            } else if response.hovered() {
                (self.palette.hover_bg, self.palette.text)
            } else {
                (self.palette.tile_bg, self.palette.text)
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            let stroke = if self.recording {
                Stroke::new(1.5, self.palette.accent)
            } else {
                Stroke::new(1.0, self.palette.border)
            };
            ui.painter().rect_stroke(
                rect,
                CornerRadius::same(sizing::CORNER_RADIUS),
                stroke,
                StrokeKind::Inside,
            );
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.text,
                FontId::proportional(13.0),
                text_color,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// A plain text button for the header, footer, and modal actions.
pub struct NavButton<'a> {
    label: &'a str,
    palette: &'a Palette,
    primary: bool,
    enabled: bool,
    min_width: Option<f32>,
}

impl<'a> NavButton<'a> {
    pub fn new(label: &'a str, palette: &'a Palette) -> Self {
        Self {
            label,
            palette,
            primary: false,
            enabled: true,
            min_width: None,
        }
    }

    /// Fill with the accent color.
    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set minimum width.
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = FontId::proportional(13.0);
        let galley =
            ui.painter()
                .layout_no_wrap(self.label.to_string(), font_id.clone(), self.palette.text);
        let text_width = galley.size().x;
        let width = self
            .min_width
            .unwrap_or(text_width + 24.0)
            .max(text_width + 24.0);
        let (rect, response) = ui.allocate_exact_size(
            vec2(width, 28.0),
            if self.enabled {
                Sense::click()
            } else {
                Sense::hover()
            },
        );

        if ui.is_rect_visible(rect) {
            let (bg_color, text_color) = if !self.enabled {
                (self.palette.tile_bg, self.palette.text_muted)
            } else if self.primary {
                let bg = if response.hovered() {
                    self.palette.accent.gamma_multiply(0.85)
                } else {
                    self.palette.accent
                };
                (bg, self.palette.accent_text)
            } else if response.hovered() {
                (self.palette.hover_bg, self.palette.text)
            } else {
                (self.palette.tile_bg, self.palette.text)
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            if !self.primary {
                ui.painter().rect_stroke(
                    rect,
                    CornerRadius::same(sizing::CORNER_RADIUS),
                    Stroke::new(1.0, self.palette.border),
                    StrokeKind::Inside,
                );
            }
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                font_id,
                text_color,
            );
        }

        let clicked = response.clicked();
        if self.enabled {
            response.on_hover_cursor(CursorIcon::PointingHand);
        }
        self.enabled && clicked
    }
}
