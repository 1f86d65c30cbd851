//! Reusable egui widget components for the Lafz UI.
//!
//! This crate provides the styled pieces the app is assembled from:
//!
//! - **Buttons**: phrase tiles, chord buttons, nav/footer buttons
//! - **Toggle**: the animated on/off switch used in settings
//! - **Layout**: section labels, separators, panel frames
//!
//! Everything takes a [`Palette`] so the app can restyle the whole
//! window when the theme changes.

pub mod buttons;
pub mod layout;
pub mod toggle;

pub use buttons::{ChordButton, NavButton, PhraseTile};
pub use layout::{panel_frame, section_label, separator, toast_frame};
pub use toggle::toggle_switch;

use egui::Color32;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Phrase tile width.
    pub const TILE_WIDTH: f32 = 230.0;
    /// Phrase tile height.
    pub const TILE_HEIGHT: f32 = 104.0;
    /// Height of the full-width Basmala tile.
    pub const BASMALA_HEIGHT: f32 = 128.0;
    /// Minimum chord button width, so the table doesn't jitter while recording.
    pub const CHORD_WIDTH: f32 = 170.0;
    /// Chord button height.
    pub const CHORD_HEIGHT: f32 = 26.0;
    /// Toggle switch track size.
    pub const TOGGLE_WIDTH: f32 = 40.0;
    pub const TOGGLE_HEIGHT: f32 = 22.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 6;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 10;
    /// Font size for regular phrase text.
    pub const PHRASE_FONT: f32 = 26.0;
    /// Font size for single-ligature tiles.
    pub const SYMBOL_FONT: f32 = 46.0;
    /// Font size for the Basmala tile.
    pub const BASMALA_FONT: f32 = 54.0;
}

/// Full color scheme for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// True for the dark palette; picks the egui visuals baseline.
    pub dark: bool,
    /// Window background.
    pub window_bg: Color32,
    /// Raised surfaces: modals, toasts, the settings table.
    pub panel_bg: Color32,
    /// Phrase tile background.
    pub tile_bg: Color32,
    /// Hovered tile and button background.
    pub hover_bg: Color32,
    /// Primary text.
    pub text: Color32,
    /// Secondary text: meanings, section labels, the version line.
    pub text_muted: Color32,
    /// Interactive highlight: primary buttons, active toggles, recording.
    pub accent: Color32,
    /// Text on accent-filled surfaces.
    pub accent_text: Color32,
    /// Conflict warnings and failure toasts.
    pub warn: Color32,
    /// Hairline borders.
    pub border: Color32,
}

/// The default dark scheme.
pub const DARK: Palette = Palette {
    dark: true,
    window_bg: Color32::from_rgb(0x1b, 0x1c, 0x27),
    panel_bg: Color32::from_rgb(0x24, 0x25, 0x33),
    tile_bg: Color32::from_rgb(0x28, 0x2a, 0x3a),
    hover_bg: Color32::from_rgb(0x39, 0x3c, 0x4f),
    text: Color32::from_rgb(0xff, 0xff, 0xff),
    text_muted: Color32::from_rgb(0x9b, 0x9e, 0xb3),
    accent: Color32::from_rgb(0x3b, 0x82, 0xf6),
    accent_text: Color32::from_rgb(0xff, 0xff, 0xff),
    warn: Color32::from_rgb(0xf5, 0x9e, 0x0b),
    border: Color32::from_rgb(0x34, 0x36, 0x4a),
};

/// The light scheme.
pub const LIGHT: Palette = Palette {
    dark: false,
    window_bg: Color32::from_rgb(0xf5, 0xf5, 0xf7),
    panel_bg: Color32::from_rgb(0xff, 0xff, 0xff),
    tile_bg: Color32::from_rgb(0xea, 0xeb, 0xf0),
    hover_bg: Color32::from_rgb(0xdb, 0xdd, 0xe6),
    text: Color32::from_rgb(0x1b, 0x1c, 0x27),
    text_muted: Color32::from_rgb(0x6b, 0x6e, 0x85),
    accent: Color32::from_rgb(0x2f, 0x6d, 0xe0),
    accent_text: Color32::from_rgb(0xff, 0xff, 0xff),
    warn: Color32::from_rgb(0xb4, 0x69, 0x00),
    border: Color32::from_rgb(0xd6, 0xd7, 0xe0),
};

impl Palette {
    /// Push this palette into the egui style, so stock widgets and
    /// panels pick it up too.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.override_text_color = Some(self.text);
        visuals.panel_fill = self.window_bg;
        visuals.window_fill = self.panel_bg;
        visuals.window_stroke = egui::Stroke::new(1.0, self.border);
        visuals.extreme_bg_color = self.tile_bg;
        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, self.border);
        ctx.set_visuals(visuals);
    }
}
