//! Lafz application shell.
//!
//! Wires the core model to the window: clipboard, OS hotkeys, the
//! update checker, and the egui UI.

mod app;
mod clipboard;
mod fonts;
mod hotkeys;
mod ui;
mod updater;

pub use app::LafzApp;

/// The running version, compared against the published version marker.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Window title.
pub const APP_NAME: &str = "Lafz";

/// Open the window and run until close.
pub fn run() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "lafz",
        options,
        Box::new(|cc| Ok(Box::new(LafzApp::new(cc)))),
    )
}
