//! UI composition: chrome, the phrase grid, and the modals.

mod docs;
mod grid;
mod settings;

use egui::{Align2, Key, RichText, vec2};
use lafz_core::{Notice, NoticeKind, PhraseId, ShortcutRecorder, Settings};
use lafz_widgets::{NavButton, Palette, panel_frame, toast_frame};

/// Everything the view layer mutates while drawing one frame.
#[derive(Default)]
pub struct UiState {
    /// Meaning text for the tile under the cursor, refreshed every frame.
    pub hovered_meaning: Option<&'static str>,
    /// Whether the settings modal is open.
    pub settings_open: bool,
    /// Working copy edited by the settings modal; live only while open.
    pub draft: Option<Settings>,
    /// Recorder for the working copy's shortcut table.
    pub recorder: ShortcutRecorder,
    /// Conflict warning under the shortcut table.
    pub conflict_warning: Option<String>,
    /// Whether the documentation modal is open.
    pub docs_open: bool,
    /// Remote version to offer, while the update prompt is up.
    pub update_available: Option<String>,
}

/// Actions the view hands back to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Copy a phrase to the clipboard.
    CopyPhrase(PhraseId),
    /// Open the settings modal with a fresh working copy.
    OpenSettings,
    /// Commit the working copy: persist and re-register hotkeys.
    SaveSettings,
    /// Discard the working copy and close the modal.
    CancelSettings,
    /// Open the documentation modal.
    OpenDocs,
    /// Close the documentation modal.
    CloseDocs,
    /// Open the project page in the browser.
    OpenAbout,
    /// Start a background update check.
    CheckForUpdates,
    /// Open the releases page and dismiss the update prompt.
    OpenReleases,
    /// Dismiss the update prompt.
    DismissUpdate,
}

/// Read-only app state the view needs each frame.
pub struct UiEnv<'a> {
    pub palette: &'a Palette,
    /// The visible notice, if one is up.
    pub notice: Option<&'a Notice>,
    /// Whether the OS hotkey backend came up at startup.
    pub hotkeys_available: bool,
    /// Whether an update check is running.
    pub checking_updates: bool,
    pub version: &'a str,
}

const HOVER_HINT: &str = "Hover over a phrase to see its meaning";

/// Shown under the shortcut table when a key is already taken.
pub(crate) const CONFLICT_MESSAGE: &str = "This key is already assigned to another phrase.";

/// Draw one frame and collect the actions it produced.
pub fn render(ctx: &egui::Context, state: &mut UiState, env: &UiEnv<'_>) -> Vec<UiAction> {
    let mut actions = Vec::new();
    let palette = env.palette;

    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::new()
                .fill(palette.window_bg)
                .inner_margin(egui::Margin::symmetric(16, 10)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if NavButton::new("Documentation", palette).show(ui) {
                    actions.push(UiAction::OpenDocs);
                }
                if NavButton::new("About This App", palette).show(ui) {
                    actions.push(UiAction::OpenAbout);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if NavButton::new("Settings", palette).show(ui) {
                        actions.push(UiAction::OpenSettings);
                    }
                });
            });
        });

    egui::TopBottomPanel::bottom("footer")
        .frame(
            egui::Frame::new()
                .fill(palette.window_bg)
                .inner_margin(egui::Margin::symmetric(16, 10)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Made by the Lafz contributors")
                        .size(12.0)
                        .color(palette.text_muted),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if env.checking_updates {
                        "Checking..."
                    } else {
                        "Check for Updates"
                    };
                    if NavButton::new(label, palette)
                        .enabled(!env.checking_updates)
                        .show(ui)
                    {
                        actions.push(UiAction::CheckForUpdates);
                    }
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new(format!("Version {}", env.version))
                            .size(12.0)
                            .color(palette.text_muted),
                    );
                });
            });
        });

    egui::CentralPanel::default()
        .frame(
            egui::Frame::new()
                .fill(palette.window_bg)
                .inner_margin(egui::Margin::symmetric(24, 16)),
        )
        .show(ctx, |ui| {
            state.hovered_meaning = None;
            // Keep a strip below the grid for the meaning bar.
            let grid_height = (ui.available_height() - 44.0).max(0.0);
            egui::ScrollArea::vertical()
                .auto_shrink([false, true])
                .max_height(grid_height)
                .show(ui, |ui| {
                    grid::phrase_grid(ui, env, state, &mut actions);
                });

            ui.add_space(12.0);
            let meaning = state.hovered_meaning.unwrap_or(HOVER_HINT);
            let color = if state.hovered_meaning.is_some() {
                palette.text
            } else {
                palette.text_muted
            };
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(meaning).size(15.0).color(color));
            });
        });

    if let Some(notice) = env.notice {
        toast(ctx, palette, notice);
    }

    if state.update_available.is_some() {
        update_prompt(ctx, state, env, &mut actions);
    }

    if state.settings_open {
        settings::settings_modal(ctx, state, env, &mut actions);
    }

    if state.docs_open {
        docs::docs_modal(ctx, env, &mut actions);
    }

    actions
}

fn toast(ctx: &egui::Context, palette: &Palette, notice: &Notice) {
    let color = match notice.kind {
        NoticeKind::Status => palette.text,
        NoticeKind::HotkeyFired => palette.text,
        NoticeKind::UpdateError => palette.warn,
    };
    egui::Area::new(egui::Id::new("notice-toast"))
        .anchor(Align2::CENTER_BOTTOM, vec2(0.0, -56.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            toast_frame(palette).show(ui, |ui| {
                ui.label(RichText::new(notice.message.as_str()).size(14.0).color(color));
            });
        });
}

fn update_prompt(
    ctx: &egui::Context,
    state: &mut UiState,
    env: &UiEnv<'_>,
    actions: &mut Vec<UiAction>,
) {
    let palette = env.palette;
    let Some(remote) = state.update_available.clone() else {
        return;
    };
    egui::Window::new("update-prompt")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
        .frame(panel_frame(palette))
        .show(ctx, |ui| {
            ui.set_width(360.0);
            ui.label(
                RichText::new("Update available")
                    .size(16.0)
                    .strong()
                    .color(palette.text),
            );
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!(
                    "A new version of Lafz is available ({remote}). Download it from the releases page."
                ))
                .size(13.0)
                .color(palette.text_muted),
            );
            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if NavButton::new("View releases", palette).primary(true).show(ui) {
                    actions.push(UiAction::OpenReleases);
                }
                ui.add_space(8.0);
                if NavButton::new("Not now", palette).show(ui) {
                    actions.push(UiAction::DismissUpdate);
                }
            });
        });
}

/// Map an egui key to the W3C code string stored in settings. Uses the
/// physical key when the event carries one, so Alt-composed characters
/// on macOS still resolve to the key that was struck.
pub(crate) fn key_code(key: Key) -> Option<&'static str> {
    let code = match key {
        Key::Num0 => "Digit0",
        Key::Num1 => "Digit1",
        Key::Num2 => "Digit2",
        Key::Num3 => "Digit3",
        Key::Num4 => "Digit4",
        Key::Num5 => "Digit5",
        Key::Num6 => "Digit6",
        Key::Num7 => "Digit7",
        Key::Num8 => "Digit8",
        Key::Num9 => "Digit9",
        Key::A => "KeyA",
        Key::B => "KeyB",
        Key::C => "KeyC",
        Key::D => "KeyD",
        Key::E => "KeyE",
        Key::F => "KeyF",
        Key::G => "KeyG",
        Key::H => "KeyH",
        Key::I => "KeyI",
        Key::J => "KeyJ",
        Key::K => "KeyK",
        Key::L => "KeyL",
        Key::M => "KeyM",
        Key::N => "KeyN",
        Key::O => "KeyO",
        Key::P => "KeyP",
        Key::Q => "KeyQ",
        Key::R => "KeyR",
        Key::S => "KeyS",
        Key::T => "KeyT",
        Key::U => "KeyU",
        Key::V => "KeyV",
        Key::W => "KeyW",
        Key::X => "KeyX",
        Key::Y => "KeyY",
        Key::Z => "KeyZ",
        Key::Minus => "Minus",
        Key::Equals => "Equal",
        Key::OpenBracket => "BracketLeft",
        Key::CloseBracket => "BracketRight",
        Key::Semicolon => "Semicolon",
        Key::Quote => "Quote",
        Key::Backtick => "Backquote",
        Key::Comma => "Comma",
        Key::Period => "Period",
        Key::Slash => "Slash",
        Key::Backslash => "Backslash",
        _ => return None,
    };
    Some(code)
}
