//! The settings modal: theme, the master switch, and the shortcut table.

use super::{UiAction, UiEnv, UiState};
use egui::{Align2, CornerRadius, CursorIcon, FontId, Key, RichText, Sense, Stroke, StrokeKind, vec2};
use egui_extras::{Column, TableBuilder};
use lafz_core::{Capture, Theme, catalog};
use lafz_widgets::{
    ChordButton, DARK, LIGHT, NavButton, Palette, panel_frame, section_label, sizing,
    toggle_switch,
};

const DESCRIPTION: &str = "Click on a shortcut to change it. Press Option + your desired key.";
const MASTER_LABEL: &str = "Enable global shortcuts (work outside the app)";
const RECORDING_PROMPT: &str = "Press Option + key...";
const UNAVAILABLE_HINT: &str = "Global shortcuts are not available on this system.";

pub(crate) fn settings_modal(
    ctx: &egui::Context,
    state: &mut UiState,
    env: &UiEnv<'_>,
    actions: &mut Vec<UiAction>,
) {
    let palette = env.palette;
    let UiState {
        draft,
        recorder,
        conflict_warning,
        ..
    } = state;
    let Some(draft) = draft.as_mut() else {
        return;
    };

    // Feed Alt-chorded presses to the recorder before drawing, so a
    // committed key shows up in the same frame.
    if recorder.recording().is_some() {
        let codes: Vec<String> = ctx.input(|i| i.events.iter().filter_map(alt_chord_code).collect());
        for code in codes {
            match recorder.capture(&code, &draft.shortcuts) {
                Capture::Committed { id, code } => {
                    if let Some(binding) = draft.shortcuts.iter_mut().find(|b| b.id == id) {
                        binding.assign(&code);
                    }
                    *conflict_warning = None;
                }
                Capture::Conflict { .. } => {
                    *conflict_warning = Some(super::CONFLICT_MESSAGE.to_string());
                }
                Capture::Ignored | Capture::NotRecording => {}
            }
        }
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            recorder.cancel();
        }
    }

    egui::Window::new("settings-modal")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
        .frame(panel_frame(palette))
        .show(ctx, |ui| {
            ui.set_width(620.0);

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Settings")
                        .size(18.0)
                        .strong()
                        .color(palette.text),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if NavButton::new("✕", palette).show(ui) {
                        actions.push(UiAction::CancelSettings);
                    }
                });
            });
            ui.add_space(12.0);

            section_label(ui, palette, "Appearance");
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if theme_card(ui, &DARK, "Dark", draft.theme == Theme::Dark) {
                    draft.theme = Theme::Dark;
                }
                if theme_card(ui, &LIGHT, "Light", draft.theme == Theme::Light) {
                    draft.theme = Theme::Light;
                }
            });
            ui.add_space(16.0);

            section_label(ui, palette, "Keyboard Shortcuts");
            ui.add_space(4.0);
            ui.label(
                RichText::new(DESCRIPTION)
                    .size(12.0)
                    .color(palette.text_muted),
            );
            if !env.hotkeys_available {
                ui.label(
                    RichText::new(UNAVAILABLE_HINT)
                        .size(12.0)
                        .color(palette.warn),
                );
            }
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new(MASTER_LABEL).size(13.0).color(palette.text));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    toggle_switch(ui, palette, &mut draft.global_shortcuts_enabled, true);
                });
            });
            ui.add_space(8.0);

            let master_on = draft.global_shortcuts_enabled;
            TableBuilder::new(ui)
                .striped(true)
                .max_scroll_height(320.0)
                .column(Column::remainder())
                .column(Column::exact(sizing::CHORD_WIDTH + 8.0))
                .column(Column::exact(64.0))
                .header(22.0, |mut header| {
                    header.col(|ui| {
                        ui.label(RichText::new("Phrase").size(12.0).color(palette.text_muted));
                    });
                    header.col(|ui| {
                        ui.label(RichText::new("Shortcut").size(12.0).color(palette.text_muted));
                    });
                    header.col(|ui| {
                        ui.label(RichText::new("Global").size(12.0).color(palette.text_muted));
                    });
                })
                .body(|body| {
                    body.rows(40.0, draft.shortcuts.len(), |mut row| {
                        let idx = row.index();
                        row.col(|ui| {
                            if let Some(entry) = catalog::phrase(idx) {
                                ui.label(
                                    RichText::new(entry.phrase).size(17.0).color(palette.text),
                                );
                            }
                        });
                        row.col(|ui| {
                            let binding = &draft.shortcuts[idx];
                            let recording = recorder.recording() == Some(binding.id);
                            let text = if recording {
                                RECORDING_PROMPT.to_string()
                            } else if binding.key.is_some() {
                                format!("\u{2325} {}", binding.label)
                            } else {
                                "Not set".to_string()
                            };
                            if ChordButton::new(&text, palette).recording(recording).show(ui) {
                                recorder.toggle(binding.id);
                                *conflict_warning = None;
                            }
                        });
                        row.col(|ui| {
                            let binding = &mut draft.shortcuts[idx];
                            toggle_switch(ui, palette, &mut binding.global, master_on);
                        });
                    });
                });

            if let Some(warning) = conflict_warning.as_deref() {
                ui.add_space(6.0);
                ui.label(RichText::new(warning).size(12.0).color(palette.warn));
            }
            ui.add_space(14.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if NavButton::new("Save", palette)
                    .primary(true)
                    .min_width(90.0)
                    .show(ui)
                {
                    actions.push(UiAction::SaveSettings);
                }
                ui.add_space(8.0);
                if NavButton::new("Cancel", palette).min_width(90.0).show(ui) {
                    actions.push(UiAction::CancelSettings);
                }
            });
        });
}

/// A theme choice drawn in its own palette, so the card previews what
/// picking it looks like.
fn theme_card(ui: &mut egui::Ui, preview: &Palette, label: &str, selected: bool) -> bool {
    let (rect, response) = ui.allocate_exact_size(vec2(96.0, 44.0), Sense::click());
    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(
            rect,
            CornerRadius::same(sizing::CORNER_RADIUS),
            preview.window_bg,
        );
        let stroke = if selected {
            Stroke::new(2.0, preview.accent)
        } else {
            Stroke::new(1.0, preview.border)
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
            label,
            FontId::proportional(13.0),
            preview.text,
        );
    }
    response.on_hover_cursor(CursorIcon::PointingHand).clicked()
}

/// Extract the stored key code from an Alt-chorded press event.
fn alt_chord_code(event: &egui::Event) -> Option<String> {
    let egui::Event::Key {
        key,
        physical_key,
        pressed: true,
        repeat: false,
        modifiers,
    } = event
    else {
        return None;
    };
    if !modifiers.alt {
        return None;
    }
    super::key_code(physical_key.unwrap_or(*key)).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Modifiers;

    fn key_event(key: Key, physical: Option<Key>, modifiers: Modifiers, pressed: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: physical,
            pressed,
            repeat: false,
            modifiers,
        }
    }

    #[test]
    fn test_alt_chord_extraction() {
        let event = key_event(Key::Num1, Some(Key::Num1), Modifiers::ALT, true);
        assert_eq!(alt_chord_code(&event).as_deref(), Some("Digit1"));
    }

    #[test]
    fn test_plain_press_rejected() {
        let event = key_event(Key::Num1, Some(Key::Num1), Modifiers::NONE, true);
        assert_eq!(alt_chord_code(&event), None);
    }

    #[test]
    fn test_release_rejected() {
        let event = key_event(Key::A, Some(Key::A), Modifiers::ALT, false);
        assert_eq!(alt_chord_code(&event), None);
    }

    #[test]
    fn test_physical_key_wins() {
        // Alt-composed logical characters resolve against the struck key.
        let event = key_event(Key::L, Some(Key::Num3), Modifiers::ALT, true);
        assert_eq!(alt_chord_code(&event).as_deref(), Some("Digit3"));
    }

    #[test]
    fn test_unmapped_physical_key() {
        let event = key_event(Key::F7, None, Modifiers::ALT, true);
        assert_eq!(alt_chord_code(&event), None);
    }
}
