//! In-app documentation: what the phrases are and how to copy them.

use super::{UiAction, UiEnv};
use egui::{Align2, RichText, vec2};
use lafz_core::{catalog, settings, update};
use lafz_widgets::{NavButton, panel_frame, section_label, separator};

const INTRO: &str = "Lafz keeps a set of commonly written Arabic honorifics and phrases one \
click away. Pick a phrase from the grid and it lands on your clipboard, ready to paste into \
any document or message.";

const USAGE: &str = "Click any phrase to copy it. Hover over a phrase to see its meaning in \
the bar below the grid. With global shortcuts enabled in Settings, the key chords listed \
here copy a phrase even while another application has focus.";

pub(crate) fn docs_modal(ctx: &egui::Context, env: &UiEnv<'_>, actions: &mut Vec<UiAction>) {
    let palette = env.palette;

    egui::Window::new("docs-modal")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
        .frame(panel_frame(palette))
        .show(ctx, |ui| {
            ui.set_width(640.0);

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Lafz")
                        .size(20.0)
                        .strong()
                        .color(palette.text),
                );
                ui.label(
                    RichText::new("Documentation")
                        .size(13.0)
                        .color(palette.text_muted),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if NavButton::new("✕", palette).show(ui) {
                        actions.push(UiAction::CloseDocs);
                    }
                });
            });
            ui.add_space(10.0);

            egui::ScrollArea::vertical()
                .max_height(480.0)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    section_label(ui, palette, "What is it?");
                    ui.add_space(4.0);
                    ui.label(RichText::new(INTRO).size(13.0).color(palette.text));
                    ui.add_space(12.0);

                    section_label(ui, palette, "How to Use");
                    ui.add_space(4.0);
                    ui.label(RichText::new(USAGE).size(13.0).color(palette.text));
                    ui.add_space(12.0);

                    section_label(ui, palette, "Default Shortcuts");
                    ui.add_space(4.0);
                    egui::Grid::new("docs-shortcuts")
                        .num_columns(2)
                        .spacing([24.0, 6.0])
                        .show(ui, |ui| {
                            for binding in settings::default_bindings() {
                                let Some(entry) = catalog::phrase(binding.id) else {
                                    continue;
                                };
                                if binding.key.is_none() {
                                    continue;
                                }
                                ui.label(
                                    RichText::new(format!("\u{2325} {}", binding.label))
                                        .size(13.0)
                                        .monospace()
                                        .color(palette.accent),
                                );
                                ui.label(
                                    RichText::new(entry.phrase).size(16.0).color(palette.text),
                                );
                                ui.end_row();
                            }
                        });
                    ui.add_space(12.0);

                    section_label(ui, palette, "Phrases");
                    ui.add_space(4.0);
                    egui::Grid::new("docs-phrases")
                        .num_columns(2)
                        .spacing([24.0, 6.0])
                        .show(ui, |ui| {
                            for entry in catalog::CATALOG {
                                ui.label(
                                    RichText::new(entry.phrase).size(16.0).color(palette.text),
                                );
                                ui.label(
                                    RichText::new(entry.meaning)
                                        .size(12.0)
                                        .color(palette.text_muted),
                                );
                                ui.end_row();
                            }
                        });
                    ui.add_space(12.0);

                    separator(ui, palette);
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("Version {}", env.version))
                                .size(12.0)
                                .color(palette.text_muted),
                        );
                        ui.hyperlink_to(
                            RichText::new("Source and releases").size(12.0),
                            update::REPO_URL,
                        );
                    });
                });
        });
}
