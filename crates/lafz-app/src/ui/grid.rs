//! The phrase grid.

use super::{UiAction, UiEnv, UiState};
use egui::{Ui, vec2};
use lafz_core::{CATALOG, PhraseEntry, PhraseId};
use lafz_widgets::{PhraseTile, sizing};

/// Lay the catalog out as centered rows of tiles, with the Basmala on a
/// full-width row of its own. Hover feeds the meaning bar; clicks become
/// copy actions.
pub(crate) fn phrase_grid(
    ui: &mut Ui,
    env: &UiEnv<'_>,
    state: &mut UiState,
    actions: &mut Vec<UiAction>,
) {
    let palette = env.palette;
    let spacing = 14.0;
    ui.spacing_mut().item_spacing = vec2(spacing, spacing);

    let columns = ((ui.available_width() + spacing) / (sizing::TILE_WIDTH + spacing))
        .floor()
        .max(1.0) as usize;

    let regular: Vec<(PhraseId, &PhraseEntry)> = CATALOG
        .iter()
        .enumerate()
        .filter(|(_, entry)| !entry.is_basmala())
        .collect();

    for chunk in regular.chunks(columns) {
        let row_width = chunk.len() as f32 * (sizing::TILE_WIDTH + spacing) - spacing;
        ui.horizontal(|ui| {
            let indent = ((ui.available_width() - row_width) / 2.0).max(0.0);
            ui.add_space(indent);
            for &(id, entry) in chunk {
                let response = PhraseTile::new(entry.phrase, palette)
                    .symbol(entry.is_symbol())
                    .show(ui);
                if response.hovered() {
                    state.hovered_meaning = Some(entry.meaning);
                }
                if response.clicked() {
                    actions.push(UiAction::CopyPhrase(id));
                }
            }
        });
    }

    for (id, entry) in CATALOG.iter().enumerate() {
        if !entry.is_basmala() {
            continue;
        }
        let response = PhraseTile::new(entry.phrase, palette)
            .symbol(true)
            .full_width(true)
            .show(ui);
        if response.hovered() {
            state.hovered_meaning = Some(entry.meaning);
        }
        if response.clicked() {
            actions.push(UiAction::CopyPhrase(id));
        }
    }
}
