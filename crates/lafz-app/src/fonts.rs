//! Arabic font installation.
//!
//! egui's bundled fonts carry no Arabic coverage, so a system font with
//! the Arabic block is appended as a fallback at startup. Failing to
//! find one is survivable; the app still runs, just with tofu tiles.

use egui::{FontData, FontDefinitions, FontFamily};
use std::path::PathBuf;
use std::sync::Arc;

const FONT_NAME: &str = "arabic-fallback";

/// Install the first usable Arabic-capable font into the egui context.
pub fn install(ctx: &egui::Context) {
    let mut definitions = FontDefinitions::default();

    match load_arabic_font() {
        Some((path, data)) => {
            definitions
                .font_data
                .insert(FONT_NAME.to_string(), Arc::new(FontData::from_owned(data)));
            if let Some(family) = definitions.families.get_mut(&FontFamily::Proportional) {
                family.push(FONT_NAME.to_string());
            }
            if let Some(family) = definitions.families.get_mut(&FontFamily::Monospace) {
                family.push(FONT_NAME.to_string());
            }
            log::info!("Arabic fallback font installed from {}", path.display());
        }
        None => {
            log::warn!("No Arabic-capable font found; phrases may not render");
        }
    }

    ctx.set_fonts(definitions);
}

/// Probe well-known font locations. Collections (.ttc) are skipped since
/// the glyph loader only takes single-font files.
fn load_arabic_font() -> Option<(PathBuf, Vec<u8>)> {
    let mut candidates: Vec<PathBuf> = Vec::new();

    #[cfg(target_os = "macos")]
    {
        candidates.push(PathBuf::from("/Library/Fonts/Arial Unicode.ttf"));
        candidates.push(PathBuf::from(
            "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
        ));
        candidates.push(PathBuf::from("/System/Library/Fonts/Supplemental/Arial.ttf"));
    }

    #[cfg(target_os = "windows")]
    {
        candidates.push(PathBuf::from(r"C:\Windows\Fonts\tahoma.ttf"));
        candidates.push(PathBuf::from(r"C:\Windows\Fonts\segoeui.ttf"));
        candidates.push(PathBuf::from(r"C:\Windows\Fonts\arial.ttf"));
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        candidates.push(PathBuf::from(
            "/usr/share/fonts/truetype/noto/NotoNaskhArabic-Regular.ttf",
        ));
        candidates.push(PathBuf::from(
            "/usr/share/fonts/truetype/noto/NotoSansArabic-Regular.ttf",
        ));
        candidates.push(PathBuf::from(
            "/usr/share/fonts/noto/NotoSansArabic-Regular.ttf",
        ));
        candidates.push(PathBuf::from(
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        ));
        candidates.push(PathBuf::from("/usr/share/fonts/TTF/DejaVuSans.ttf"));
    }

    for path in candidates {
        if !path.is_file() {
            continue;
        }
        match std::fs::read(&path) {
            Ok(data) => return Some((path, data)),
            Err(e) => log::warn!("Failed to read font {}: {}", path.display(), e),
        }
    }
    None
}
