//! The fixed catalog of Arabic phrases and their meanings.
//!
//! The catalog is ordered and immutable; settings and hotkeys refer to
//! entries by index, so the order is part of the persisted contract.

/// Index of an entry in [`CATALOG`]. Stable across runs.
pub type PhraseId = usize;

/// One catalog entry: the text placed on the clipboard and its meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseEntry {
    /// The Arabic text that gets copied.
    pub phrase: &'static str,
    /// Transliteration and translation shown while hovering.
    pub meaning: &'static str,
}

impl PhraseEntry {
    /// Single-ligature entries (ﷺ, ﷻ, ﷽) render larger than full phrases.
    pub fn is_symbol(&self) -> bool {
        self.phrase.chars().count() <= 2
    }

    /// The Basmala gets a full-width tile of its own.
    pub fn is_basmala(&self) -> bool {
        self.phrase == "\u{fdfd}"
    }
}

/// All phrases, in display order.
pub const CATALOG: &[PhraseEntry] = &[
    PhraseEntry {
        phrase: "ﷺ",
        meaning: "Sallá Allāhu ʿAlayhī wa as-Salam (May Allāh's praise & salutations be upon him)",
    },
    PhraseEntry {
        phrase: "ﷻ",
        meaning: "Jalla Jalāluhu (Exalted is His Majesty)",
    },
    PhraseEntry {
        phrase: "سُبْحَانَهُ وَ تَعَالَى",
        meaning: "Subḥānahu wa Taʾālá (Glorious and Exalted is He)",
    },
    PhraseEntry {
        phrase: "عَزَّ وَ جَلّ",
        meaning: "ʿAzza wa Jal (The Mighty and Majestic)",
    },
    PhraseEntry {
        phrase: "ُرَضِيَ الله عَنْه",
        meaning: "Raḍī Allāhu ʿAnhu (May Allāh be pleased with him)",
    },
    PhraseEntry {
        phrase: "رَضِيَ اللهُ عَنْهَا",
        meaning: "Raḍī Allāhu ʿAnhā (May Allāh be pleased with her)",
    },
    PhraseEntry {
        phrase: "رَحِمَهُ الله",
        meaning: "Raḥimahullāh (May Allah have mercy on him)",
    },
    PhraseEntry {
        phrase: "حَفِظَهُ الله",
        meaning: "Ḥafiẓahullāh (May Allah preserve him)",
    },
    PhraseEntry {
        phrase: "عَلَيْهِ السَّلام",
        meaning: "ʿAlayhī as-Salām (Peace be upon him)",
    },
    PhraseEntry {
        phrase: "الحَمْدُ لله",
        meaning: "Alḥamdulillāh (All praises and thanks are due to Allāh)",
    },
    PhraseEntry {
        phrase: "جَزَاكَ اللهُ خَيْرَاً",
        meaning: "Jazāk Allāhu Khairan (May Allāh give you good)",
    },
    PhraseEntry {
        phrase: "بَارَكَ اللهُ فِيكَ",
        meaning: "Bārak Allāhu Fīk (May Allāh bless you)",
    },
    PhraseEntry {
        phrase: "السَّلَامُ عَلَيْكُم",
        meaning: "As Salāmu 'Alaikum (Peace be upon you)",
    },
    PhraseEntry {
        phrase: "إِن شَاءَ الله",
        meaning: "ʾIn shāʾ Allāh (If Allāh wills)",
    },
    PhraseEntry {
        phrase: "رَضِيَ اللهُ عَنْهُمَا",
        meaning: "Raḍī Allāhu ʿAnhumā (May Allāh be pleased with them)",
    },
    PhraseEntry {
        phrase: "﷽",
        meaning: "Bismillāh ir-Raḥmān ir-Raḥīm",
    },
];

/// Look up an entry by id. Out-of-range ids yield `None`.
pub fn phrase(id: PhraseId) -> Option<&'static PhraseEntry> {
    CATALOG.get(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_order() {
        assert_eq!(CATALOG.len(), 16);
        assert_eq!(CATALOG[0].phrase, "ﷺ");
        assert!(CATALOG[15].is_basmala());
    }

    #[test]
    fn test_symbol_classification() {
        assert!(CATALOG[0].is_symbol());
        assert!(CATALOG[1].is_symbol());
        assert!(CATALOG[15].is_symbol());
        assert!(!CATALOG[2].is_symbol());
        assert!(!CATALOG[2].is_basmala());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(phrase(1).map(|e| e.phrase), Some("ﷻ"));
        assert!(phrase(CATALOG.len()).is_none());
    }

    #[test]
    fn test_meanings_nonempty() {
        for entry in CATALOG {
            assert!(!entry.meaning.is_empty());
        }
    }
}
