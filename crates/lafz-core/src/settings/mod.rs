//! User settings: theme, shortcut bindings, and persistence.

mod file;
mod memory;

pub use file::FileSettingsStore;
pub use memory::MemorySettingsStore;

use crate::catalog::{CATALOG, PhraseId};
use crate::keys;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current settings schema version. Stored files carrying a higher
/// number come from a newer build and are left untouched.
pub const SETTINGS_VERSION: u32 = 1;

/// Default chords for the top keyboard row, assigned to the catalog in order.
/// Entries past this list start out unbound.
const DEFAULT_KEY_ROW: &[&str] = &[
    "Digit1",
    "Digit2",
    "Digit3",
    "Digit4",
    "Digit5",
    "Digit6",
    "Digit7",
    "Digit8",
    "Digit9",
    "Digit0",
    "Minus",
    "Equal",
    "BracketLeft",
    "BracketRight",
];

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Shortcut assignment for one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutBinding {
    /// Catalog index this binding belongs to.
    pub id: PhraseId,
    /// W3C key code completing the Alt chord, if one is assigned.
    pub key: Option<String>,
    /// Display label for `key`; empty when unassigned.
    pub label: String,
    /// Whether the chord should also fire while the app is unfocused.
    pub global: bool,
}

impl ShortcutBinding {
    fn unassigned(id: PhraseId) -> Self {
        Self {
            id,
            key: None,
            label: String::new(),
            global: false,
        }
    }

    /// Bind a key code, deriving its display label.
    pub fn assign(&mut self, code: &str) {
        self.label = keys::key_label(code).unwrap_or(code).to_string();
        self.key = Some(code.to_string());
    }

    /// Remove the key assignment.
    pub fn clear(&mut self) {
        self.key = None;
        self.label.clear();
    }
}

/// The persisted application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Schema version; files from before versioning deserialize as 0.
    #[serde(default)]
    pub version: u32,
    pub theme: Theme,
    /// Master switch. While off, no OS-level registrations exist at all.
    pub global_shortcuts_enabled: bool,
    /// One entry per catalog phrase, in catalog order.
    pub shortcuts: Vec<ShortcutBinding>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            theme: Theme::default(),
            global_shortcuts_enabled: false,
            shortcuts: default_bindings(),
        }
    }
}

/// A key assigned to two phrases at once, found by [`Settings::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("key {key:?} is assigned to phrases {first} and {second}")]
pub struct DuplicateKey {
    pub key: String,
    pub first: PhraseId,
    pub second: PhraseId,
}

impl Settings {
    /// Check that no key is assigned to more than one phrase.
    pub fn validate(&self) -> Result<(), DuplicateKey> {
        for (i, a) in self.shortcuts.iter().enumerate() {
            let Some(key) = a.key.as_deref() else { continue };
            if let Some(b) = self.shortcuts[i + 1..]
                .iter()
                .find(|b| b.key.as_deref() == Some(key))
            {
                return Err(DuplicateKey {
                    key: key.to_string(),
                    first: a.id,
                    second: b.id,
                });
            }
        }
        Ok(())
    }

    /// Repair a loaded value: exactly one binding per catalog entry, in
    /// catalog order. Entries missing from the file get that phrase's
    /// default binding, labels are re-derived from their key codes, and
    /// contested keys are kept only on the first claimant.
    pub fn normalize(&mut self) {
        let defaults = default_bindings();
        let mut table = Vec::with_capacity(CATALOG.len());
        for id in 0..CATALOG.len() {
            let mut binding = match self.shortcuts.iter().find(|b| b.id == id).cloned() {
                Some(binding) => binding,
                None => {
                    let mut fresh = defaults[id].clone();
                    // A stored assignment wins over a filled-in default key.
                    if let Some(code) = fresh.key.as_deref() {
                        if self
                            .shortcuts
                            .iter()
                            .any(|b| b.key.as_deref() == Some(code))
                        {
                            fresh.clear();
                        }
                    }
                    fresh
                }
            };
            match binding.key.clone() {
                Some(code) => binding.assign(&code),
                None => binding.clear(),
            }
            table.push(binding);
        }
        let mut seen: Vec<String> = Vec::new();
        for binding in &mut table {
            if let Some(code) = binding.key.clone() {
                if seen.contains(&code) {
                    binding.clear();
                } else {
                    seen.push(code);
                }
            }
        }
        self.shortcuts = table;
    }

    /// Bring a stored value up to the current schema.
    ///
    /// Version 0 files predate the version field and are shape-compatible;
    /// they only need stamping and repair. Returns `None` for files written
    /// by a newer build, which the caller should not reinterpret.
    pub fn upgrade(mut self) -> Option<Self> {
        if self.version > SETTINGS_VERSION {
            return None;
        }
        self.version = SETTINGS_VERSION;
        self.normalize();
        Some(self)
    }
}

/// The default binding table: number row chords for the first phrases,
/// everything local-only until the user opts in to global shortcuts.
pub fn default_bindings() -> Vec<ShortcutBinding> {
    (0..CATALOG.len())
        .map(|id| {
            let mut binding = ShortcutBinding::unassigned(id);
            if let Some(code) = DEFAULT_KEY_ROW.get(id) {
                binding.assign(code);
            }
            binding
        })
        .collect()
}

/// Settings persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Store error: {0}")]
    Other(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for settings persistence backends.
///
/// Loading never fails: anything missing or unusable falls back to
/// defaults so the app always starts.
pub trait SettingsStore: Send + Sync {
    /// Load settings, or defaults when nothing usable is stored.
    fn load(&self) -> Settings;

    /// Persist settings.
    fn save(&self, settings: &Settings) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.version, SETTINGS_VERSION);
        assert_eq!(settings.theme, Theme::Dark);
        assert!(!settings.global_shortcuts_enabled);
        assert_eq!(settings.shortcuts.len(), CATALOG.len());

        assert_eq!(settings.shortcuts[0].key.as_deref(), Some("Digit1"));
        assert_eq!(settings.shortcuts[0].label, "1");
        assert_eq!(settings.shortcuts[13].key.as_deref(), Some("BracketRight"));
        assert!(settings.shortcuts[14].key.is_none());
        assert!(settings.shortcuts[15].key.is_none());
        assert!(settings.shortcuts.iter().all(|b| !b.global));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains("\"globalShortcutsEnabled\":false"));
        assert!(json.contains("\"theme\":\"dark\""));
        assert!(json.contains("\"version\":1"));
    }

    #[test]
    fn test_round_trip() {
        let mut settings = Settings::default();
        settings.theme = Theme::Light;
        settings.global_shortcuts_enabled = true;
        settings.shortcuts[3].global = true;

        let json = serde_json::to_string_pretty(&settings).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_upgrade_unversioned_file() {
        // Shape written by 1.0 builds: no version, extra fields per binding.
        let json = r#"{
            "theme": "light",
            "globalShortcutsEnabled": true,
            "shortcuts": [
                { "id": 0, "phrase": "X", "key": "KeyA", "label": "A", "global": true }
            ]
        }"#;
        let loaded: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(loaded.version, 0);

        let upgraded = loaded.upgrade().unwrap();
        assert_eq!(upgraded.version, SETTINGS_VERSION);
        assert_eq!(upgraded.theme, Theme::Light);
        assert!(upgraded.global_shortcuts_enabled);
        assert_eq!(upgraded.shortcuts.len(), CATALOG.len());
        assert_eq!(upgraded.shortcuts[0].key.as_deref(), Some("KeyA"));
        assert!(upgraded.shortcuts[0].global);
        // Entries the file never mentioned pick up their defaults.
        assert_eq!(upgraded.shortcuts[1].key.as_deref(), Some("Digit2"));
        assert_eq!(upgraded.shortcuts[1].label, "2");
        assert!(!upgraded.shortcuts[1].global);
        assert!(upgraded.shortcuts[14].key.is_none());
    }

    #[test]
    fn test_normalize_keeps_stored_claim_on_default_keys() {
        // Phrase 5 holds Digit2 in the file and phrase 1 is absent, so
        // phrase 1 must not get Digit2 back as its filled-in default.
        let mut settings = Settings::default();
        settings.shortcuts[5].assign("Digit2");
        settings.shortcuts.remove(1);
        settings.shortcuts.remove(1); // drops old id 2 as well

        settings.normalize();
        assert_eq!(settings.shortcuts.len(), CATALOG.len());
        assert!(settings.shortcuts[1].key.is_none());
        assert_eq!(settings.shortcuts[2].key.as_deref(), Some("Digit3"));
        assert_eq!(settings.shortcuts[5].key.as_deref(), Some("Digit2"));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_upgrade_rejects_newer_schema() {
        let mut settings = Settings::default();
        settings.version = SETTINGS_VERSION + 1;
        assert!(settings.upgrade().is_none());
    }

    #[test]
    fn test_normalize_drops_unknown_ids_and_duplicates() {
        let mut settings = Settings::default();
        settings.shortcuts.push(ShortcutBinding {
            id: CATALOG.len() + 5,
            key: Some("KeyZ".to_string()),
            label: "Z".to_string(),
            global: true,
        });
        // Same key as phrase 0's default.
        settings.shortcuts[4].assign("Digit1");
        settings.normalize();

        assert_eq!(settings.shortcuts.len(), CATALOG.len());
        assert_eq!(settings.shortcuts[0].key.as_deref(), Some("Digit1"));
        assert!(settings.shortcuts[4].key.is_none());
        assert!(settings.shortcuts[4].label.is_empty());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_normalize_rederives_labels() {
        let mut settings = Settings::default();
        settings.shortcuts[0].label = "??".to_string();
        settings.normalize();
        assert_eq!(settings.shortcuts[0].label, "1");
    }

    #[test]
    fn test_validate_reports_pair() {
        let mut settings = Settings::default();
        settings.shortcuts[7].assign("Digit3");
        let err = settings.validate().unwrap_err();
        assert_eq!(err.key, "Digit3");
        assert_eq!(err.first, 2);
        assert_eq!(err.second, 7);
    }

    #[test]
    fn test_assign_label_fallback() {
        let mut binding = ShortcutBinding::unassigned(0);
        binding.assign("F13");
        assert_eq!(binding.key.as_deref(), Some("F13"));
        assert_eq!(binding.label, "F13");
    }
}
