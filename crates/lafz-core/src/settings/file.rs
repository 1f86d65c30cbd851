//! File-based settings store for native platforms.

use super::{Settings, SettingsStore, StoreError, StoreResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Stores settings as a single JSON file.
///
/// Writes go to a sibling temp file first and are renamed into place, so
/// an interrupted save leaves the previous file intact.
pub struct FileSettingsStore {
    /// Directory holding the settings file.
    base_path: PathBuf,
}

const SETTINGS_FILE: &str = "settings.json";

impl FileSettingsStore {
    /// Create a store rooted at the given directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StoreResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StoreError::Io(format!("Failed to create settings directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create a store in the platform config location.
    ///
    /// On Unix: `~/.config/lafz/`
    /// On Windows: `%APPDATA%\lafz\`
    pub fn default_location() -> StoreResult<Self> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StoreError::Io("Could not determine config directory".to_string()))?;

        Self::new(base.join("lafz"))
    }

    fn settings_path(&self) -> PathBuf {
        self.base_path.join(SETTINGS_FILE)
    }

    /// Directory this store keeps its file in.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Settings {
        let path = self.settings_path();
        if !path.exists() {
            return Settings::default();
        }

        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                return Settings::default();
            }
        };

        let loaded: Settings = match serde_json::from_str(&json) {
            Ok(loaded) => loaded,
            Err(e) => {
                log::warn!("Malformed settings in {}: {}", path.display(), e);
                return Settings::default();
            }
        };

        match loaded.upgrade() {
            Some(settings) => settings,
            None => {
                log::warn!(
                    "{} was written by a newer version; starting from defaults",
                    path.display()
                );
                Settings::default()
            }
        }
    }

    fn save(&self, settings: &Settings) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let path = self.settings_path();
        let tmp = self.base_path.join(format!("{}.tmp", SETTINGS_FILE));

        fs::write(&tmp, json)
            .map_err(|e| StoreError::Io(format!("Failed to write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path)
            .map_err(|e| StoreError::Io(format!("Failed to replace {}: {}", path.display(), e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{SETTINGS_VERSION, Theme};
    use tempfile::tempdir;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().to_path_buf()).unwrap();

        let mut settings = Settings::default();
        settings.theme = Theme::Light;
        settings.shortcuts[2].global = true;

        store.save(&settings).unwrap();
        let loaded = store.load();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_load_corrupt_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().to_path_buf()).unwrap();

        fs::write(store.settings_path(), "{ not json").unwrap();
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_load_newer_schema_gives_defaults() {
        let dir = tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().to_path_buf()).unwrap();

        let mut settings = Settings::default();
        settings.version = SETTINGS_VERSION + 10;
        settings.theme = Theme::Light;
        let json = serde_json::to_string(&settings).unwrap();
        fs::write(store.settings_path(), json).unwrap();

        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().to_path_buf()).unwrap();

        store.save(&Settings::default()).unwrap();
        let mut settings = Settings::default();
        settings.global_shortcuts_enabled = true;
        store.save(&settings).unwrap();

        assert!(store.load().global_shortcuts_enabled);
        // No temp file left behind.
        assert!(!dir.path().join("settings.json.tmp").exists());
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deep").join("down");
        let store = FileSettingsStore::new(nested.clone()).unwrap();
        assert!(nested.exists());
        store.save(&Settings::default()).unwrap();
        assert!(nested.join(SETTINGS_FILE).exists());
    }
}
