//! In-memory settings store.

use super::{Settings, SettingsStore, StoreError, StoreResult};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory store for testing and for sessions where no config
/// directory is available. Nothing survives the process.
#[derive(Default)]
pub struct MemorySettingsStore {
    value: Mutex<Option<Settings>>,
    fail_saves: AtomicBool,
}

impl MemorySettingsStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent saves fail, to exercise error paths in tests.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::Relaxed);
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Settings {
        match self.value.lock() {
            Ok(slot) => slot.clone().unwrap_or_default(),
            Err(e) => {
                log::warn!("Lock error: {}", e);
                Settings::default()
            }
        }
    }

    fn save(&self, settings: &Settings) -> StoreResult<()> {
        if self.fail_saves.load(Ordering::Relaxed) {
            return Err(StoreError::Io("Simulated save failure".to_string()));
        }
        let mut slot = self
            .value
            .lock()
            .map_err(|e| StoreError::Other(format!("Lock error: {}", e)))?;
        *slot = Some(settings.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Theme;

    #[test]
    fn test_empty_store_loads_defaults() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let store = MemorySettingsStore::new();
        let mut settings = Settings::default();
        settings.theme = Theme::Light;

        store.save(&settings).unwrap();
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn test_fail_mode() {
        let store = MemorySettingsStore::new();
        store.set_fail_saves(true);
        assert!(store.save(&Settings::default()).is_err());

        store.set_fail_saves(false);
        assert!(store.save(&Settings::default()).is_ok());
    }
}
