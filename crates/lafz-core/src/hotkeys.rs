//! Reconciling OS-level hotkey registrations with settings.
//!
//! Registration is wipe-and-rebuild: every sync pass unregisters
//! everything and re-registers what the settings currently ask for, so
//! stale chords can never linger across setting changes.

use crate::catalog::PhraseId;
use crate::settings::Settings;
use thiserror::Error;

/// Why a single chord could not be registered.
#[derive(Debug, Error)]
pub enum RegistrarError {
    #[error("Unusable key code: {0}")]
    BadKeyCode(String),
    #[error("Registration failed: {0}")]
    Backend(String),
}

/// Something that can claim Alt-chords with the OS.
pub trait HotkeyRegistrar {
    /// Claim Alt plus `code` for a phrase.
    fn register(&mut self, id: PhraseId, code: &str) -> Result<(), RegistrarError>;

    /// Release every chord this registrar holds.
    fn unregister_all(&mut self);
}

/// Registrar for sessions without a global hotkey capability. Accepts
/// everything and registers nothing, so callers never special-case the
/// degraded environment.
#[derive(Debug, Default)]
pub struct NullRegistrar;

impl HotkeyRegistrar for NullRegistrar {
    fn register(&mut self, _id: PhraseId, _code: &str) -> Result<(), RegistrarError> {
        Ok(())
    }

    fn unregister_all(&mut self) {}
}

/// Outcome of one sync pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Bindings now registered with the OS.
    pub registered: Vec<PhraseId>,
    /// Bindings that were asked for but could not be claimed.
    pub failed: Vec<(PhraseId, String)>,
}

impl SyncReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Make the registrar's state match the settings.
///
/// With the master switch off nothing stays registered. Otherwise every
/// binding that is global and has a key is registered; a failed binding
/// is reported and the rest still go through.
pub fn sync_registrations(
    registrar: &mut dyn HotkeyRegistrar,
    settings: &Settings,
) -> SyncReport {
    registrar.unregister_all();

    let mut report = SyncReport::default();
    if !settings.global_shortcuts_enabled {
        return report;
    }

    for binding in &settings.shortcuts {
        if !binding.global {
            continue;
        }
        let Some(code) = binding.key.as_deref() else {
            continue;
        };
        match registrar.register(binding.id, code) {
            Ok(()) => report.registered.push(binding.id),
            Err(e) => {
                log::warn!("Hotkey for phrase {} not registered: {}", binding.id, e);
                report.failed.push((binding.id, e.to_string()));
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Registrar that records calls and can refuse chosen codes.
    #[derive(Default)]
    struct FakeRegistrar {
        registered: Vec<(PhraseId, String)>,
        unregister_calls: usize,
        reject: Vec<String>,
    }

    impl HotkeyRegistrar for FakeRegistrar {
        fn register(&mut self, id: PhraseId, code: &str) -> Result<(), RegistrarError> {
            if self.reject.iter().any(|r| r == code) {
                return Err(RegistrarError::Backend("already taken".to_string()));
            }
            self.registered.push((id, code.to_string()));
            Ok(())
        }

        fn unregister_all(&mut self) {
            self.registered.clear();
            self.unregister_calls += 1;
        }
    }

    fn settings_with_globals(ids: &[PhraseId]) -> Settings {
        let mut settings = Settings::default();
        settings.global_shortcuts_enabled = true;
        for &id in ids {
            settings.shortcuts[id].global = true;
        }
        settings
    }

    #[test]
    fn test_disabled_registers_nothing() {
        let mut registrar = FakeRegistrar::default();
        let mut settings = settings_with_globals(&[0, 1]);
        settings.global_shortcuts_enabled = false;

        let report = sync_registrations(&mut registrar, &settings);
        assert!(report.registered.is_empty());
        assert!(registrar.registered.is_empty());
        // The wipe still happens so nothing stays claimed.
        assert_eq!(registrar.unregister_calls, 1);
    }

    #[test]
    fn test_registers_only_global_bound_entries() {
        let mut registrar = FakeRegistrar::default();
        let mut settings = settings_with_globals(&[0, 2, 14]);
        // Phrase 14 has no default key; flagging it global changes nothing.
        let report = sync_registrations(&mut registrar, &settings);

        assert_eq!(report.registered, vec![0, 2]);
        assert!(report.is_clean());
        assert_eq!(
            registrar.registered,
            vec![(0, "Digit1".to_string()), (2, "Digit3".to_string())]
        );

        settings.shortcuts[1].global = true;
        let report = sync_registrations(&mut registrar, &settings);
        assert_eq!(report.registered, vec![0, 1, 2]);
        assert_eq!(registrar.unregister_calls, 2);
    }

    #[test]
    fn test_failure_does_not_stop_the_rest() {
        let mut registrar = FakeRegistrar {
            reject: vec!["Digit2".to_string()],
            ..Default::default()
        };
        let settings = settings_with_globals(&[0, 1, 2]);

        let report = sync_registrations(&mut registrar, &settings);
        assert_eq!(report.registered, vec![0, 2]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_null_registrar_accepts_everything() {
        let mut registrar = NullRegistrar;
        let settings = settings_with_globals(&[0, 1]);

        let report = sync_registrations(&mut registrar, &settings);
        assert_eq!(report.registered, vec![0, 1]);
        assert!(report.is_clean());
    }
}
