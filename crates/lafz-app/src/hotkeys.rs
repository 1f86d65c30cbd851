//! OS global hotkey integration.
//!
//! Chords are always Alt (Option on macOS) plus one stored key code, so
//! a binding's code string maps straight onto a [`HotKey`]. Fired events
//! arrive on a process-global channel and are drained once per frame.

use global_hotkey::{
    GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
    hotkey::{Code, HotKey, Modifiers},
};
use lafz_core::{HotkeyRegistrar, NullRegistrar, PhraseId, RegistrarError};
use std::collections::HashMap;
use std::str::FromStr;

/// Registrar backed by the OS global hotkey facility.
pub struct GlobalHotkeyService {
    manager: GlobalHotKeyManager,
    registered: Vec<HotKey>,
    phrase_by_hotkey: HashMap<u32, PhraseId>,
}

impl GlobalHotkeyService {
    pub fn new() -> Result<Self, RegistrarError> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| RegistrarError::Backend(e.to_string()))?;
        Ok(Self {
            manager,
            registered: Vec::new(),
            phrase_by_hotkey: HashMap::new(),
        })
    }

    /// Drain fired chords, in arrival order. Release events are skipped.
    pub fn drain_events(&self) -> Vec<PhraseId> {
        let mut fired = Vec::new();
        while let Ok(event) = GlobalHotKeyEvent::receiver().try_recv() {
            if event.state == HotKeyState::Pressed {
                if let Some(&id) = self.phrase_by_hotkey.get(&event.id) {
                    fired.push(id);
                }
            }
        }
        fired
    }
}

impl HotkeyRegistrar for GlobalHotkeyService {
    fn register(&mut self, id: PhraseId, code: &str) -> Result<(), RegistrarError> {
        let code =
            Code::from_str(code).map_err(|_| RegistrarError::BadKeyCode(code.to_string()))?;
        let hotkey = HotKey::new(Some(Modifiers::ALT), code);

        self.manager
            .register(hotkey)
            .map_err(|e| RegistrarError::Backend(e.to_string()))?;
        self.phrase_by_hotkey.insert(hotkey.id(), id);
        self.registered.push(hotkey);
        Ok(())
    }

    fn unregister_all(&mut self) {
        if self.registered.is_empty() {
            return;
        }
        if let Err(e) = self.manager.unregister_all(&self.registered) {
            log::warn!("Failed to unregister hotkeys: {}", e);
        }
        self.registered.clear();
        self.phrase_by_hotkey.clear();
    }
}

impl Drop for GlobalHotkeyService {
    fn drop(&mut self) {
        self.unregister_all();
    }
}

/// The hotkey capability picked at startup. Sessions without one (no
/// display server support, permissions) fall back to the null backend
/// and the rest of the app runs unchanged.
pub enum HotkeyBackend {
    Os(GlobalHotkeyService),
    Unavailable(NullRegistrar),
}

impl HotkeyBackend {
    /// Probe the OS facility once.
    pub fn detect() -> Self {
        match GlobalHotkeyService::new() {
            Ok(service) => HotkeyBackend::Os(service),
            Err(e) => {
                log::warn!("Global hotkeys unavailable: {}", e);
                HotkeyBackend::Unavailable(NullRegistrar)
            }
        }
    }

    pub fn available(&self) -> bool {
        matches!(self, HotkeyBackend::Os(_))
    }

    /// The registrar to sync settings against.
    pub fn registrar(&mut self) -> &mut dyn HotkeyRegistrar {
        match self {
            HotkeyBackend::Os(service) => service,
            HotkeyBackend::Unavailable(null) => null,
        }
    }

    /// Chords fired since the last call.
    pub fn drain_events(&self) -> Vec<PhraseId> {
        match self {
            HotkeyBackend::Os(service) => service.drain_events(),
            HotkeyBackend::Unavailable(_) => Vec::new(),
        }
    }
}
