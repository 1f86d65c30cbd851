//! Lafz Core Library
//!
//! Platform-agnostic data model and logic for the Lafz phrase copier.

pub mod catalog;
pub mod hotkeys;
pub mod keys;
pub mod notify;
pub mod recorder;
pub mod settings;
pub mod update;

pub use catalog::{CATALOG, PhraseEntry, PhraseId};
pub use hotkeys::{HotkeyRegistrar, NullRegistrar, RegistrarError, SyncReport, sync_registrations};
pub use notify::{Notice, NoticeCenter, NoticeKind};
pub use recorder::{Capture, RecorderState, ShortcutRecorder};
pub use settings::{
    FileSettingsStore, MemorySettingsStore, SETTINGS_VERSION, Settings, SettingsStore,
    ShortcutBinding, StoreError, Theme,
};
pub use update::UpdateStatus;
