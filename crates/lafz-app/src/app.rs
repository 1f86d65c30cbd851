//! The application controller.
//!
//! Owns the settings, the services behind them, and the `UiState`,
//! and turns the actions each frame produces into model changes.

use std::time::{Duration, Instant};

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::hotkeys::HotkeyBackend;
use crate::ui::{self, UiAction, UiEnv, UiState};
use crate::updater::{UpdateChecker, UpdateEvent};
use crate::{APP_VERSION, fonts};
use lafz_core::{
    FileSettingsStore, MemorySettingsStore, NoticeCenter, NoticeKind, PhraseId, Settings,
    SettingsStore, Theme, UpdateStatus, catalog, sync_registrations, update,
};

const COPY_FAILED: &str = "Failed to copy to clipboard";
const SAVE_FAILED: &str = "Failed to save settings";
const UP_TO_DATE: &str = "You are using the latest version of Lafz.";
const CHECK_FAILED: &str = "Failed to check for updates";

/// Repaint cadence while hotkey or update events may arrive without input.
const HEARTBEAT: Duration = Duration::from_millis(200);

pub struct LafzApp {
    settings: Settings,
    store: Box<dyn SettingsStore>,
    clipboard: Box<dyn ClipboardSink>,
    hotkeys: HotkeyBackend,
    notices: NoticeCenter,
    updater: UpdateChecker,
    ui: UiState,
    applied_theme: Option<Theme>,
}

impl LafzApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        fonts::install(&cc.egui_ctx);
        let store: Box<dyn SettingsStore> = match FileSettingsStore::default_location() {
            Ok(store) => {
                log::info!("Settings directory: {}", store.base_path().display());
                Box::new(store)
            }
            Err(err) => {
                log::warn!("Settings will not persist: {}", err);
                Box::new(MemorySettingsStore::new())
            }
        };
        Self::with_services(
            store,
            Box::new(SystemClipboard::new()),
            HotkeyBackend::detect(),
        )
    }

    fn with_services(
        store: Box<dyn SettingsStore>,
        clipboard: Box<dyn ClipboardSink>,
        hotkeys: HotkeyBackend,
    ) -> Self {
        let settings = store.load();
        let mut app = Self {
            settings,
            store,
            clipboard,
            hotkeys,
            notices: NoticeCenter::new(),
            updater: UpdateChecker::new(),
            ui: UiState::default(),
            applied_theme: None,
        };
        app.resync_hotkeys();
        app
    }

    /// Put a phrase on the clipboard and post the matching notice.
    fn copy_phrase(&mut self, id: PhraseId, via_hotkey: bool) {
        let Some(entry) = catalog::phrase(id) else {
            log::warn!("Ignoring copy request for unknown phrase {}", id);
            return;
        };
        match self.clipboard.set_text(entry.phrase) {
            Ok(()) => {
                if via_hotkey {
                    self.notices.post(
                        NoticeKind::HotkeyFired,
                        format!("Just copied: {}", entry.phrase),
                    );
                } else {
                    self.notices.post(
                        NoticeKind::Status,
                        format!("{} copied to clipboard", entry.phrase),
                    );
                }
            }
            Err(err) => {
                log::error!("Clipboard write failed: {}", err);
                self.notices.post(NoticeKind::Status, COPY_FAILED);
            }
        }
    }

    /// Adopt an edited working copy. Returns false if it was rejected,
    /// in which case the draft goes back to the modal untouched.
    fn commit_settings(&mut self, draft: Settings) -> bool {
        if let Err(err) = draft.validate() {
            log::warn!("Rejecting settings: {}", err);
            self.ui.conflict_warning = Some(ui::CONFLICT_MESSAGE.to_string());
            self.ui.draft = Some(draft);
            return false;
        }
        self.settings = draft;
        if let Err(err) = self.store.save(&self.settings) {
            log::error!("{}: {}", SAVE_FAILED, err);
            self.notices.post(NoticeKind::Status, SAVE_FAILED);
        }
        self.resync_hotkeys();
        true
    }

    fn resync_hotkeys(&mut self) {
        let report = sync_registrations(self.hotkeys.registrar(), &self.settings);
        if !report.is_clean() {
            self.notices.post(
                NoticeKind::Status,
                format!("{} shortcut(s) could not be registered", report.failed.len()),
            );
        }
    }

    fn handle_update_event(&mut self, event: UpdateEvent) {
        match event {
            UpdateEvent::Remote(remote) => {
                match UpdateStatus::from_remote(APP_VERSION, &remote) {
                    UpdateStatus::Available { remote } => {
                        log::info!("Update available: {}", remote);
                        self.ui.update_available = Some(remote);
                    }
                    UpdateStatus::UpToDate => {
                        self.notices.post(NoticeKind::Status, UP_TO_DATE);
                    }
                }
            }
            UpdateEvent::Failed(err) => {
                log::warn!("Update check failed: {}", err);
                self.notices.post(NoticeKind::UpdateError, CHECK_FAILED);
            }
        }
    }

    fn apply_action(&mut self, ctx: &egui::Context, action: UiAction) {
        match action {
            UiAction::CopyPhrase(id) => self.copy_phrase(id, false),
            UiAction::OpenSettings => {
                self.ui.draft = Some(self.settings.clone());
                self.ui.recorder.cancel();
                self.ui.conflict_warning = None;
                self.ui.settings_open = true;
            }
            UiAction::SaveSettings => {
                self.ui.recorder.cancel();
                match self.ui.draft.take() {
                    Some(draft) => {
                        if self.commit_settings(draft) {
                            self.ui.conflict_warning = None;
                            self.ui.settings_open = false;
                        }
                    }
                    None => self.ui.settings_open = false,
                }
            }
            UiAction::CancelSettings => {
                self.ui.recorder.cancel();
                self.ui.draft = None;
                self.ui.conflict_warning = None;
                self.ui.settings_open = false;
            }
            UiAction::OpenDocs => self.ui.docs_open = true,
            UiAction::CloseDocs => self.ui.docs_open = false,
            UiAction::OpenAbout => ctx.open_url(egui::OpenUrl::new_tab(update::REPO_URL)),
            UiAction::CheckForUpdates => {
                if self.updater.spawn_check(update::VERSION_URL) {
                    log::info!("Checking for updates");
                }
            }
            UiAction::OpenReleases => {
                ctx.open_url(egui::OpenUrl::new_tab(update::RELEASES_URL));
                self.ui.update_available = None;
            }
            UiAction::DismissUpdate => self.ui.update_available = None,
        }
    }

    /// How long the next repaint can wait, if anything is pending.
    fn next_repaint(&self) -> Option<Duration> {
        let mut wait: Option<Duration> = None;
        let listening = self.hotkeys.available() && self.settings.global_shortcuts_enabled;
        if listening || self.updater.in_flight() {
            wait = Some(HEARTBEAT);
        }
        if let Some(notice) = self.notices.active() {
            let remaining = notice.remaining(Instant::now());
            wait = Some(wait.map_or(remaining, |w| w.min(remaining)));
        }
        wait
    }
}

impl eframe::App for LafzApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for id in self.hotkeys.drain_events() {
            self.copy_phrase(id, true);
        }
        if let Some(event) = self.updater.poll() {
            self.handle_update_event(event);
        }
        self.notices.expire(Instant::now());

        let palette = match self.settings.theme {
            Theme::Dark => &lafz_widgets::DARK,
            Theme::Light => &lafz_widgets::LIGHT,
        };
        if self.applied_theme != Some(self.settings.theme) {
            palette.apply(ctx);
            self.applied_theme = Some(self.settings.theme);
        }

        let env = UiEnv {
            palette,
            notice: self.notices.active(),
            hotkeys_available: self.hotkeys.available(),
            checking_updates: self.updater.in_flight(),
            version: APP_VERSION,
        };
        let actions = ui::render(ctx, &mut self.ui, &env);
        for action in actions {
            self.apply_action(ctx, action);
        }

        if let Some(wait) = self.next_repaint() {
            ctx.request_repaint_after(wait);
        }
    }
}
