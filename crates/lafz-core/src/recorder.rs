//! Shortcut recording state machine for the settings editor.
//!
//! At most one binding records at a time. The recorder only decides what
//! a captured key means; committing the assignment is the caller's job,
//! and the caller feeds it key codes from Alt-chorded presses only.

use crate::catalog::PhraseId;
use crate::keys;
use crate::settings::ShortcutBinding;

/// What the recorder is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecorderState {
    #[default]
    Idle,
    /// Waiting for a key for this binding.
    Recording(PhraseId),
}

/// Outcome of feeding one key code to the recorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    /// Key accepted; assign `code` to binding `id`. Recording has ended.
    Committed { id: PhraseId, code: String },
    /// Key already belongs to another binding. Still recording.
    Conflict { id: PhraseId, other: PhraseId },
    /// Modifier or unknown key. Still recording.
    Ignored,
    /// No recording in progress.
    NotRecording,
}

/// Tracks which binding, if any, is waiting for a key press.
#[derive(Debug, Default)]
pub struct ShortcutRecorder {
    state: RecorderState,
}

impl ShortcutRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RecorderState {
        self.state
    }

    /// The binding being recorded, if any.
    pub fn recording(&self) -> Option<PhraseId> {
        match self.state {
            RecorderState::Idle => None,
            RecorderState::Recording(id) => Some(id),
        }
    }

    /// Begin recording for a binding, displacing any earlier recording.
    pub fn start(&mut self, id: PhraseId) {
        self.state = RecorderState::Recording(id);
    }

    /// Stop recording without assigning anything.
    pub fn cancel(&mut self) {
        self.state = RecorderState::Idle;
    }

    /// Clicking the binding that is already recording cancels it;
    /// clicking any other binding starts recording there.
    pub fn toggle(&mut self, id: PhraseId) {
        if self.recording() == Some(id) {
            self.cancel();
        } else {
            self.start(id);
        }
    }

    /// Interpret one captured key code against the binding table.
    ///
    /// Re-capturing a binding's own current key commits it unchanged.
    pub fn capture(&mut self, code: &str, bindings: &[ShortcutBinding]) -> Capture {
        let RecorderState::Recording(id) = self.state else {
            return Capture::NotRecording;
        };

        if !keys::is_recordable(code) {
            return Capture::Ignored;
        }

        if let Some(other) = bindings
            .iter()
            .find(|b| b.id != id && b.key.as_deref() == Some(code))
        {
            return Capture::Conflict {
                id,
                other: other.id,
            };
        }

        self.state = RecorderState::Idle;
        Capture::Committed {
            id,
            code: code.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::default_bindings;

    #[test]
    fn test_idle_ignores_keys() {
        let mut recorder = ShortcutRecorder::new();
        let bindings = default_bindings();
        assert_eq!(recorder.capture("KeyA", &bindings), Capture::NotRecording);
    }

    #[test]
    fn test_commit_ends_recording() {
        let mut recorder = ShortcutRecorder::new();
        let bindings = default_bindings();

        recorder.start(14);
        let capture = recorder.capture("KeyA", &bindings);
        assert_eq!(
            capture,
            Capture::Committed {
                id: 14,
                code: "KeyA".to_string()
            }
        );
        assert_eq!(recorder.state(), RecorderState::Idle);
    }

    #[test]
    fn test_conflict_keeps_recording() {
        let mut recorder = ShortcutRecorder::new();
        let bindings = default_bindings();

        // Digit3 is phrase 2's default key.
        recorder.start(0);
        let capture = recorder.capture("Digit3", &bindings);
        assert_eq!(capture, Capture::Conflict { id: 0, other: 2 });
        assert_eq!(recorder.state(), RecorderState::Recording(0));
    }

    #[test]
    fn test_own_key_recommits() {
        let mut recorder = ShortcutRecorder::new();
        let bindings = default_bindings();

        recorder.start(0);
        let capture = recorder.capture("Digit1", &bindings);
        assert_eq!(
            capture,
            Capture::Committed {
                id: 0,
                code: "Digit1".to_string()
            }
        );
    }

    #[test]
    fn test_modifier_codes_ignored() {
        let mut recorder = ShortcutRecorder::new();
        let bindings = default_bindings();

        recorder.start(0);
        assert_eq!(recorder.capture("AltLeft", &bindings), Capture::Ignored);
        assert_eq!(recorder.capture("ShiftRight", &bindings), Capture::Ignored);
        assert_eq!(recorder.state(), RecorderState::Recording(0));
    }

    #[test]
    fn test_start_displaces_previous() {
        let mut recorder = ShortcutRecorder::new();
        let bindings = default_bindings();

        recorder.start(3);
        recorder.start(7);
        assert_eq!(recorder.recording(), Some(7));

        // The next capture commits to the displacing binding only.
        let capture = recorder.capture("KeyQ", &bindings);
        assert_eq!(
            capture,
            Capture::Committed {
                id: 7,
                code: "KeyQ".to_string()
            }
        );
    }

    #[test]
    fn test_toggle() {
        let mut recorder = ShortcutRecorder::new();
        recorder.toggle(5);
        assert_eq!(recorder.recording(), Some(5));
        recorder.toggle(5);
        assert_eq!(recorder.recording(), None);
        recorder.toggle(5);
        recorder.toggle(6);
        assert_eq!(recorder.recording(), Some(6));
    }
}
