//! Key code handling for shortcut chords.
//!
//! Keys are stored as W3C `KeyboardEvent.code` strings ("Digit1", "KeyA",
//! "BracketLeft") so the settings file stays layout-independent and feeds
//! straight into OS-level registration. Labels are the short form shown
//! next to the ⌥ modifier in the UI.

/// Recordable codes and their display labels, in keyboard order.
pub const RECORDABLE_KEYS: &[(&str, &str)] = &[
    ("Digit1", "1"),
    ("Digit2", "2"),
    ("Digit3", "3"),
    ("Digit4", "4"),
    ("Digit5", "5"),
    ("Digit6", "6"),
    ("Digit7", "7"),
    ("Digit8", "8"),
    ("Digit9", "9"),
    ("Digit0", "0"),
    ("Minus", "-"),
    ("Equal", "="),
    ("KeyQ", "Q"),
    ("KeyW", "W"),
    ("KeyE", "E"),
    ("KeyR", "R"),
    ("KeyT", "T"),
    ("KeyY", "Y"),
    ("KeyU", "U"),
    ("KeyI", "I"),
    ("KeyO", "O"),
    ("KeyP", "P"),
    ("BracketLeft", "["),
    ("BracketRight", "]"),
    ("KeyA", "A"),
    ("KeyS", "S"),
    ("KeyD", "D"),
    ("KeyF", "F"),
    ("KeyG", "G"),
    ("KeyH", "H"),
    ("KeyJ", "J"),
    ("KeyK", "K"),
    ("KeyL", "L"),
    ("Semicolon", ";"),
    ("Quote", "'"),
    ("Backquote", "`"),
    ("KeyZ", "Z"),
    ("KeyX", "X"),
    ("KeyC", "C"),
    ("KeyV", "V"),
    ("KeyB", "B"),
    ("KeyN", "N"),
    ("KeyM", "M"),
    ("Comma", ","),
    ("Period", "."),
    ("Slash", "/"),
    ("Backslash", "\\"),
];

/// Display label for a code, if it is one we know.
pub fn key_label(code: &str) -> Option<&'static str> {
    RECORDABLE_KEYS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

/// Whether a code may be bound to a phrase. Modifier and unknown codes
/// are rejected so a chord is always Alt plus exactly one plain key.
pub fn is_recordable(code: &str) -> bool {
    key_label(code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(key_label("Digit1"), Some("1"));
        assert_eq!(key_label("KeyA"), Some("A"));
        assert_eq!(key_label("BracketLeft"), Some("["));
        assert_eq!(key_label("AltLeft"), None);
    }

    #[test]
    fn test_modifiers_not_recordable() {
        for code in [
            "AltLeft",
            "AltRight",
            "ShiftLeft",
            "ShiftRight",
            "ControlLeft",
            "ControlRight",
            "MetaLeft",
            "MetaRight",
        ] {
            assert!(!is_recordable(code));
        }
    }

    #[test]
    fn test_codes_unique() {
        for (i, (code, _)) in RECORDABLE_KEYS.iter().enumerate() {
            assert!(
                RECORDABLE_KEYS[i + 1..].iter().all(|(c, _)| c != code),
                "duplicate code {code}"
            );
        }
    }
}
