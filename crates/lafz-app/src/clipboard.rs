//! Clipboard access behind a small seam so copy behavior is testable.

#[cfg(test)]
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(test)]
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Clipboard errors.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Clipboard write failed: {0}")]
    Write(String),
}

/// Something that can receive copied text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard. A fresh connection is opened per write; holding one
/// across the session keeps clipboard managers from seeing updates on
/// some platforms.
#[derive(Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// In-memory clipboard for tests. Clones share contents, so a test can
/// keep a handle while the app owns the sink.
#[cfg(test)]
#[derive(Default, Clone)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    fail_writes: Arc<AtomicBool>,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last text written, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|slot| slot.clone())
    }

    /// Make subsequent writes fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }
}

#[cfg(test)]
impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(ClipboardError::Write("Simulated write failure".to_string()));
        }
        if let Ok(mut slot) = self.contents.lock() {
            *slot = Some(text.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_shares_contents() {
        let clipboard = MemoryClipboard::new();
        let mut sink = clipboard.clone();

        sink.set_text("ﷺ").unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("ﷺ"));
    }

    #[test]
    fn test_memory_clipboard_fail_mode() {
        let clipboard = MemoryClipboard::new();
        let mut sink = clipboard.clone();

        clipboard.set_fail_writes(true);
        assert!(sink.set_text("x").is_err());
        assert!(clipboard.contents().is_none());
    }
}
