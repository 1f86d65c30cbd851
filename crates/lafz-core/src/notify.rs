//! Transient user-facing notices.
//!
//! One notice shows at a time; posting a new one replaces the old and
//! restarts the clock. Expiry is deadline-based so the UI only needs to
//! call [`NoticeCenter::expire`] once per frame.

use std::time::{Duration, Instant};

/// What kind of event a notice reports. The kind fixes how long it stays up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Feedback for an in-app action, like clicking a phrase.
    Status,
    /// A global chord fired, possibly while the app was unfocused.
    HotkeyFired,
    /// An update check went wrong.
    UpdateError,
}

impl NoticeKind {
    /// How long a notice of this kind stays visible.
    pub fn lifetime(self) -> Duration {
        match self {
            NoticeKind::Status => Duration::from_millis(3000),
            NoticeKind::HotkeyFired => Duration::from_millis(2000),
            NoticeKind::UpdateError => Duration::from_millis(5000),
        }
    }
}

/// A message currently on screen.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    expires_at: Instant,
}

impl Notice {
    /// Time left before this notice disappears.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}

/// Holds the single visible notice, if any.
#[derive(Debug, Default)]
pub struct NoticeCenter {
    current: Option<Notice>,
}

impl NoticeCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice, replacing whatever is up.
    pub fn post(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.post_at(kind, message, Instant::now());
    }

    /// Show a notice with an explicit clock, for tests.
    pub fn post_at(&mut self, kind: NoticeKind, message: impl Into<String>, now: Instant) {
        self.current = Some(Notice {
            kind,
            message: message.into(),
            expires_at: now + kind.lifetime(),
        });
    }

    /// Drop the notice once its deadline has passed.
    pub fn expire(&mut self, now: Instant) {
        if let Some(notice) = &self.current {
            if now >= notice.expires_at {
                self.current = None;
            }
        }
    }

    /// The notice currently on screen.
    pub fn active(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetimes() {
        assert_eq!(NoticeKind::Status.lifetime(), Duration::from_millis(3000));
        assert_eq!(
            NoticeKind::HotkeyFired.lifetime(),
            Duration::from_millis(2000)
        );
        assert_eq!(
            NoticeKind::UpdateError.lifetime(),
            Duration::from_millis(5000)
        );
    }

    #[test]
    fn test_expiry() {
        let mut center = NoticeCenter::new();
        let start = Instant::now();
        center.post_at(NoticeKind::Status, "copied", start);

        center.expire(start + Duration::from_millis(2999));
        assert!(center.active().is_some());

        center.expire(start + Duration::from_millis(3000));
        assert!(center.active().is_none());
    }

    #[test]
    fn test_posting_restarts_the_clock() {
        let mut center = NoticeCenter::new();
        let start = Instant::now();
        center.post_at(NoticeKind::Status, "first", start);

        // Second post just before the first would have expired.
        let later = start + Duration::from_millis(2500);
        center.post_at(NoticeKind::Status, "second", later);

        center.expire(start + Duration::from_millis(3500));
        let active = center.active().unwrap();
        assert_eq!(active.message, "second");

        center.expire(later + Duration::from_millis(3000));
        assert!(center.active().is_none());
    }

    #[test]
    fn test_replacement_takes_new_kind_lifetime() {
        let mut center = NoticeCenter::new();
        let start = Instant::now();
        center.post_at(NoticeKind::Status, "copied", start);
        center.post_at(NoticeKind::HotkeyFired, "fired", start);

        center.expire(start + Duration::from_millis(2000));
        assert!(center.active().is_none());
    }

    #[test]
    fn test_remaining() {
        let mut center = NoticeCenter::new();
        let start = Instant::now();
        center.post_at(NoticeKind::Status, "copied", start);

        let notice = center.active().unwrap();
        assert_eq!(
            notice.remaining(start + Duration::from_millis(1000)),
            Duration::from_millis(2000)
        );
        assert_eq!(
            notice.remaining(start + Duration::from_millis(9000)),
            Duration::ZERO
        );
    }
}
