//! Background update checks.
//!
//! One check runs at a time on a throwaway thread; the result comes back
//! over a channel and is picked up by the frame loop, so the UI never
//! blocks on the network.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Result of one finished check.
#[derive(Debug)]
pub enum UpdateEvent {
    /// The published version marker, as fetched.
    Remote(String),
    /// The check failed; the message is for the log, not the user.
    Failed(String),
}

/// Owns the check thread handshake.
pub struct UpdateChecker {
    sender: Sender<UpdateEvent>,
    events: Receiver<UpdateEvent>,
    in_flight: bool,
}

impl Default for UpdateChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateChecker {
    pub fn new() -> Self {
        let (sender, events) = channel();
        Self {
            sender,
            events,
            in_flight: false,
        }
    }

    /// Whether a check is still running.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Kick off a check unless one is already running. Returns whether
    /// a new check started.
    pub fn spawn_check(&mut self, url: &str) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;

        let url = url.to_string();
        let sender = self.sender.clone();
        thread::spawn(move || {
            let event = match fetch_version(&url) {
                Ok(version) => UpdateEvent::Remote(version),
                Err(e) => UpdateEvent::Failed(e),
            };
            // A closed receiver just means the app is shutting down.
            let _ = sender.send(event);
        });
        true
    }

    /// Pick up a finished check, if one landed.
    pub fn poll(&mut self) -> Option<UpdateEvent> {
        match self.events.try_recv() {
            Ok(event) => {
                self.in_flight = false;
                Some(event)
            }
            Err(_) => None,
        }
    }
}

fn fetch_version(url: &str) -> Result<String, String> {
    let response = ureq::get(url)
        .timeout(FETCH_TIMEOUT)
        .call()
        .map_err(|e| e.to_string())?;
    response.into_string().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_check_in_flight() {
        let mut checker = UpdateChecker::new();
        // Malformed URL fails fast without touching the network.
        assert!(checker.spawn_check("not a url"));
        assert!(checker.in_flight());
        assert!(!checker.spawn_check("not a url"));

        let mut event = None;
        for _ in 0..200 {
            event = checker.poll();
            if event.is_some() {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        assert!(matches!(event, Some(UpdateEvent::Failed(_))));
        assert!(!checker.in_flight());
        assert!(checker.spawn_check("not a url"));
    }
}
