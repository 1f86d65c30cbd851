//! Update availability checking.
//!
//! The published version marker is a plain text file containing the
//! latest release version. Comparison is exact after trimming: any
//! difference counts as an update, which also covers users running a
//! build newer than the marker.

/// Where the published version marker lives.
pub const VERSION_URL: &str = "https://raw.githubusercontent.com/lafz-app/lafz/main/version.txt";

/// The page users download releases from.
pub const RELEASES_URL: &str = "https://github.com/lafz-app/lafz/releases";

/// Project home.
pub const REPO_URL: &str = "https://github.com/lafz-app/lafz";

/// Outcome of comparing the fetched marker with the running version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    /// The marker matches the running version.
    UpToDate,
    /// The marker names a different version.
    Available { remote: String },
}

/// Whether the remote marker differs from the running version,
/// ignoring surrounding whitespace on both sides.
pub fn version_differs(local: &str, remote: &str) -> bool {
    local.trim() != remote.trim()
}

impl UpdateStatus {
    /// Interpret a fetched marker against the running version.
    pub fn from_remote(local: &str, remote: &str) -> UpdateStatus {
        if version_differs(local, remote) {
            UpdateStatus::Available {
                remote: remote.trim().to_string(),
            }
        } else {
            UpdateStatus::UpToDate
        }
    }
}
