//! Side-channel reporting for conditions that do not fail a scan.

use std::path::Path;
use tracing::warn;

/// Receives non-fatal scan events.
pub trait ScanObserver: Send + Sync {
    /// An ignore file exists but could not be read; the scan continues with no rules.
    fn ignore_file_unreadable(&self, path: &Path, error: &dyn std::error::Error);
}

/// Default observer: forwards events to `tracing` as warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ScanObserver for TracingObserver {
    fn ignore_file_unreadable(&self, path: &Path, error: &dyn std::error::Error) {
        warn!(path = %path.display(), %error, "Ignore file unreadable, continuing without ignore rules");
    }
}

/// Observer that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl ScanObserver for SilentObserver {
    fn ignore_file_unreadable(&self, _path: &Path, _error: &dyn std::error::Error) {}
}
