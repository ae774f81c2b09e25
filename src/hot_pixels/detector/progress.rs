//! Progress reporting and cooperative cancellation

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

/// Receives scan progress, in percent, after each band of rows.
pub trait ProgressSink {
    fn on_progress(&self, percent: u8);
}

/// Discards progress.
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&self, _percent: u8) {}
}

/// Logs progress at debug level.
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_progress(&self, percent: u8) {
        debug!(percent, "Scanning black frame");
    }
}

/// Shared flag a caller flips to abort a running detection.
///
/// Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
