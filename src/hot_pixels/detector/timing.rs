use std::time::{Duration, Instant};

use tracing::info;

/// Wall-clock time spent scanning and consolidating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTimings {
    pub scan: Duration,
    pub consolidate: Duration,
}

impl PhaseTimings {
    pub fn total(&self) -> Duration {
        self.scan + self.consolidate
    }

    pub fn log_summary(&self) {
        let total = self.total().as_secs_f64();
        let share = |d: Duration| {
            if total > 0.0 { d.as_secs_f64() / total * 100.0 } else { 0.0 }
        };
        info!(
            "scan {:.3}ms ({:.1}%), consolidate {:.3}ms ({:.1}%), total {:.3}ms",
            self.scan.as_secs_f64() * 1000.0,
            share(self.scan),
            self.consolidate.as_secs_f64() * 1000.0,
            share(self.consolidate),
            total * 1000.0
        );
    }
}

/// Runs `f` and returns its result with the elapsed time.
pub(crate) fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}
