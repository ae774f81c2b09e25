//! Hot pixel detection on black frames.
//!
//! A black frame is shot with the lens cap on, so every pixel that lights up
//! is a sensor defect. Detection runs in two phases: a threshold scan that
//! flags single pixels, then a consolidation pass that fuses touching pixels
//! into rectangular clusters.

mod config;
mod consolidate;
mod progress;
mod scan;
mod timing;
mod types;


use tracing::{debug, info, info_span, instrument, warn};

use crate::hot_pixels::bitmap::RgbBitmap;
use crate::hot_pixels::common::error::{DetectorError, Result};

pub use config::{
    DEFAULT_MAX_HOT_PIXELS, DEFAULT_ROWS_PER_BAND, DetectorConfig, DetectorConfigBuilder,
};
pub use consolidate::{consolidate, is_consolidated};
pub use progress::{CancelToken, LogProgress, NoProgress, ProgressSink};
pub use scan::{PARALLEL_THRESHOLD, threshold_value};
pub use timing::PhaseTimings;
pub use types::HotPixel;

/// Result of a full detection pass.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Consolidated clusters, non-overlapping
    pub hot_pixels: Vec<HotPixel>,
    /// Single-pixel candidates found by the scan
    pub candidates: usize,
    /// Rows actually scanned (fewer than the height when truncated)
    pub rows_scanned: usize,
    /// Whether the scan stopped at the hot pixel cap
    pub truncated: bool,
    pub timings: PhaseTimings,
}

/// Stateless detector; holds only its configuration.
#[derive(Debug, Clone, Default)]
pub struct HotPixelDetector {
    config: DetectorConfig,
}

impl HotPixelDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Scans `bitmap` and returns the consolidated hot pixel clusters.
    ///
    /// An empty bitmap yields an empty list. With a hot pixel cap configured
    /// the list may be truncated; [`detect_with`](Self::detect_with) reports it.
    pub fn detect(&self, bitmap: &RgbBitmap) -> Vec<HotPixel> {
        // A fresh token is never cancelled, so this cannot fail.
        self.detect_with(bitmap, &CancelToken::new(), &NoProgress)
            .map(|detection| detection.hot_pixels)
            .unwrap_or_default()
    }

    /// Threshold scan only: one 1×1 hot pixel per flagged pixel, raster order.
    pub fn scan(&self, bitmap: &RgbBitmap) -> Vec<HotPixel> {
        scan::scan(bitmap, &self.config, &CancelToken::new(), &NoProgress)
            .map(|outcome| outcome.hot_pixels)
            .unwrap_or_default()
    }

    /// Full detection with progress reports and cooperative cancellation.
    ///
    /// `cancel` is checked between bands of rows and again before
    /// consolidation.
    #[instrument(skip_all, fields(width = bitmap.width(), height = bitmap.height()))]
    pub fn detect_with(
        &self,
        bitmap: &RgbBitmap,
        cancel: &CancelToken,
        progress: &dyn ProgressSink,
    ) -> Result<Detection> {
        info!("Starting hot pixel detection");
        let (outcome, scan_time) = timing::timed(|| {
            let _span = info_span!("scan", threshold = self.config.threshold).entered();
            scan::scan(bitmap, &self.config, cancel, progress)
        });
        let outcome = outcome?;

        if outcome.truncated {
            warn!(
                candidates = outcome.hot_pixels.len(),
                rows = outcome.rows_scanned,
                "Too many hot pixels, scan stopped early; is this really a black frame?"
            );
        }

        if cancel.is_cancelled() {
            return Err(DetectorError::Cancelled);
        }

        let candidates = outcome.hot_pixels.len();
        debug!(candidates, "Consolidating hot pixels");

        let (hot_pixels, consolidate_time) = timing::timed(|| {
            let _span = info_span!("consolidate", candidates).entered();
            consolidate(outcome.hot_pixels, self.config.adjacency)
        });

        info!(candidates, regions = hot_pixels.len(), "Hot pixel detection complete");

        Ok(Detection {
            hot_pixels,
            candidates,
            rows_scanned: outcome.rows_scanned,
            truncated: outcome.truncated,
            timings: PhaseTimings {
                scan: scan_time,
                consolidate: consolidate_time,
            },
        })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DetectorConfig) {
        self.config = config;
    }
}
