//! Detector configuration types

use crate::hot_pixels::common::fixed_point::DENOM;
use crate::hot_pixels::geometry::Adjacency;

/// Suggested candidate cap for interactive callers.
///
/// A normal photograph opened by mistake as a black frame flags most of its
/// pixels; merging those would take far too long. The cap is opt-in through
/// [`DetectorConfigBuilder::max_hot_pixels`].
pub const DEFAULT_MAX_HOT_PIXELS: usize = 1000;

/// Rows scanned between progress reports and cancellation checks.
pub const DEFAULT_ROWS_PER_BAND: usize = 64;

/// Configuration for hot pixel detection
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Relative threshold on the `DENOM` scale (default: 10%)
    pub threshold: u64,
    /// Stop scanning once more candidates than this were found (default: None, unlimited)
    pub max_hot_pixels: Option<usize>,
    /// Which contacts fuse two regions
    pub adjacency: Adjacency,
    /// Scan rows on the rayon thread pool for large images
    pub parallel: bool,
    /// Rows per progress/cancellation checkpoint
    pub rows_per_band: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: DENOM / 10,
            max_hot_pixels: None,
            adjacency: Adjacency::EdgeOrCorner,
            parallel: true,
            rows_per_band: DEFAULT_ROWS_PER_BAND,
        }
    }
}

impl DetectorConfig {
    pub fn builder() -> DetectorConfigBuilder {
        DetectorConfigBuilder::default()
    }
}

/// Builder for DetectorConfig
#[derive(Default)]
pub struct DetectorConfigBuilder {
    threshold: Option<u64>,
    max_hot_pixels: Option<Option<usize>>,
    adjacency: Option<Adjacency>,
    parallel: Option<bool>,
    rows_per_band: Option<usize>,
}

impl DetectorConfigBuilder {
    /// Relative threshold; values above `DENOM` are clamped.
    pub fn threshold(mut self, threshold: u64) -> Self {
        self.threshold = Some(threshold.min(DENOM));
        self
    }

    /// Threshold as a fraction of full scale, e.g. `0.1` for 10%.
    ///
    /// Non-finite fractions leave the threshold unchanged.
    pub fn threshold_fraction(self, fraction: f64) -> Self {
        if !fraction.is_finite() {
            return self;
        }
        let rel = (fraction.clamp(0.0, 1.0) * DENOM as f64).round() as u64;
        self.threshold(rel)
    }

    pub fn max_hot_pixels(mut self, max: Option<usize>) -> Self {
        self.max_hot_pixels = Some(max);
        self
    }

    pub fn adjacency(mut self, adjacency: Adjacency) -> Self {
        self.adjacency = Some(adjacency);
        self
    }

    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = Some(enable);
        self
    }

    /// Zero is treated as one.
    pub fn rows_per_band(mut self, rows: usize) -> Self {
        self.rows_per_band = Some(rows.max(1));
        self
    }

    pub fn build(self) -> DetectorConfig {
        let default = DetectorConfig::default();
        DetectorConfig {
            threshold: self.threshold.unwrap_or(default.threshold),
            max_hot_pixels: self.max_hot_pixels.unwrap_or(default.max_hot_pixels),
            adjacency: self.adjacency.unwrap_or(default.adjacency),
            parallel: self.parallel.unwrap_or(default.parallel),
            rows_per_band: self.rows_per_band.unwrap_or(default.rows_per_band),
        }
    }
}
