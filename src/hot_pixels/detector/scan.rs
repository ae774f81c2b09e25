//! Threshold scan of a black frame.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::hot_pixels::bitmap::RgbBitmap;
use crate::hot_pixels::common::error::{DetectorError, Result};
use crate::hot_pixels::common::fixed_point::{abs_to_luminosity, rel_to_abs};
use crate::hot_pixels::detector::config::DetectorConfig;
use crate::hot_pixels::detector::progress::{CancelToken, ProgressSink};
use crate::hot_pixels::detector::types::HotPixel;
use crate::hot_pixels::geometry::Rect;

/// Images with fewer pixels than this are scanned on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 256 * 256;

pub(crate) struct ScanOutcome {
    pub hot_pixels: Vec<HotPixel>,
    pub rows_scanned: usize,
    pub truncated: bool,
}

/// Absolute threshold for the bitmap's sample depth.
pub fn threshold_value(config: &DetectorConfig, bitmap: &RgbBitmap) -> u16 {
    rel_to_abs(config.threshold, bitmap.max_channel_value() as u64) as u16
}

pub(crate) fn scan(
    bitmap: &RgbBitmap,
    config: &DetectorConfig,
    cancel: &CancelToken,
    progress: &dyn ProgressSink,
) -> Result<ScanOutcome> {
    let height = bitmap.height();
    let threshold = threshold_value(config, bitmap);
    let max = bitmap.max_channel_value() as u64;
    let parallel = config.parallel && bitmap.width() * height >= PARALLEL_THRESHOLD;

    debug!(threshold, parallel, "Scanning {}x{} frame", bitmap.width(), height);

    let mut outcome = ScanOutcome {
        hot_pixels: Vec::new(),
        rows_scanned: 0,
        truncated: false,
    };
    let mut last_percent = None;

    if !bitmap.is_empty() {
        'bands: for band_start in (0..height).step_by(config.rows_per_band) {
            if cancel.is_cancelled() {
                return Err(DetectorError::Cancelled);
            }

            let band = band_start..(band_start + config.rows_per_band).min(height);
            let rows: Vec<Vec<HotPixel>> = if parallel {
                band.into_par_iter()
                    .map(|y| scan_row(bitmap, y, threshold, max))
                    .collect()
            } else {
                band.map(|y| scan_row(bitmap, y, threshold, max)).collect()
            };

            for row in rows {
                outcome.hot_pixels.extend(row);
                outcome.rows_scanned += 1;
                if config
                    .max_hot_pixels
                    .is_some_and(|cap| outcome.hot_pixels.len() > cap)
                {
                    outcome.truncated = true;
                    break 'bands;
                }
            }

            let percent = (outcome.rows_scanned * 100 / height) as u8;
            trace!(rows = outcome.rows_scanned, percent, "Band scanned");
            progress.on_progress(percent);
            last_percent = Some(percent);
        }
    }

    if last_percent != Some(100) {
        progress.on_progress(100);
    }

    Ok(outcome)
}

fn scan_row(bitmap: &RgbBitmap, y: usize, threshold: u16, max: u64) -> Vec<HotPixel> {
    bitmap
        .row(y)
        .chunks_exact(3)
        .enumerate()
        .filter_map(|(x, rgb)| {
            let max_value = rgb[0].max(rgb[1]).max(rgb[2]);
            (max_value > threshold).then(|| {
                HotPixel::new(
                    Rect::cell(x as u32, y as u32),
                    abs_to_luminosity(max_value as u64, max),
                )
            })
        })
        .collect()
}
