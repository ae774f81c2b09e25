use blackframe_rs::hot_pixels::detector::DEFAULT_MAX_HOT_PIXELS;
use blackframe_rs::hot_pixels::{
    CancelToken, DetectorConfig, HotPixelDetector, HotPixelFixer, InterpolationMethod,
    LogProgress, RgbBitmap,
};
use blackframe_rs::logger;

use tracing::{info, warn};

const WIDTH: usize = 640;
const HEIGHT: usize = 480;

/// Dark frame with a few stuck photosites, including a 2x2 cluster.
fn synthetic_black_frame() -> anyhow::Result<RgbBitmap> {
    let mut frame = RgbBitmap::blank(WIDTH, HEIGHT, 8)?;
    for (i, (x, y)) in [(17, 23), (300, 200), (301, 200), (300, 201), (301, 201), (639, 479)]
        .into_iter()
        .enumerate()
    {
        frame.set_pixel(x, y, [255, (i * 40) as u16, 12]);
    }
    // Dark current noise stays below the threshold.
    for y in (0..HEIGHT).step_by(7) {
        for x in (0..WIDTH).step_by(5) {
            frame.set_pixel(x, y, [(x + y) as u16 % 20, 3, 5]);
        }
    }
    Ok(frame)
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting blackframe...");

    let config = DetectorConfig::builder()
        .threshold_fraction(0.1)
        .max_hot_pixels(Some(DEFAULT_MAX_HOT_PIXELS))
        .build();
    let detector = HotPixelDetector::new(config);

    let black_frame = synthetic_black_frame()?;
    let detection = detector.detect_with(&black_frame, &CancelToken::new(), &LogProgress)?;

    if detection.truncated {
        warn!("Hot pixel list truncated after {} rows", detection.rows_scanned);
    }
    for hp in &detection.hot_pixels {
        info!(
            "Hot pixel at ({}, {}) {}x{}, luminosity {}",
            hp.rect.x(),
            hp.rect.y(),
            hp.rect.width(),
            hp.rect.height(),
            hp.luminosity
        );
    }
    detection.timings.log_summary();

    // Same sensor, photo taken at full resolution.
    let mut photo = RgbBitmap::new(WIDTH * 2, HEIGHT * 2, 8, vec![90; WIDTH * HEIGHT * 12])?;
    let from = (WIDTH as u32, HEIGHT as u32);
    let to = (photo.width() as u32, photo.height() as u32);
    let regions: Vec<_> = detection
        .hot_pixels
        .iter()
        .map(|hp| hp.scaled(from, to))
        .collect();

    let fixer = HotPixelFixer::new(InterpolationMethod::Linear);
    let fixed = fixer.fix(&mut photo, &regions);
    info!("Repaired {} of {} hot pixel regions", fixed, regions.len());

    Ok(())
}
