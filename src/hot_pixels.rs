//! Black frame hot pixel module
//!
//! Finds stuck sensor elements on a black frame and repairs them in images
//! shot with the same sensor. Callers decode images themselves and hand over
//! pixel data; nothing here touches the filesystem.

pub mod bitmap;
pub mod common;
pub mod detector;
pub mod fixer;
pub mod geometry;
pub mod mosaic;

pub use common::{DENOM, DetectorError, Result};

pub use bitmap::RgbBitmap;

pub use geometry::{Adjacency, Rect};

pub use detector::{
    CancelToken, Detection, DetectorConfig, DetectorConfigBuilder, HotPixel, HotPixelDetector,
    LogProgress, NoProgress, PhaseTimings, ProgressSink, consolidate,
};

pub use fixer::{HotPixelFixer, InterpolationMethod};

pub use mosaic::{BayerFrame, CfaPattern, CpuDemosaic, DemosaicMethod};
