//! Bayer mosaic adapter
//!
//! Black frames straight off a sensor are single-channel CFA mosaics. This
//! module demosaics an already decoded mosaic into an [`RgbBitmap`] the
//! detector can scan.
//!
//! [`RgbBitmap`]: crate::hot_pixels::RgbBitmap

pub mod cpu_demosaic;
pub mod types;

#[cfg(test)]
mod tests;

pub use cpu_demosaic::CpuDemosaic;
pub use types::{BayerFrame, CfaPattern, DemosaicMethod};
