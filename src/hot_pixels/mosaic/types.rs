//! Bayer mosaic types

use crate::hot_pixels::bitmap::MAX_BITS_PER_SAMPLE;
use crate::hot_pixels::common::error::{DetectorError, Result};

/// Decoded single-channel sensor frame
#[derive(Debug, Clone)]
pub struct BayerFrame {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Raw photosite values, row-major
    pub data: Vec<u16>,
    /// Actual bits per sample from the sensor (e.g., 12, 14, or 16)
    pub bits_per_sample: u32,
}

impl BayerFrame {
    pub fn new(width: usize, height: usize, bits_per_sample: u32, data: Vec<u16>) -> Result<Self> {
        if bits_per_sample == 0 || bits_per_sample > MAX_BITS_PER_SAMPLE {
            return Err(DetectorError::UnsupportedBitDepth(bits_per_sample));
        }
        let expected = width
            .checked_mul(height)
            .ok_or(DetectorError::InvalidDimensions(width, height))?;
        if data.len() != expected {
            return Err(DetectorError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
            bits_per_sample,
        })
    }
}

/// Colour filter array layout, named by the top-left 2×2 block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CfaPattern {
    Bggr,
    Gbrg,
    Grbg,
    #[default]
    Rggb,
}

/// Interpolation used to fill in the missing channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemosaicMethod {
    /// Copy from the nearest photosite of each colour
    NearestNeighbour,
    /// Bilinear interpolation (default)
    #[default]
    Linear,
    /// Bicubic interpolation
    Cubic,
}

impl From<CfaPattern> for bayer::CFA {
    fn from(pattern: CfaPattern) -> Self {
        match pattern {
            CfaPattern::Bggr => bayer::CFA::BGGR,
            CfaPattern::Gbrg => bayer::CFA::GBRG,
            CfaPattern::Grbg => bayer::CFA::GRBG,
            CfaPattern::Rggb => bayer::CFA::RGGB,
        }
    }
}

impl From<DemosaicMethod> for bayer::Demosaic {
    fn from(method: DemosaicMethod) -> Self {
        match method {
            DemosaicMethod::NearestNeighbour => bayer::Demosaic::NearestNeighbour,
            DemosaicMethod::Linear => bayer::Demosaic::Linear,
            DemosaicMethod::Cubic => bayer::Demosaic::Cubic,
        }
    }
}
