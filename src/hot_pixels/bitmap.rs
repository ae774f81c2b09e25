//! Decoded RGB bitmap types

use crate::hot_pixels::common::error::{DetectorError, Result};

/// Highest supported sample depth.
pub const MAX_BITS_PER_SAMPLE: u32 = 16;

/// Decoded RGB image handed to the detector and the fixer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbBitmap {
    width: usize,
    height: usize,
    /// Declared sample depth (e.g., 8 for ordinary images, 12-16 for sensor data)
    bits_per_sample: u32,
    /// RGB samples interleaved [R, G, B, R, G, B, ...], row-major
    data: Vec<u16>,
}

impl RgbBitmap {
    /// Wraps an interleaved RGB buffer.
    ///
    /// Zero-sized bitmaps are valid. Sample values above the declared depth
    /// are not checked.
    pub fn new(width: usize, height: usize, bits_per_sample: u32, data: Vec<u16>) -> Result<Self> {
        if bits_per_sample == 0 || bits_per_sample > MAX_BITS_PER_SAMPLE {
            return Err(DetectorError::UnsupportedBitDepth(bits_per_sample));
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
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
            bits_per_sample,
            data,
        })
    }

    /// 8-bit bitmap from interleaved RGB bytes.
    pub fn from_rgb8(width: usize, height: usize, bytes: &[u8]) -> Result<Self> {
        Self::new(width, height, 8, bytes.iter().map(|&b| b as u16).collect())
    }

    /// All-black bitmap.
    pub fn blank(width: usize, height: usize, bits_per_sample: u32) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(DetectorError::InvalidDimensions(width, height))?;
        Self::new(width, height, bits_per_sample, vec![0; len])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bits_per_sample(&self) -> u32 {
        self.bits_per_sample
    }

    pub fn max_channel_value(&self) -> u16 {
        ((1u32 << self.bits_per_sample) - 1) as u16
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn data(&self) -> &[u16] {
        &self.data
    }

    /// Samples of row `y`, three per pixel.
    pub fn row(&self, y: usize) -> &[u16] {
        let stride = self.width * 3;
        &self.data[y * stride..(y + 1) * stride]
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the bitmap.
    pub fn pixel(&self, x: usize, y: usize) -> [u16; 3] {
        let i = self.index(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the bitmap.
    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u16; 3]) {
        let i = self.index(x, y);
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} bitmap",
            self.width,
            self.height
        );
        (y * self.width + x) * 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size_checked() {
        let err = RgbBitmap::new(2, 2, 8, vec![0; 11]).unwrap_err();
        assert!(matches!(
            err,
            DetectorError::BufferSizeMismatch { expected: 12, actual: 11 }
        ));
    }

    #[test]
    fn test_bit_depth_checked() {
        assert!(matches!(
            RgbBitmap::blank(1, 1, 0),
            Err(DetectorError::UnsupportedBitDepth(0))
        ));
        assert!(matches!(
            RgbBitmap::blank(1, 1, 17),
            Err(DetectorError::UnsupportedBitDepth(17))
        ));
    }

    #[test]
    fn test_zero_sized_is_valid() {
        let bitmap = RgbBitmap::blank(0, 0, 8).unwrap();
        assert!(bitmap.is_empty());
        assert!(RgbBitmap::blank(5, 0, 8).unwrap().is_empty());
    }

    #[test]
    fn test_pixel_access() {
        let mut bitmap = RgbBitmap::blank(3, 2, 12).unwrap();
        bitmap.set_pixel(2, 1, [1, 2, 4095]);
        assert_eq!(bitmap.pixel(2, 1), [1, 2, 4095]);
        assert_eq!(bitmap.row(1)[6..9], [1, 2, 4095]);
        assert_eq!(bitmap.max_channel_value(), 4095);
    }

    #[test]
    fn test_from_rgb8() {
        let bitmap = RgbBitmap::from_rgb8(1, 1, &[10, 20, 30]).unwrap();
        assert_eq!(bitmap.pixel(0, 0), [10, 20, 30]);
        assert_eq!(bitmap.max_channel_value(), 255);
    }
}
