use anyhow::Result;
use bayer::{BayerDepth, RasterDepth, RasterMut};
use std::io::Cursor;
use tracing::debug;

use crate::hot_pixels::bitmap::RgbBitmap;
use crate::hot_pixels::mosaic::types::{BayerFrame, CfaPattern, DemosaicMethod};

/// Demosaics on the CPU with the `bayer` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuDemosaic {
    cfa: CfaPattern,
    method: DemosaicMethod,
}

impl CpuDemosaic {
    pub fn new(cfa: CfaPattern, method: DemosaicMethod) -> Self {
        Self { cfa, method }
    }

    /// Interpolates `frame` into an RGB bitmap of the same size and depth.
    pub fn process(&self, frame: &BayerFrame) -> Result<RgbBitmap> {
        let width = frame.width;
        let height = frame.height;
        if width == 0 || height == 0 {
            return Ok(RgbBitmap::blank(width, height, frame.bits_per_sample)?);
        }

        debug!(
            "Demosaicing {}x{} frame, {} bits, cfa={:?}, method={:?}",
            width, height, frame.bits_per_sample, self.cfa, self.method
        );

        // bayer crate only supports 8 and 16 bit
        let (bayer_depth, raster_depth, bytes_per_sample) = if frame.bits_per_sample <= 8 {
            (BayerDepth::Depth8, RasterDepth::Depth8, 1)
        } else {
            (BayerDepth::Depth16LE, RasterDepth::Depth16, 2)
        };

        let bayer_bytes: Vec<u8> = if bytes_per_sample == 1 {
            frame.data.iter().map(|&val| val as u8).collect()
        } else {
            frame.data.iter().flat_map(|&val| val.to_le_bytes()).collect()
        };

        let mut output_buf = vec![0u8; width * height * 3 * bytes_per_sample];
        let mut output_raster = RasterMut::new(width, height, raster_depth, &mut output_buf);

        bayer::run_demosaic(
            &mut Cursor::new(&bayer_bytes[..]),
            bayer_depth,
            self.cfa.into(),
            self.method.into(),
            &mut output_raster,
        )
        .map_err(|e| anyhow::anyhow!("Demosaic failed: {:?}", e))?;

        // 16-bit rasters are written in native byte order
        let rgb_data: Vec<u16> = if bytes_per_sample == 1 {
            output_buf.iter().map(|&b| b as u16).collect()
        } else {
            output_buf
                .chunks_exact(2)
                .map(|b| u16::from_ne_bytes([b[0], b[1]]))
                .collect()
        };

        Ok(RgbBitmap::new(width, height, frame.bits_per_sample, rgb_data)?)
    }
}
