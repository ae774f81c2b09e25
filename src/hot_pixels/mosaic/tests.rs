#[cfg(test)]
mod tests {
    use crate::hot_pixels::common::error::DetectorError;
    use crate::hot_pixels::detector::HotPixelDetector;
    use crate::hot_pixels::mosaic::{BayerFrame, CfaPattern, CpuDemosaic, DemosaicMethod};

    fn frame_with_hot_site(width: usize, height: usize, bits: u32, x: usize, y: usize) -> BayerFrame {
        let mut data = vec![0u16; width * height];
        data[y * width + x] = ((1u32 << bits) - 1) as u16;
        BayerFrame::new(width, height, bits, data).unwrap()
    }

    #[test]
    fn test_frame_buffer_checked() {
        let err = BayerFrame::new(4, 4, 12, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            DetectorError::BufferSizeMismatch { expected: 16, actual: 15 }
        ));
        assert!(BayerFrame::new(4, 4, 20, vec![0; 16]).is_err());
    }

    #[test]
    fn test_empty_frame() {
        let frame = BayerFrame::new(0, 0, 8, Vec::new()).unwrap();
        let bitmap = CpuDemosaic::default().process(&frame).unwrap();
        assert!(bitmap.is_empty());
    }

    #[test]
    fn test_dark_frame_stays_dark() {
        let frame = BayerFrame::new(6, 6, 8, vec![0; 36]).unwrap();
        let bitmap = CpuDemosaic::default().process(&frame).unwrap();
        assert_eq!(bitmap.width(), 6);
        assert_eq!(bitmap.height(), 6);
        assert!(bitmap.data().iter().all(|&v| v == 0));
        assert!(HotPixelDetector::default().detect(&bitmap).is_empty());
    }

    #[test]
    fn test_hot_photosite_becomes_one_region() {
        let frame = frame_with_hot_site(8, 8, 8, 4, 4);
        let demosaic = CpuDemosaic::new(CfaPattern::Rggb, DemosaicMethod::NearestNeighbour);
        let bitmap = demosaic.process(&frame).unwrap();
        assert_eq!(bitmap.bits_per_sample(), 8);

        let regions = HotPixelDetector::default().detect(&bitmap);
        assert_eq!(regions.len(), 1);
        assert!(regions[0].rect.contains(4, 4));
    }

    #[test]
    fn test_sixteen_bit_path_keeps_depth() {
        let frame = frame_with_hot_site(8, 8, 12, 4, 4);
        let bitmap = CpuDemosaic::default().process(&frame).unwrap();
        assert_eq!(bitmap.bits_per_sample(), 12);
        assert_eq!(bitmap.max_channel_value(), 4095);

        let regions = HotPixelDetector::default().detect(&bitmap);
        assert_eq!(regions.len(), 1);
        assert!(regions[0].rect.contains(4, 4));
    }
}
