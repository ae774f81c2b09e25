#[cfg(test)]
mod tests {
    use crate::hot_pixels::bitmap::RgbBitmap;
    use crate::hot_pixels::detector::{HotPixel, HotPixelDetector};
    use crate::hot_pixels::fixer::{HotPixelFixer, InterpolationMethod};
    use crate::hot_pixels::geometry::Rect;

    fn flat(width: usize, height: usize, value: u16) -> RgbBitmap {
        RgbBitmap::new(width, height, 8, vec![value; width * height * 3]).unwrap()
    }

    fn hot(x: u32, y: u32, w: u32, h: u32) -> HotPixel {
        HotPixel::new(Rect::new(x, y, w, h).unwrap(), 0)
    }

    #[test]
    fn test_average_replaces_single_pixel() {
        let mut bitmap = flat(5, 5, 100);
        bitmap.set_pixel(2, 2, [255, 255, 255]);

        let fixed = HotPixelFixer::new(InterpolationMethod::Average).fix(&mut bitmap, &[hot(2, 2, 1, 1)]);

        assert_eq!(fixed, 1);
        assert_eq!(bitmap, flat(5, 5, 100));
    }

    #[test]
    fn test_average_ignores_other_clusters() {
        let mut bitmap = flat(5, 5, 100);
        bitmap.set_pixel(2, 2, [255, 0, 0]);
        bitmap.set_pixel(3, 3, [0, 0, 255]);

        let fixer = HotPixelFixer::default();
        let fixed = fixer.fix(&mut bitmap, &[hot(2, 2, 1, 1), hot(3, 3, 1, 1)]);

        assert_eq!(fixed, 2);
        assert_eq!(bitmap, flat(5, 5, 100));
    }

    #[test]
    fn test_linear_restores_gradient() {
        let mut data = Vec::new();
        for _y in 0..3 {
            for x in 0..6u16 {
                data.extend([10 * x, 10 * x, 10 * x]);
            }
        }
        let original = RgbBitmap::new(6, 3, 8, data).unwrap();
        let mut bitmap = original.clone();
        bitmap.set_pixel(2, 1, [255, 255, 255]);
        bitmap.set_pixel(3, 1, [255, 255, 255]);

        let fixed = HotPixelFixer::new(InterpolationMethod::Linear).fix(&mut bitmap, &[hot(2, 1, 2, 1)]);

        assert_eq!(fixed, 1);
        assert_eq!(bitmap, original);
    }

    #[test]
    fn test_linear_at_border_copies_single_side() {
        let mut bitmap = flat(3, 1, 40);
        bitmap.set_pixel(0, 0, [255, 255, 255]);

        HotPixelFixer::new(InterpolationMethod::Linear).fix(&mut bitmap, &[hot(0, 0, 1, 1)]);

        assert_eq!(bitmap.pixel(0, 0), [40, 40, 40]);
    }

    #[test]
    fn test_cluster_without_clean_neighbours_untouched() {
        let mut bitmap = flat(2, 2, 200);
        let before = bitmap.clone();

        for method in [InterpolationMethod::Average, InterpolationMethod::Linear] {
            let fixed = HotPixelFixer::new(method).fix(&mut bitmap, &[hot(0, 0, 2, 2)]);
            assert_eq!(fixed, 0);
            assert_eq!(bitmap, before);
        }
    }

    #[test]
    fn test_region_clipped_to_bitmap() {
        let mut bitmap = flat(4, 4, 10);
        bitmap.set_pixel(3, 3, [255, 255, 255]);

        let fixed = HotPixelFixer::default().fix(&mut bitmap, &[hot(3, 3, 5, 5), hot(9, 9, 1, 1)]);

        assert_eq!(fixed, 1);
        assert_eq!(bitmap, flat(4, 4, 10));
    }

    #[test]
    fn test_black_frame_map_applied_at_double_resolution() {
        let mut black_frame = RgbBitmap::blank(10, 10, 8).unwrap();
        black_frame.set_pixel(4, 4, [255, 0, 0]);
        black_frame.set_pixel(5, 4, [0, 255, 0]);
        let regions = HotPixelDetector::default().detect(&black_frame);
        assert_eq!(regions.len(), 1);

        let scaled: Vec<HotPixel> = regions
            .iter()
            .map(|hp| hp.scaled((10, 10), (20, 20)))
            .collect();
        assert_eq!(scaled[0].rect, Rect::new(8, 8, 4, 2).unwrap());

        let mut photo = flat(20, 20, 50);
        for y in 8..10 {
            for x in 8..12 {
                photo.set_pixel(x, y, [250, 250, 250]);
            }
        }

        for method in [InterpolationMethod::Average, InterpolationMethod::Linear] {
            let mut repaired = photo.clone();
            HotPixelFixer::new(method).fix(&mut repaired, &scaled);
            assert_eq!(repaired, flat(20, 20, 50));
        }
    }
}
