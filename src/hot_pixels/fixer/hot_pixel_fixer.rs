use tracing::{debug, instrument, trace};

use crate::hot_pixels::bitmap::RgbBitmap;
use crate::hot_pixels::detector::HotPixel;

/// How replacement values are computed for a hot pixel cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMethod {
    /// Mean of the clean pixels on the ring around the cluster
    #[default]
    Average,
    /// Per-pixel linear interpolation along the row and the column, averaged
    Linear,
}

/// Marks which pixels belong to any hot pixel cluster.
struct DefectMask {
    width: usize,
    height: usize,
    hot: Vec<bool>,
}

impl DefectMask {
    fn new(width: usize, height: usize, hot_pixels: &[HotPixel]) -> Self {
        let mut hot = vec![false; width * height];
        for hp in hot_pixels {
            let (xs, ys) = clipped(hp, width, height);
            for y in ys {
                for x in xs.clone() {
                    hot[y * width + x] = true;
                }
            }
        }
        Self { width, height, hot }
    }

    fn is_clean(&self, x: i64, y: i64) -> bool {
        x >= 0
            && y >= 0
            && (x as usize) < self.width
            && (y as usize) < self.height
            && !self.hot[y as usize * self.width + x as usize]
    }
}

fn clipped(
    hp: &HotPixel,
    width: usize,
    height: usize,
) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
    let x0 = (hp.rect.x() as usize).min(width);
    let y0 = (hp.rect.y() as usize).min(height);
    let x1 = (hp.rect.right() as usize).min(width);
    let y1 = (hp.rect.bottom() as usize).min(height);
    (x0..x1, y0..y1)
}

fn mean(samples: &[[u16; 3]]) -> Option<[f64; 3]> {
    if samples.is_empty() {
        return None;
    }
    let mut sum = [0.0f64; 3];
    for s in samples {
        for c in 0..3 {
            sum[c] += s[c] as f64;
        }
    }
    let n = samples.len() as f64;
    Some([sum[0] / n, sum[1] / n, sum[2] / n])
}

fn to_rgb(value: [f64; 3], max: u16) -> [u16; 3] {
    value.map(|v| v.round().clamp(0.0, max as f64) as u16)
}

/// Replaces hot pixel clusters with values interpolated from their surroundings.
#[derive(Debug, Clone, Copy, Default)]
pub struct HotPixelFixer {
    method: InterpolationMethod,
}

impl HotPixelFixer {
    pub fn new(method: InterpolationMethod) -> Self {
        Self { method }
    }

    pub fn method(&self) -> InterpolationMethod {
        self.method
    }

    /// Repairs every cluster in place and returns how many were repaired.
    ///
    /// Clusters are clipped to the bitmap. A cluster without a single clean
    /// neighbour is left as is.
    #[instrument(skip_all, fields(regions = hot_pixels.len(), method = ?self.method))]
    pub fn fix(&self, bitmap: &mut RgbBitmap, hot_pixels: &[HotPixel]) -> usize {
        if bitmap.is_empty() || hot_pixels.is_empty() {
            return 0;
        }

        let mask = DefectMask::new(bitmap.width(), bitmap.height(), hot_pixels);
        let mut fixed = 0;
        for hp in hot_pixels {
            if self.fix_region(bitmap, &mask, hp) {
                fixed += 1;
            }
        }

        debug!(fixed, total = hot_pixels.len(), "Hot pixel correction complete");
        fixed
    }

    fn fix_region(&self, bitmap: &mut RgbBitmap, mask: &DefectMask, hp: &HotPixel) -> bool {
        let (xs, ys) = clipped(hp, bitmap.width(), bitmap.height());
        if xs.is_empty() || ys.is_empty() {
            return false;
        }

        let average = self.ring_average(bitmap, mask, hp);
        let max = bitmap.max_channel_value();

        match self.method {
            InterpolationMethod::Average => {
                let Some(average) = average else {
                    trace!(rect = ?hp.rect, "No clean neighbours");
                    return false;
                };
                let rgb = to_rgb(average, max);
                for y in ys {
                    for x in xs.clone() {
                        bitmap.set_pixel(x, y, rgb);
                    }
                }
                true
            }
            InterpolationMethod::Linear => {
                let mut repaired = false;
                for y in ys {
                    for x in xs.clone() {
                        let horizontal = self.along(bitmap, mask, x, y, (1, 0));
                        let vertical = self.along(bitmap, mask, x, y, (0, 1));
                        let value = match (horizontal, vertical) {
                            (Some(h), Some(v)) => Some([0usize, 1, 2].map(|c| (h[c] + v[c]) / 2.0)),
                            (Some(one), None) | (None, Some(one)) => Some(one),
                            (None, None) => average,
                        };
                        if let Some(value) = value {
                            bitmap.set_pixel(x, y, to_rgb(value, max));
                            repaired = true;
                        }
                    }
                }
                repaired
            }
        }
    }

    /// Mean of the clean pixels on the one-pixel ring around the cluster.
    fn ring_average(&self, bitmap: &RgbBitmap, mask: &DefectMask, hp: &HotPixel) -> Option<[f64; 3]> {
        let left = hp.rect.x() as i64 - 1;
        let top = hp.rect.y() as i64 - 1;
        let right = hp.rect.right() as i64;
        let bottom = hp.rect.bottom() as i64;

        let mut samples = Vec::new();
        for y in top..=bottom {
            for x in left..=right {
                let on_ring = x == left || x == right || y == top || y == bottom;
                if on_ring && mask.is_clean(x, y) {
                    samples.push(bitmap.pixel(x as usize, y as usize));
                }
            }
        }
        mean(&samples)
    }

    /// Linear estimate for `(x, y)` from the nearest clean pixels on either
    /// side along `step`; a single side is copied.
    fn along(
        &self,
        bitmap: &RgbBitmap,
        mask: &DefectMask,
        x: usize,
        y: usize,
        step: (i64, i64),
    ) -> Option<[f64; 3]> {
        let nearest = |sign: i64| -> Option<(i64, [u16; 3])> {
            let mut d = 1;
            loop {
                let cx = x as i64 + sign * step.0 * d;
                let cy = y as i64 + sign * step.1 * d;
                if cx < 0 || cy < 0 || cx as usize >= bitmap.width() || cy as usize >= bitmap.height() {
                    return None;
                }
                if mask.is_clean(cx, cy) {
                    return Some((d, bitmap.pixel(cx as usize, cy as usize)));
                }
                d += 1;
            }
        };

        match (nearest(-1), nearest(1)) {
            (Some((dl, l)), Some((dr, r))) => {
                let t = dl as f64 / (dl + dr) as f64;
                Some([0usize, 1, 2].map(|c| l[c] as f64 + (r[c] as f64 - l[c] as f64) * t))
            }
            (Some((_, v)), None) | (None, Some((_, v))) => Some(v.map(|c| c as f64)),
            (None, None) => None,
        }
    }
}
