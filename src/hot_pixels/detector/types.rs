//! Hot pixel region type

use crate::hot_pixels::geometry::Rect;

/// A hot pixel, or a cluster of them after consolidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HotPixel {
    /// Bounding box of the cluster
    pub rect: Rect,
    /// Peak channel value of the cluster on the `DENOM` scale
    pub luminosity: u64,
}

impl HotPixel {
    pub fn new(rect: Rect, luminosity: u64) -> Self {
        Self { rect, luminosity }
    }

    /// Fuses two regions: union bounding box, brightest luminosity wins.
    pub fn merged(&self, other: &HotPixel) -> HotPixel {
        HotPixel {
            rect: self.rect.union(&other.rect),
            luminosity: self.luminosity.max(other.luminosity),
        }
    }

    /// Maps the region from a black frame of size `from` onto an image of size `to`.
    pub fn scaled(&self, from: (u32, u32), to: (u32, u32)) -> HotPixel {
        HotPixel {
            rect: self.rect.scaled(from, to),
            luminosity: self.luminosity,
        }
    }
}
