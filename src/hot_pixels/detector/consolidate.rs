//! Merging of adjacent hot pixels into clusters.

use crate::hot_pixels::detector::types::HotPixel;
use crate::hot_pixels::geometry::Adjacency;

/// Fuses every pair of regions that overlap or touch until no such pair is left.
///
/// Regions keep the position of the earliest member of their cluster, so a
/// raster-ordered input yields clusters ordered by their first hot pixel.
/// Running it again on its own output changes nothing.
pub fn consolidate(hot_pixels: Vec<HotPixel>, adjacency: Adjacency) -> Vec<HotPixel> {
    let mut regions = hot_pixels;

    loop {
        let mut changed = false;
        let mut i = 0;
        while i < regions.len() {
            let mut j = i + 1;
            while j < regions.len() {
                if regions[i].rect.is_adjacent(&regions[j].rect, adjacency) {
                    let absorbed = regions.remove(j);
                    regions[i] = regions[i].merged(&absorbed);
                    changed = true;
                    // Region i grew; earlier non-neighbours may touch it now.
                    j = i + 1;
                } else {
                    j += 1;
                }
            }
            i += 1;
        }
        // A grown region may now reach one that precedes it.
        if !changed {
            break;
        }
    }

    regions
}

/// True when no two regions would merge under `adjacency`.
pub fn is_consolidated(regions: &[HotPixel], adjacency: Adjacency) -> bool {
    regions.iter().enumerate().all(|(i, a)| {
        regions[i + 1..]
            .iter()
            .all(|b| !a.rect.is_adjacent(&b.rect, adjacency))
    })
}
