//! Hot pixel correction
//!
//! Repairs the clusters found on a black frame in an image shot with the same
//! sensor, by interpolating from the clean pixels around each cluster.

mod hot_pixel_fixer;

#[cfg(test)]
mod tests;

pub use hot_pixel_fixer::{HotPixelFixer, InterpolationMethod};
