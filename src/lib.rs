pub mod hot_pixels;
pub mod logger;
