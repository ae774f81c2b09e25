use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Pixel buffer has {actual} samples, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Unsupported bit depth: {0} (expected 1..=16)")]
    UnsupportedBitDepth(u32),

    #[error("Hot pixel detection cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, DetectorError>;
