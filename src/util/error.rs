//! Error types for heatscan.

use thiserror::Error;

/// Result alias for heatscan operations.
pub type HeatscanResult<T> = std::result::Result<T, HeatscanError>;

/// Errors that can occur when planning or running a detection scan.
#[derive(Debug, Error, PartialEq)]
pub enum HeatscanError {
    /// Image dimensions are zero or overflow the address space.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The row stride is smaller than the image width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// The backing buffer is too small for the requested view.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A crop rectangle has no in-bounds area.
    #[error("roi ({x},{y}) {width}x{height} outside image {img_width}x{img_height}")]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// Window overlap of 1.0 (or a zero window size) yields a zero step,
    /// which would never advance along the axis.
    #[error("zero step on {axis} axis (overlap {overlap})")]
    ZeroStep { axis: &'static str, overlap: f32 },
    /// A tier index beyond the registry length.
    #[error("tier index {index} out of range (registry has {len} tiers)")]
    TierOutOfRange { index: usize, len: usize },
    /// The external classifier failed; fatal to the current scan.
    #[error("classifier failure: {reason}")]
    Classifier { reason: String },
    /// Image decode/encode failure (feature `image-io`).
    #[cfg(feature = "image-io")]
    #[error("image io failure: {reason}")]
    ImageIo { reason: String },
}
