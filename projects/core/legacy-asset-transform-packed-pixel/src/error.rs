//! Error types for packed pixel conversion.

use thiserror::Error;

/// Errors that can occur while converting a packed pixel region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PackedPixelError {
    /// Packed pixels are two bytes each; the region has a dangling byte.
    #[error("Packed pixel region has odd length {0}")]
    OddRegionLength(usize),

    /// The pixmap width must be at least one pixel.
    #[error("Pixmap width must be non-zero")]
    ZeroWidth,

    /// The output buffer cannot hold the converted pixels.
    #[error("Output buffer too small: required {required} bytes, got {actual} bytes")]
    OutputBufferTooSmall { required: usize, actual: usize },
}
