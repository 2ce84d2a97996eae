//! Error types for RLE8 decoding.

use thiserror::Error;

/// The bitmap header describes an image this decoder does not handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Plane count must be 1.
    #[error("Invalid plane count: expected 1, got {0}")]
    InvalidPlanes(u16),

    /// Only 8 bits per pixel can be RLE8 encoded.
    #[error("Unsupported bit count: expected 8, got {0}")]
    UnsupportedBitCount(u16),

    /// Only `BI_RLE8` (1) is supported.
    #[error("Unsupported compression method: expected 1 (RLE8), got {0}")]
    UnsupportedCompression(u32),

    /// The palette must hold exactly 256 entries.
    #[error("Unsupported palette size: expected 256 entries, got {0}")]
    UnsupportedPaletteSize(u16),

    /// Width and height must both be positive.
    #[error("Invalid bitmap dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// `width × height` does not fit in memory.
    #[error("Bitmap dimensions {width}x{height} overflow the pixel count")]
    DimensionsOverflow { width: usize, height: usize },
}

/// Errors that can occur while decoding an RLE8 stream or bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rle8Error {
    /// The bitmap header failed validation.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A token needs bytes past the end of the compressed stream.
    #[error("Truncated RLE8 stream: token at offset {offset} runs past the end of the {stream_len} byte stream")]
    TruncatedInput { offset: usize, stream_len: usize },

    /// The buffer cannot hold the header, palette and declared compressed stream.
    #[error("Bitmap buffer too short: required at least {required} bytes, got {actual} bytes")]
    BufferTooShort { required: usize, actual: usize },

    /// The output buffer cannot hold `width × height` pixels.
    #[error("Output buffer too small: required {required} bytes, got {actual} bytes")]
    OutputBufferTooSmall { required: usize, actual: usize },

    /// A token wrote outside the `width × height` pixel array.
    #[error("Pixel write at ({x}, {y}) is outside the {width}x{height} bitmap")]
    PixelOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}
