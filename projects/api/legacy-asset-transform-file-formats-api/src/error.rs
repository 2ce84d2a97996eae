//! Error types for transform operations.

use legacy_asset_transform_packed_pixel::PackedPixelError;
use legacy_asset_transform_rle8::Rle8Error;
use thiserror::Error;

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for format handler operations
pub type FormatHandlerResult<T> = Result<T, FormatHandlerError>;

/// Errors specific to file format handlers (DIB, Mappy, etc.)
///
/// These errors occur when a handler parses or validates the container around the data a raw
/// transform operates on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatHandlerError {
    /// Could not parse input file header during transform operation
    #[error("Invalid input file header during transform")]
    InvalidInputFileHeader,

    /// A chunk the handler needs is not present in the input
    #[error("Missing '{0}' chunk")]
    MissingChunk(&'static str),

    /// Input buffer is too short for the operation
    #[error("Input buffer too short: required at least {required} bytes, got {actual} bytes")]
    InputTooShort { required: usize, actual: usize },
}

/// Errors that can occur while transforming a resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Format handler error
    #[error("Format handler error: {0}")]
    FormatHandler(#[from] FormatHandlerError),

    /// RLE8 decode error
    #[error("RLE8 decode error: {0}")]
    Rle8(#[from] Rle8Error),

    /// Packed pixel conversion error
    #[error("Packed pixel conversion error: {0}")]
    PackedPixel(#[from] PackedPixelError),

    /// None of the provided handlers accepted the input
    #[error("No handler supports this file")]
    NoSupportedHandler,
}
