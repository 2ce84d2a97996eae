//! Core trait for file format transformation.

use crate::error::TransformResult;
use alloc::vec::Vec;

/// Result of running a handler over a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutput {
    /// The handler produced new file contents.
    Converted(Vec<u8>),
    /// The input is already in its output form and should be written as is.
    Unchanged,
}

impl TransformOutput {
    /// Returns the bytes to write for this output, given the `input` it was produced from.
    #[inline]
    pub fn as_slice<'a>(&'a self, input: &'a [u8]) -> &'a [u8] {
        match self {
            TransformOutput::Converted(data) => data,
            TransformOutput::Unchanged => input,
        }
    }

    /// Returns `true` if the handler produced new contents.
    #[inline]
    pub fn is_converted(&self) -> bool {
        matches!(self, TransformOutput::Converted(_))
    }
}

/// Trait for handling specific file formats.
///
/// A handler takes the raw bytes of one resource and returns the contents of the file that
/// should be written for it. It contains no detection logic; see
/// [`FileFormatDetection`](crate::handlers::FileFormatDetection) for that.
pub trait FileFormatHandler: Send + Sync {
    /// Transforms `input`.
    ///
    /// # Returns
    ///
    /// [`TransformOutput::Unchanged`] when `input` needs no conversion, otherwise the converted
    /// file contents.
    fn transform(&self, input: &[u8]) -> TransformResult<TransformOutput>;

    /// Extension (lowercase, without leading dot) of the files this handler produces.
    fn output_extension(&self) -> &str;
}

impl<T: FileFormatHandler + ?Sized> FileFormatHandler for &T {
    #[inline]
    fn transform(&self, input: &[u8]) -> TransformResult<TransformOutput> {
        (**self).transform(input)
    }

    #[inline]
    fn output_extension(&self) -> &str {
        (**self).output_extension()
    }
}
