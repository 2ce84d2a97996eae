//! Trait for file format detection.

use crate::handlers::FileFormatHandler;

/// Trait for detecting the format of a file before transforming it.
///
/// Use this for tools processing files of unknown type. When the format is known (e.g. from
/// the resource catalog), call the [`FileFormatHandler`] directly.
///
/// ***Important***: inputs can be arbitrary bytes. Check lengths before reading any field.
pub trait FileFormatDetection: FileFormatHandler {
    /// Check if this handler can process the input data.
    ///
    /// # Parameters
    ///
    /// - `input`: The input file data to analyze
    /// - `file_extension`: Lowercase extension of the file without the leading dot, if the file
    ///   has one. Handlers reject extensions they do not know, which keeps false positives down.
    fn can_handle(&self, input: &[u8], file_extension: Option<&str>) -> bool;
}

impl<T: FileFormatDetection + ?Sized> FileFormatDetection for &T {
    #[inline]
    fn can_handle(&self, input: &[u8], file_extension: Option<&str>) -> bool {
        (**self).can_handle(input, file_extension)
    }
}
