//! Entry points for transforming in-memory resources.

use crate::error::TransformResult;
use crate::handlers::{FileFormatHandler, TransformOutput};
use alloc::vec::Vec;

/// Transforms `input` with a handler for a known format.
///
/// # Example
///
/// ```
/// use legacy_asset_transform_file_formats_api::{transform_slice, PassthroughHandler};
///
/// let output = transform_slice(&PassthroughHandler::wave(), b"RIFF").unwrap();
/// assert!(!output.is_converted());
/// ```
#[inline]
pub fn transform_slice<H: FileFormatHandler>(
    handler: &H,
    input: &[u8],
) -> TransformResult<TransformOutput> {
    handler.transform(input)
}

/// Transforms `input` and returns the bytes of the output file.
///
/// Unlike [`transform_slice`], an [`TransformOutput::Unchanged`] result is returned as a copy of
/// `input`.
pub fn transform_slice_to_vec<H: FileFormatHandler>(
    handler: &H,
    input: &[u8],
) -> TransformResult<Vec<u8>> {
    Ok(match handler.transform(input)? {
        TransformOutput::Converted(data) => data,
        TransformOutput::Unchanged => input.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[test]
    fn unchanged_output_is_copied() {
        let input = b"MThd\x00\x00\x00\x06";
        let output = transform_slice_to_vec(&PassthroughHandler::midi(), input).unwrap();
        assert_eq!(output, input.to_vec());
    }

    #[test]
    fn converted_output_is_returned() {
        let handler = MockHandler::new_extensionless_accepting();
        assert_eq!(transform_slice_to_vec(&handler, &[7, 8]).unwrap(), vec![7, 8]);
        assert!(handler.get_calls().transform_called);
    }
}
