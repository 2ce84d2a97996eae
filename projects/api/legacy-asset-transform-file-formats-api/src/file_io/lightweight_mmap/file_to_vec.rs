//! File-to-memory transformation operations.

use super::with_mapped_input;
use crate::file_io::FileOperationResult;
use crate::handlers::FileFormatHandler;
use std::path::Path;
use std::vec::Vec;

/// Transform a memory-mapped file and return the output file contents.
///
/// An unchanged input is returned as a copy.
pub fn transform_file_to_vec<H: FileFormatHandler>(
    handler: &H,
    input_path: &Path,
) -> FileOperationResult<Vec<u8>> {
    with_mapped_input(input_path, |input| {
        Ok(crate::api::transform_slice_to_vec(handler, input)?)
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_prelude::*;

    #[test]
    fn returns_handler_output() {
        let input_file = create_input_file_with_data_and_extension(b"MThd", Some("mid"));
        let output = transform_file_to_vec(&PassthroughHandler::midi(), input_file.path()).unwrap();
        assert_eq!(output, b"MThd".to_vec());
    }
}
