//! Memory-to-file transformation operations.

use super::write_mapped_output;
use crate::file_io::{FileOperationResult, FileTransformStats};
use crate::handlers::FileFormatHandler;
use std::path::Path;

/// Transform an in-memory resource and write the output to `output_path`.
///
/// The output directory must exist.
pub fn transform_slice_to_file<H: FileFormatHandler>(
    handler: &H,
    input: &[u8],
    output_path: &Path,
) -> FileOperationResult<FileTransformStats> {
    let output = handler.transform(input)?;
    let data = output.as_slice(input);
    write_mapped_output(data, output_path)?;

    Ok(FileTransformStats {
        input_size: input.len(),
        output_size: data.len(),
        converted: output.is_converted(),
        output_path: output_path.to_path_buf(),
    })
}
