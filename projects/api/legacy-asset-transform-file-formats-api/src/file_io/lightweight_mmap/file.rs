//! File-to-file transformation operations using memory mapping.

use super::{extract_lowercase_extension, with_mapped_input, write_mapped_output};
use crate::file_io::{FileOperationResult, FileTransformStats};
use crate::handlers::{FileFormatDetection, FileFormatHandler};
use crate::TransformError;
use std::format;
use std::path::Path;

/// Transform a file using a specific handler.
///
/// The input is memory-mapped and the handler's output written to `output_path`. If the handler
/// reports the input as unchanged, the input bytes are copied.
///
/// # Arguments
///
/// * `handler` - The file format handler to use
/// * `input_path` - Path to the input file
/// * `output_path` - Path to the output file (will be created). The output directory must exist.
pub fn transform_file_with_handler<H: FileFormatHandler>(
    handler: &H,
    input_path: &Path,
    output_path: &Path,
) -> FileOperationResult<FileTransformStats> {
    with_mapped_input(input_path, |input| {
        let output = handler.transform(input)?;
        let data = output.as_slice(input);
        write_mapped_output(data, output_path)?;

        Ok(FileTransformStats {
            input_size: input.len(),
            output_size: data.len(),
            converted: output.is_converted(),
            output_path: output_path.to_path_buf(),
        })
    })
}

/// Transform a file using multiple handlers with automatic format detection.
///
/// Handlers are tried in sequence until one accepts the file. The output is written to
/// `<output_dir>/<output_stem>.<extension>`, where the extension is the accepting handler's
/// [`FileFormatHandler::output_extension`].
///
/// # Returns
///
/// [`TransformError::NoSupportedHandler`] if no handler can process the file. Nothing is
/// written in that case.
///
/// # Example
///
/// ```
/// use legacy_asset_transform_file_formats_api::file_io::{
///     transform_file_with_multiple_handlers, FileOperationResult, FileTransformStats,
/// };
/// use legacy_asset_transform_file_formats_api::PassthroughHandler;
/// use std::path::Path;
///
/// fn extract_audio(input: &Path, output_dir: &Path) -> FileOperationResult<FileTransformStats> {
///     let handlers = [PassthroughHandler::wave(), PassthroughHandler::midi()];
///     transform_file_with_multiple_handlers(handlers, input, output_dir, "sound")
/// }
/// ```
pub fn transform_file_with_multiple_handlers<HandlerIterator, Handler>(
    handlers: HandlerIterator,
    input_path: &Path,
    output_dir: &Path,
    output_stem: &str,
) -> FileOperationResult<FileTransformStats>
where
    HandlerIterator: IntoIterator<Item = Handler>,
    Handler: FileFormatDetection,
{
    // Extension is used to skip handlers early.
    let file_extension = extract_lowercase_extension(input_path);
    let file_extension_ref = file_extension.as_deref();

    with_mapped_input(input_path, |input| {
        for handler in handlers {
            if handler.can_handle(input, file_extension_ref) {
                let output_path =
                    output_dir.join(format!("{output_stem}.{}", handler.output_extension()));
                let output = handler.transform(input)?;
                let data = output.as_slice(input);
                write_mapped_output(data, &output_path)?;

                return Ok(FileTransformStats {
                    input_size: input.len(),
                    output_size: data.len(),
                    converted: output.is_converted(),
                    output_path,
                });
            }
        }

        Err(TransformError::NoSupportedHandler.into())
    })
}
