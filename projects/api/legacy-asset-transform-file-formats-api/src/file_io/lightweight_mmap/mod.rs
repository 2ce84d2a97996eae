//! Memory-mapped file operations.
//!
//! - File to file transformations
//! - File to vec transformations
//! - Slice to file transformations
//!
//! Each comes in a single handler variant, and file to file also in a multiple handler
//! (detection) variant.

use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;
use std::string::String;

use crate::file_io::FileOperationResult;

pub mod file;
pub mod file_to_vec;
pub mod slice_to_file;

#[cfg(test)]
pub mod test_prelude;

pub use file::*;
pub use file_to_vec::*;
pub use slice_to_file::*;

/// Extract file extension from a path and convert to lowercase.
///
/// # Returns
///
/// * `Some(extension)` - The lowercase extension string without leading dot
/// * `None` - If the path has no extension
pub fn extract_lowercase_extension(path: &Path) -> Option<String> {
    path.extension()?.to_str().map(|s| s.to_lowercase())
}

/// Maps `input_path` read-only and passes its contents to `f`.
///
/// Empty files cannot be mapped; `f` receives an empty slice for them.
pub(crate) fn with_mapped_input<R>(
    input_path: &Path,
    f: impl FnOnce(&[u8]) -> FileOperationResult<R>,
) -> FileOperationResult<R> {
    let input_handle = ReadOnlyFileHandle::open(input_path)?;
    let input_size = input_handle.size()? as usize;
    if input_size == 0 {
        return f(&[]);
    }

    let input_mapping = ReadOnlyMmap::new(&input_handle, 0, input_size)?;
    f(input_mapping.as_slice())
}

/// Creates `output_path` with exactly the contents of `data`.
pub(crate) fn write_mapped_output(data: &[u8], output_path: &Path) -> FileOperationResult<()> {
    if data.is_empty() {
        std::fs::File::create(output_path)?;
        return Ok(());
    }

    let output_handle = ReadWriteFileHandle::create_preallocated(output_path, data.len() as i64)?;
    let mut output_mapping = ReadWriteMmap::new(&output_handle, 0, data.len())?;
    output_mapping.as_mut_slice().copy_from_slice(data);
    Ok(())
}
