//! Test utilities for memory-mapped file operations.

pub use super::*;
pub use crate::file_io::*;
pub use crate::test_prelude::*;
pub use std::path::Path;
pub use tempfile::{Builder, NamedTempFile, TempDir};

/// Helper function to read file contents.
pub fn read_file_contents(path: &Path) -> std::io::Result<Vec<u8>> {
    std::fs::read(path)
}

/// Helper to create a temporary input file with test data and optional extension.
pub fn create_input_file_with_data_and_extension(
    data: &[u8],
    extension: Option<&str>,
) -> NamedTempFile {
    let input_file = match extension {
        Some(ext) => Builder::new()
            .suffix(&format!(".{ext}"))
            .tempfile()
            .expect("Failed to create temp file"),
        None => Builder::new()
            .prefix("test_file_")
            .tempfile()
            .expect("Failed to create temp file"),
    };

    std::fs::write(input_file.path(), data).expect("Failed to write input data");
    input_file
}

/// Helper to create a temporary output file.
pub fn create_output_file() -> NamedTempFile {
    NamedTempFile::new().expect("Failed to create temp file")
}

/// Helper to create a temporary output directory.
pub fn create_output_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}
