//! File I/O for transforming extracted resources on disk.
//!
//! Inputs are memory-mapped and outputs written through a preallocated read-write mapping,
//! using `lightweight-mmap`.

mod error;
pub use error::*;

#[cfg(feature = "lightweight-mmap")]
mod lightweight_mmap;

// Public API lives in there.
#[cfg(feature = "lightweight-mmap")]
pub use lightweight_mmap::*;

#[cfg(not(feature = "lightweight-mmap"))]
compile_error!("The 'lightweight-mmap' feature must be enabled for file I/O operations.");

use std::path::PathBuf;

/// What a file operation read and wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTransformStats {
    /// Size of the input file in bytes.
    pub input_size: usize,
    /// Size of the written output file in bytes.
    pub output_size: usize,
    /// `false` if the input was written out unchanged.
    pub converted: bool,
    /// Path of the written output file.
    pub output_path: PathBuf,
}
