/// Shared constants between modules.
pub mod constants;

/// Determine if a file is a DIB.
pub mod likely_dib;

/// Add and remove the `BITMAPFILEHEADER`.
pub mod file_header;

pub use file_header::*;
pub use likely_dib::*;
