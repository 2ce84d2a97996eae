//! DIB format handler implementation.

mod file_format_detection;
mod file_format_handler;

/// Handler for bitmap resources.
///
/// RLE8 compressed pixel data is decoded; other bitmaps are left as they are. Accepts bare DIBs
/// as well as `.bmp` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DibHandler {
    /// Prepend a `BITMAPFILEHEADER` to the output, making it a `.bmp` file. When `false`, the
    /// output is a bare DIB.
    pub write_file_header: bool,
}

impl DibHandler {
    pub const fn new(write_file_header: bool) -> Self {
        Self { write_file_header }
    }
}

impl Default for DibHandler {
    fn default() -> Self {
        Self::new(true)
    }
}
