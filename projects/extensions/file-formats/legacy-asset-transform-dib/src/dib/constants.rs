/// Size of the `BITMAPFILEHEADER` at the start of a `.bmp` file.
pub const BITMAP_FILE_HEADER_SIZE: usize = 14;

/// Magic at the start of a `.bmp` file.
pub const BITMAP_FILE_MAGIC: [u8; 2] = *b"BM";

// BITMAPFILEHEADER field offsets.
pub(crate) const FILE_SIZE_OFFSET: usize = 2;
pub(crate) const RESERVED_OFFSET: usize = 6;
pub(crate) const PIXEL_OFFSET_OFFSET: usize = 10;
