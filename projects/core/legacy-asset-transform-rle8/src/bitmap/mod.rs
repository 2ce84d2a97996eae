/// Header layout constants.
pub mod constants;

/// Parse and validate the `BITMAPINFOHEADER`.
pub mod header;

/// Rewrite RLE8 bitmaps as uncompressed bitmaps.
pub mod decode_bitmap;

pub use constants::{BITMAP_INFO_HEADER_SIZE, BI_RGB, BI_RLE8, PALETTE_SIZE};
pub use decode_bitmap::*;
pub use header::*;
