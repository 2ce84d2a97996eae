//! Binary PPM (`P6`) header handling.

use crate::{PackedPixelError, BYTES_PER_PACKED_PIXEL};
use alloc::format;
use alloc::string::String;
use core::fmt;

/// Header of a binary PPM pixmap with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixmapHeader {
    pub width: usize,
    pub height: usize,
}

impl PixmapHeader {
    /// Largest channel value; always 255 for 8-bit pixmaps.
    pub const MAX_VALUE: u8 = 255;

    /// Creates a header for a pixmap of the given size.
    #[inline]
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Derives the header for a packed pixel region of `region_len` bytes laid out `width`
    /// pixels per row.
    ///
    /// The height is the number of complete rows in the region.
    pub fn for_region(region_len: usize, width: usize) -> Result<Self, PackedPixelError> {
        if width == 0 {
            return Err(PackedPixelError::ZeroWidth);
        }
        if region_len % BYTES_PER_PACKED_PIXEL != 0 {
            return Err(PackedPixelError::OddRegionLength(region_len));
        }

        let pixel_count = region_len / BYTES_PER_PACKED_PIXEL;
        Ok(Self::new(width, pixel_count / width))
    }

    /// Number of pixels described by this header.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Renders the header as it appears at the start of the pixmap.
    pub fn render(&self) -> String {
        format!("{self}")
    }
}

impl fmt::Display for PixmapHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P6 {} {} {} ", self.width, self.height, Self::MAX_VALUE)
    }
}
