use super::constants::*;
use crate::error::FormatError;
use endian_writer::{EndianReader, LittleEndianReader};

/// The fields of a `BITMAPINFOHEADER` that matter for RLE8 decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapHeader {
    pub header_size: u32,
    pub width: i32,
    /// Positive for bottom-up bitmaps, negative for top-down.
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    /// Size of the pixel data in bytes. For RLE8 bitmaps, the compressed stream length.
    pub image_size: u32,
    /// Low word of the colours-used field; the high word is ignored.
    pub colors_used: u16,
}

/// Validated pixel dimensions of a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapDimensions {
    pub width: usize,
    pub height: usize,
}

impl BitmapDimensions {
    /// Number of pixels, which is also the size of the decoded 8-bit pixel array.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// Reads the header fields from the start of `data`.
///
/// # Return
///
/// `None` if `data` is shorter than a `BITMAPINFOHEADER`. No field is validated here; see
/// [`BitmapHeader::is_rle_candidate`] and [`BitmapHeader::validate_rle8`].
#[inline]
pub fn parse_bitmap_header(data: &[u8]) -> Option<BitmapHeader> {
    if data.len() < BITMAP_INFO_HEADER_SIZE {
        return None;
    }

    // SAFETY: data.len() >= BITMAP_INFO_HEADER_SIZE (40), and every offset read below is at
    // most COLORS_USED_OFFSET (32) + 4.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let (header_size, width, height, planes_and_bit_count, compression, image_size, colors_used) = unsafe {
        (
            reader.read_u32_at(HEADER_SIZE_OFFSET as isize),
            reader.read_u32_at(WIDTH_OFFSET as isize),
            reader.read_u32_at(HEIGHT_OFFSET as isize),
            reader.read_u32_at(PLANES_OFFSET as isize),
            reader.read_u32_at(COMPRESSION_OFFSET as isize),
            reader.read_u32_at(IMAGE_SIZE_OFFSET as isize),
            reader.read_u32_at(COLORS_USED_OFFSET as isize),
        )
    };

    Some(BitmapHeader {
        header_size,
        width: width as i32,
        height: height as i32,
        planes: planes_and_bit_count as u16,
        bit_count: (planes_and_bit_count >> 16) as u16,
        compression,
        image_size,
        colors_used: colors_used as u16,
    })
}

impl BitmapHeader {
    /// Returns `true` if this is a `BITMAPINFOHEADER` with compressed pixel data.
    ///
    /// Anything else passes through the decoder unchanged.
    #[inline]
    pub fn is_rle_candidate(&self) -> bool {
        self.header_size as usize == BITMAP_INFO_HEADER_SIZE && self.compression != BI_RGB
    }

    /// Checks that the header describes an 8-bit, 256 colour RLE8 bitmap.
    pub fn validate_rle8(&self) -> Result<BitmapDimensions, FormatError> {
        if self.planes != REQUIRED_PLANES {
            return Err(FormatError::InvalidPlanes(self.planes));
        }
        if self.bit_count != REQUIRED_BIT_COUNT {
            return Err(FormatError::UnsupportedBitCount(self.bit_count));
        }
        if self.compression != BI_RLE8 {
            return Err(FormatError::UnsupportedCompression(self.compression));
        }
        if self.colors_used as u32 != PALETTE_ENTRY_COUNT {
            return Err(FormatError::UnsupportedPaletteSize(self.colors_used));
        }

        // RLE8 bitmaps are always bottom-up.
        if self.width <= 0 || self.height <= 0 {
            return Err(FormatError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let width = self.width as usize;
        let height = self.height as usize;
        match width.checked_mul(height) {
            Some(pixel_count) if pixel_count <= u32::MAX as usize => {
                Ok(BitmapDimensions { width, height })
            }
            _ => Err(FormatError::DimensionsOverflow { width, height }),
        }
    }
}
