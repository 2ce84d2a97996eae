//! `BITMAPINFOHEADER` layout and field values.
#![allow(dead_code)]

/// Size of a `BITMAPINFOHEADER`, the only header this crate decodes.
pub const BITMAP_INFO_HEADER_SIZE: usize = 40;

// Field offsets within the header. All fields are little endian.
pub(crate) const HEADER_SIZE_OFFSET: usize = 0;
pub(crate) const WIDTH_OFFSET: usize = 4;
pub(crate) const HEIGHT_OFFSET: usize = 8;
/// Planes (u16) followed by bit count (u16).
pub(crate) const PLANES_OFFSET: usize = 12;
pub(crate) const COMPRESSION_OFFSET: usize = 16;
pub(crate) const IMAGE_SIZE_OFFSET: usize = 20;
pub(crate) const COLORS_USED_OFFSET: usize = 32;

/// Uncompressed pixel data.
pub const BI_RGB: u32 = 0;
/// 8-bit run-length encoded pixel data.
pub const BI_RLE8: u32 = 1;

pub(crate) const REQUIRED_PLANES: u16 = 1;
pub(crate) const REQUIRED_BIT_COUNT: u16 = 8;

/// Number of palette entries an 8-bit bitmap must carry.
pub const PALETTE_ENTRY_COUNT: u32 = 256;
/// Each palette entry is `B, G, R, reserved`.
pub const PALETTE_ENTRY_SIZE: usize = 4;
/// Size of the palette that follows the header.
pub const PALETTE_SIZE: usize = PALETTE_ENTRY_COUNT as usize * PALETTE_ENTRY_SIZE;
