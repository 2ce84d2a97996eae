//! Common test imports and utilities for DIB tests
#![allow(unused_imports)]

pub use alloc::{vec, vec::Vec};
pub use rstest::rstest;

pub use crate::dib::*;
pub use crate::handler::*;
pub use legacy_asset_transform_file_formats_api::{
    FileFormatDetection, FileFormatHandler, FormatHandlerError, TransformError, TransformOutput,
};
pub use legacy_asset_transform_rle8::bitmap::{BITMAP_INFO_HEADER_SIZE, PALETTE_SIZE};
pub use legacy_asset_transform_rle8::Rle8Error;

use endian_writer::{EndianReader, EndianWriter, LittleEndianReader, LittleEndianWriter};

/// Offset of the pixel data in DIBs built by [`create_rle8_dib`].
pub const HEADER_AND_PALETTE_SIZE: usize = BITMAP_INFO_HEADER_SIZE + PALETTE_SIZE;

/// Builds a bare RLE8 DIB: 40 byte header, 256 entry greyscale palette, then `stream`.
pub(crate) fn create_rle8_dib(width: u32, height: u32, stream: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; HEADER_AND_PALETTE_SIZE];

    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(BITMAP_INFO_HEADER_SIZE as u32, 0);
        writer.write_u32_at(width, 4);
        writer.write_u32_at(height, 8);
        writer.write_u32_at(1 | (8 << 16), 12);
        writer.write_u32_at(1, 16);
        writer.write_u32_at(stream.len() as u32, 20);
        writer.write_u32_at(256, 32);
    }

    for (index, entry) in data[BITMAP_INFO_HEADER_SIZE..].chunks_exact_mut(4).enumerate() {
        entry[..3].fill(index as u8);
    }

    data.extend_from_slice(stream);
    data
}

/// Reads a little endian u32 at `offset`.
pub(crate) fn read_u32(data: &[u8], offset: usize) -> u32 {
    assert!(data.len() >= offset + 4);
    unsafe { LittleEndianReader::new(data.as_ptr()).read_u32_at(offset as isize) }
}
