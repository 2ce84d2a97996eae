//! Common test imports and utilities for RLE8 tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::bitmap::constants::{BITMAP_INFO_HEADER_SIZE, BI_RGB, BI_RLE8, PALETTE_SIZE};
pub use crate::bitmap::*;
pub use crate::decode::*;
pub use crate::error::*;
pub use crate::token::*;

use endian_writer::{EndianReader, EndianWriter, LittleEndianReader, LittleEndianWriter};

/// Offset of the pixel data in bitmaps built by [`create_rle8_bitmap`].
pub const HEADER_AND_PALETTE_SIZE: usize = BITMAP_INFO_HEADER_SIZE + PALETTE_SIZE;

/// Builds an RLE8 bitmap: 40 byte header, 256 entry palette, then `stream`.
///
/// Palette entries are filled with a counting pattern so tests can spot clobbered bytes.
pub(crate) fn create_rle8_bitmap(width: u32, height: u32, stream: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; HEADER_AND_PALETTE_SIZE + stream.len()];

    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(BITMAP_INFO_HEADER_SIZE as u32, 0);
        writer.write_u32_at(width, 4);
        writer.write_u32_at(height, 8);
        // 1 plane, 8 bits per pixel
        writer.write_u32_at(1 | (8 << 16), 12);
        writer.write_u32_at(BI_RLE8, 16);
        writer.write_u32_at(stream.len() as u32, 20);
        // 2835 pixels per metre, roughly 72 DPI
        writer.write_u32_at(2835, 24);
        writer.write_u32_at(2835, 28);
        writer.write_u32_at(256, 32);
        writer.write_u32_at(256, 36);
    }

    for (index, byte) in data[BITMAP_INFO_HEADER_SIZE..HEADER_AND_PALETTE_SIZE]
        .iter_mut()
        .enumerate()
    {
        *byte = index as u8;
    }

    data[HEADER_AND_PALETTE_SIZE..].copy_from_slice(stream);
    data
}

/// Overwrites a little endian u32 header field.
pub(crate) fn set_header_u32(data: &mut [u8], offset: usize, value: u32) {
    assert!(data.len() >= offset + 4);
    unsafe { LittleEndianWriter::new(data.as_mut_ptr()).write_u32_at(value, offset as isize) };
}

/// Reads a little endian u32 header field.
pub(crate) fn read_header_u32(data: &[u8], offset: usize) -> u32 {
    assert!(data.len() >= offset + 4);
    unsafe { LittleEndianReader::new(data.as_ptr()).read_u32_at(offset as isize) }
}
