//! Common test imports and utilities for Mappy tests
#![allow(unused_imports)]

pub use alloc::{vec, vec::Vec};
pub use rstest::rstest;

pub use crate::handler::*;
pub use crate::mappy::constants::*;
pub use crate::mappy::*;
pub use legacy_asset_transform_file_formats_api::{
    FileFormatDetection, FileFormatHandler, FormatHandlerError, TransformError, TransformOutput,
};
pub use legacy_asset_transform_packed_pixel::PackedPixelError;

/// Layer chunk appended by [`create_mappy_map`].
pub const LAYER_CHUNK: &[u8] = b"LYR1\x00\x00\x00\x04\x00\x00\x00\x00";

/// Builds a minimal Mappy map whose tile graphics hold `pixels`.
///
/// The leading payload is filled with `0xAA` bytes so a misplaced region start shows up.
pub(crate) fn create_mappy_map(pixels: &[u8]) -> Vec<u8> {
    let mut map = Vec::new();
    map.extend_from_slice(&FORM_MAGIC);
    map.extend_from_slice(&0u32.to_be_bytes());
    map.extend_from_slice(&FMAP_MAGIC);

    // A chunk before the graphics, as in real maps.
    map.extend_from_slice(b"MPHD\x00\x00\x00\x04\x01\x02\x03\x04");

    let bgfx_len = (BGFX_LEADING_PAYLOAD_SIZE + pixels.len()) as u32;
    map.extend_from_slice(&BGFX_MARKER);
    map.extend_from_slice(&bgfx_len.to_be_bytes());
    map.extend_from_slice(&vec![0xAA; BGFX_LEADING_PAYLOAD_SIZE]);
    map.extend_from_slice(pixels);

    map.extend_from_slice(LAYER_CHUNK);

    let form_len = (map.len() - 8) as u32;
    map[4..8].copy_from_slice(&form_len.to_be_bytes());
    map
}
