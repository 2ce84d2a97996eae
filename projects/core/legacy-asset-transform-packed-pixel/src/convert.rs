//! RGB565 (big endian) to RGB888 conversion.

use crate::pixmap::PixmapHeader;
use crate::{PackedPixelError, BYTES_PER_PACKED_PIXEL, BYTES_PER_RGB_PIXEL};
use alloc::vec;
use alloc::vec::Vec;
use legacy_asset_transform_common::color_565::Color565;

/// Converts every packed pixel in `region` into RGB triples at the start of `output`.
///
/// Returns the number of pixels written.
///
/// # Errors
///
/// - [`PackedPixelError::OddRegionLength`] if `region` has a dangling byte.
/// - [`PackedPixelError::OutputBufferTooSmall`] if `output` holds fewer than
///   `region.len() / 2 * 3` bytes.
pub fn convert_packed_pixels_to_rgb(
    region: &[u8],
    output: &mut [u8],
) -> Result<usize, PackedPixelError> {
    if region.len() % BYTES_PER_PACKED_PIXEL != 0 {
        return Err(PackedPixelError::OddRegionLength(region.len()));
    }

    let pixel_count = region.len() / BYTES_PER_PACKED_PIXEL;
    let required = pixel_count * BYTES_PER_RGB_PIXEL;
    if output.len() < required {
        return Err(PackedPixelError::OutputBufferTooSmall {
            required,
            actual: output.len(),
        });
    }

    for (packed, rgb) in region
        .chunks_exact(BYTES_PER_PACKED_PIXEL)
        .zip(output.chunks_exact_mut(BYTES_PER_RGB_PIXEL))
    {
        let color = Color565::from_be_bytes([packed[0], packed[1]]).to_color_888();
        rgb.copy_from_slice(&color.to_bytes());
    }

    Ok(pixel_count)
}

/// Converts a packed pixel region into a complete `P6` pixmap, `width` pixels per row.
///
/// The height is the number of complete rows in `region`; pixels of a trailing partial row are
/// not emitted.
///
/// # Errors
///
/// - [`PackedPixelError::ZeroWidth`] if `width` is 0.
/// - [`PackedPixelError::OddRegionLength`] if `region` has a dangling byte.
pub fn convert_packed_region_to_pixmap(
    region: &[u8],
    width: usize,
) -> Result<Vec<u8>, PackedPixelError> {
    let header = PixmapHeader::for_region(region.len(), width)?;
    let rendered = header.render();
    let pixel_count = header.pixel_count();

    let mut pixmap = vec![0u8; rendered.len() + pixel_count * BYTES_PER_RGB_PIXEL];
    pixmap[..rendered.len()].copy_from_slice(rendered.as_bytes());
    convert_packed_pixels_to_rgb(
        &region[..pixel_count * BYTES_PER_PACKED_PIXEL],
        &mut pixmap[rendered.len()..],
    )?;

    Ok(pixmap)
}
