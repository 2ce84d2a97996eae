use super::constants::*;
use core::ops::Range;
use legacy_asset_transform_file_formats_api::{FormatHandlerError, FormatHandlerResult};

/// Returns the offset of the first occurrence of `marker` at or after `from`.
#[inline]
pub fn find_marker(data: &[u8], marker: &[u8; 4], from: usize) -> Option<usize> {
    data.get(from..)?
        .windows(marker.len())
        .position(|window| window == marker)
        .map(|position| from + position)
}

/// Locates the level pixels: from the end of the `BGFX` leading payload up to the `LYR1`
/// marker.
///
/// # Errors
///
/// - [`FormatHandlerError::MissingChunk`] if either marker is absent.
/// - [`FormatHandlerError::InputTooShort`] if the data ends inside the leading payload.
pub fn pixel_region(data: &[u8]) -> FormatHandlerResult<Range<usize>> {
    let bgfx = find_marker(data, &BGFX_MARKER, 0).ok_or(FormatHandlerError::MissingChunk("BGFX"))?;
    let start = bgfx + CHUNK_HEADER_SIZE + BGFX_LEADING_PAYLOAD_SIZE;
    if start > data.len() {
        return Err(FormatHandlerError::InputTooShort {
            required: start,
            actual: data.len(),
        });
    }

    let end = find_marker(data, &LYR1_MARKER, start).ok_or(FormatHandlerError::MissingChunk("LYR1"))?;
    Ok(start..end)
}

/// Locates the level pixels, see [`pixel_region`].
///
/// # Return
///
/// `None` if the region cannot be found.
#[inline]
pub fn locate_pixel_region(data: &[u8]) -> Option<Range<usize>> {
    pixel_region(data).ok()
}
