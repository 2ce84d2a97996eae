use super::constants::*;

/// Determines if the given data likely represents a Mappy map.
///
/// Checks for the `FORM` magic at offset 0 and the `FMAP` form type at offset 8. Use
/// [`locate_pixel_region`](super::locate_pixel_region) to check that the tile graphics can be
/// found.
#[inline]
pub fn likely_mappy(data: &[u8]) -> bool {
    data.len() >= FORM_TYPE_OFFSET + FMAP_MAGIC.len()
        && data[..4] == FORM_MAGIC
        && data[FORM_TYPE_OFFSET..FORM_TYPE_OFFSET + 4] == FMAP_MAGIC
}
