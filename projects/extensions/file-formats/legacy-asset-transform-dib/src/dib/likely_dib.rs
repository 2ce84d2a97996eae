use super::strip_bitmap_file_header;
use legacy_asset_transform_rle8::bitmap::{parse_bitmap_header, BITMAP_INFO_HEADER_SIZE};

/// Determines if the given data likely represents a DIB.
///
/// This is done by checking the minimum size and that the header size field (offset 0) is that
/// of a `BITMAPINFOHEADER`. Data starting with a `BITMAPFILEHEADER` is checked past that header.
#[inline]
pub fn likely_dib(data: &[u8]) -> bool {
    let dib = strip_bitmap_file_header(data).unwrap_or(data);
    parse_bitmap_header(dib)
        .is_some_and(|header| header.header_size as usize == BITMAP_INFO_HEADER_SIZE)
}
