//! Mappy format handler implementation.

mod file_format_detection;
mod file_format_handler;

use legacy_asset_transform_packed_pixel::DEFAULT_PACKED_PIXEL_WIDTH;

/// Handler for the level tile map.
///
/// Converts the tile graphics of a Mappy map into a `P6` pixmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappyHandler {
    /// Width of the pixmap in pixels. Pixels of a trailing partial row are dropped.
    pub width: usize,
}

impl MappyHandler {
    pub const fn new(width: usize) -> Self {
        Self { width }
    }
}

impl Default for MappyHandler {
    fn default() -> Self {
        Self::new(DEFAULT_PACKED_PIXEL_WIDTH)
    }
}
