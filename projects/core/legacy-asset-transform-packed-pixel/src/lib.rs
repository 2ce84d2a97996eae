#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

pub mod convert;
pub mod error;
pub mod pixmap;

pub use convert::*;
pub use error::PackedPixelError;
pub use pixmap::PixmapHeader;

/// Width of the level tile map, in pixels.
pub const DEFAULT_PACKED_PIXEL_WIDTH: usize = 128;

/// Size of one packed RGB565 pixel.
pub const BYTES_PER_PACKED_PIXEL: usize = 2;

/// Size of one RGB pixel in the pixmap.
pub const BYTES_PER_RGB_PIXEL: usize = 3;
