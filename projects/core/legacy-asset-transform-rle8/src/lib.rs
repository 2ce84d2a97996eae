#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

/// Whole-bitmap decoding with header fix-ups.
pub mod bitmap;
pub mod decode;
pub mod error;
pub mod token;

pub use decode::{decode_rle8_into, decode_rle8_pixels};
pub use error::{FormatError, Rle8Error};
pub use token::{Rle8Token, Rle8TokenReader};
