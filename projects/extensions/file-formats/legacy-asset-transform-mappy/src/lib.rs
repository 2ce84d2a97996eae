#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]
#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

pub mod handler;
pub mod mappy;

pub use handler::MappyHandler;
pub use mappy::*;
