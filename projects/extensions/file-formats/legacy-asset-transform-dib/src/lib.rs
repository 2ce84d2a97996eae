#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]
#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

pub mod dib;
pub mod handler;

pub use dib::*;
pub use handler::DibHandler;
