#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod api;
pub mod catalog;
pub mod error;
pub mod handlers;

#[cfg(feature = "file-io")]
pub mod file_io;

#[cfg(test)]
pub(crate) mod test_prelude;

pub use api::{transform_slice, transform_slice_to_vec};
pub use error::{FormatHandlerError, FormatHandlerResult, TransformError, TransformResult};
pub use handlers::{
    transform_slice_with_multiple_handlers, FileFormatDetection, FileFormatHandler,
    PassthroughHandler, TransformOutput,
};

#[cfg(feature = "file-io")]
pub use file_io::{FileOperationError, FileOperationResult};
