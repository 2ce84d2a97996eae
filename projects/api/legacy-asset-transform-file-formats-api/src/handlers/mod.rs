//! Handler traits and the handlers that need no format specific code.
//!
//! ## [`FileFormatHandler`]
//!
//! Transforms a resource whose format is already known. This is what the extractor uses: the
//! resource catalog says which kind every embedded resource is, so no detection is needed.
//!
//! ## [`FileFormatDetection`]
//!
//! Extends [`FileFormatHandler`] with content (and extension) based detection, for tools that
//! are handed arbitrary files. Detection must never read out of bounds; inputs may be anything.

mod dispatch;
mod file_format_detection;
mod file_format_handler;
mod passthrough;

pub use dispatch::*;
pub use file_format_detection::*;
pub use file_format_handler::*;
pub use passthrough::*;
