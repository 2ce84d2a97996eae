//! Common test imports and utilities for packed pixel tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::convert::*;
pub use crate::error::PackedPixelError;
pub use crate::pixmap::PixmapHeader;
pub use crate::{BYTES_PER_PACKED_PIXEL, BYTES_PER_RGB_PIXEL, DEFAULT_PACKED_PIXEL_WIDTH};
