//! Common test imports and utilities for colour tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::color_565::Color565;
pub use crate::color_888::Color888;

// Re-export super for convenience in test modules
pub use super::*;

/// Builds a [`Color565`] from its raw 5/6/5 channel codes.
pub(crate) fn color_from_codes(red: u16, green: u16, blue: u16) -> Color565 {
    Color565::from_raw((red << 11) | (green << 5) | blue)
}
