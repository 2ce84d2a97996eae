//! Which embedded resource becomes which asset.
//!
//! Resources are extracted from the game executable under their resource identifier
//! (e.g. `2_3000_0.bmp`, `WAV_8000_0`). The catalog maps each identifier to a logical asset
//! name and the directory category it belongs in. The kind of a resource, and thus the handler
//! that converts it, follows from the identifier's type prefix.

mod asset_category;
mod builtin;
mod error;
mod resource_catalog;
mod resource_kind;

pub use asset_category::*;
pub use error::*;
pub use resource_catalog::*;
pub use resource_kind::*;
