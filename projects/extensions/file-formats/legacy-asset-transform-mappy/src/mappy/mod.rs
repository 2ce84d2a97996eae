/// Chunk markers and sizes.
pub mod constants;

/// Determine if a file is a Mappy map.
pub mod likely_mappy;

/// Find the tile graphics inside a map.
pub mod locate;

pub use likely_mappy::*;
pub use locate::*;
