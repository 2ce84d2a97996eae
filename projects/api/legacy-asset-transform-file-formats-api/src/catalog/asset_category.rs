use derive_enum_all_values::AllValues;

/// Output directory an extracted asset is written to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, AllValues)]
pub enum AssetCategory {
    /// Sprites, fonts, backgrounds, splash screens and the level map.
    Image,
    /// Sound effects.
    Sound,
    /// Music.
    Song,
}

impl AssetCategory {
    /// Name of the directory assets of this category are written to.
    #[inline]
    pub const fn dir_name(&self) -> &'static str {
        match self {
            AssetCategory::Image => "images",
            AssetCategory::Sound => "sounds",
            AssetCategory::Song => "songs",
        }
    }
}
