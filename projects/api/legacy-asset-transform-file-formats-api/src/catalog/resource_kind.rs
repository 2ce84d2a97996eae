use super::AssetCategory;
use derive_enum_all_values::AllValues;

/// Kind of an embedded resource, as given by its identifier's type prefix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, AllValues)]
pub enum ResourceKind {
    /// Resource type 2: a DIB with RLE8 compressed pixels.
    Bitmap,
    /// A Mappy tile map holding the level graphics as packed RGB565 pixels.
    TileMap,
    /// A RIFF WAVE sound effect.
    Wave,
    /// A Standard MIDI File.
    Midi,
    /// A JPEG image.
    Jpeg,
}

impl ResourceKind {
    /// Derives the kind from a resource identifier such as `2_3000_0.bmp` or `WAV_8000_0`.
    ///
    /// # Return
    ///
    /// `None` if the identifier has no known type prefix.
    pub fn from_resource_key(resource_key: &str) -> Option<Self> {
        ResourceKind::all_values()
            .iter()
            .copied()
            .find(|kind| resource_key.starts_with(kind.type_prefix()))
    }

    /// Identifier prefix of resources of this kind.
    #[inline]
    pub const fn type_prefix(&self) -> &'static str {
        match self {
            ResourceKind::Bitmap => "2_",
            ResourceKind::TileMap => "CDXMAPPY_",
            ResourceKind::Wave => "WAV_",
            ResourceKind::Midi => "MIDI_",
            ResourceKind::Jpeg => "JPEG_",
        }
    }

    /// Category assets of this kind are written to.
    #[inline]
    pub const fn default_category(&self) -> AssetCategory {
        match self {
            ResourceKind::Bitmap | ResourceKind::TileMap | ResourceKind::Jpeg => {
                AssetCategory::Image
            }
            ResourceKind::Wave => AssetCategory::Sound,
            ResourceKind::Midi => AssetCategory::Song,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[rstest]
    #[case::bitmap("2_3000_0.bmp", Some(ResourceKind::Bitmap))]
    #[case::tile_map("CDXMAPPY_5000_0", Some(ResourceKind::TileMap))]
    #[case::wave("WAV_8000_0", Some(ResourceKind::Wave))]
    #[case::midi("MIDI_10000_0", Some(ResourceKind::Midi))]
    #[case::jpeg("JPEG_9003_0", Some(ResourceKind::Jpeg))]
    #[case::icon("14_1_0.ico", None)]
    #[case::resource_type_20("20_3000_0", None)]
    #[case::lowercase("wav_8000_0", None)]
    #[case::empty("", None)]
    fn kind_from_key(#[case] key: &str, #[case] expected: Option<ResourceKind>) {
        assert_eq!(ResourceKind::from_resource_key(key), expected);
    }

    #[test]
    fn prefixes_do_not_overlap() {
        for &kind in ResourceKind::all_values() {
            for &other in ResourceKind::all_values() {
                if kind != other {
                    assert!(!kind.type_prefix().starts_with(other.type_prefix()));
                }
            }
        }
    }

    #[rstest]
    #[case(ResourceKind::Bitmap, AssetCategory::Image)]
    #[case(ResourceKind::TileMap, AssetCategory::Image)]
    #[case(ResourceKind::Jpeg, AssetCategory::Image)]
    #[case(ResourceKind::Wave, AssetCategory::Sound)]
    #[case(ResourceKind::Midi, AssetCategory::Song)]
    fn default_categories(#[case] kind: ResourceKind, #[case] expected: AssetCategory) {
        assert_eq!(kind.default_category(), expected);
    }
}
