use super::MappyHandler;
use crate::mappy::{likely_mappy, locate_pixel_region};
use legacy_asset_transform_file_formats_api::FileFormatDetection;

impl FileFormatDetection for MappyHandler {
    fn can_handle(&self, input: &[u8], file_extension: Option<&str>) -> bool {
        // Check file extension first for performance
        if let Some(ext) = file_extension {
            if ext != "fmp" && ext != "fmap" {
                return false;
            }
        }

        likely_mappy(input) && locate_pixel_region(input).is_some()
    }
}
