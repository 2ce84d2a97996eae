use super::DibHandler;
use crate::dib::likely_dib;
use legacy_asset_transform_file_formats_api::FileFormatDetection;

impl FileFormatDetection for DibHandler {
    fn can_handle(&self, input: &[u8], file_extension: Option<&str>) -> bool {
        // Check file extension first for performance
        if let Some(ext) = file_extension {
            if ext != "bmp" && ext != "dib" {
                return false;
            }
        }

        likely_dib(input)
    }
}
