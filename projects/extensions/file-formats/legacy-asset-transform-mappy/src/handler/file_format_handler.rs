use super::MappyHandler;
use crate::mappy::{likely_mappy, pixel_region};
use legacy_asset_transform_file_formats_api::{
    FileFormatHandler, FormatHandlerError, TransformOutput, TransformResult,
};
use legacy_asset_transform_packed_pixel::convert_packed_region_to_pixmap;

impl FileFormatHandler for MappyHandler {
    fn transform(&self, input: &[u8]) -> TransformResult<TransformOutput> {
        if !likely_mappy(input) {
            return Err(FormatHandlerError::InvalidInputFileHeader.into());
        }

        let region = pixel_region(input)?;
        let pixmap = convert_packed_region_to_pixmap(&input[region], self.width)?;
        Ok(TransformOutput::Converted(pixmap))
    }

    #[inline]
    fn output_extension(&self) -> &str {
        "ppm"
    }
}
