use super::DibHandler;
use crate::dib::{likely_dib, strip_bitmap_file_header, wrap_in_bitmap_file};
use legacy_asset_transform_file_formats_api::{
    FileFormatHandler, FormatHandlerError, TransformOutput, TransformResult,
};
use legacy_asset_transform_rle8::bitmap::decode_bitmap;

impl FileFormatHandler for DibHandler {
    fn transform(&self, input: &[u8]) -> TransformResult<TransformOutput> {
        if !likely_dib(input) {
            return Err(FormatHandlerError::InvalidInputFileHeader.into());
        }

        let (dib, has_file_header) = match strip_bitmap_file_header(input) {
            Some(dib) => (dib, true),
            None => (input, false),
        };

        let output = match decode_bitmap(dib)? {
            Some(decoded) if self.write_file_header => wrap_in_bitmap_file(&decoded)?,
            Some(decoded) => decoded,
            // Not compressed, and already in the requested layout.
            None if has_file_header == self.write_file_header => {
                return Ok(TransformOutput::Unchanged)
            }
            None if self.write_file_header => wrap_in_bitmap_file(dib)?,
            None => dib.to_vec(),
        };

        Ok(TransformOutput::Converted(output))
    }

    #[inline]
    fn output_extension(&self) -> &str {
        "bmp"
    }
}
