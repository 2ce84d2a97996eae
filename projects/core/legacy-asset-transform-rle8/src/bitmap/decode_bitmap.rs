use super::constants::*;
use super::header::{parse_bitmap_header, BitmapDimensions};
use crate::decode::decode_rle8_pixels;
use crate::error::Rle8Error;
use alloc::vec::Vec;
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Outcome of decoding a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// The pixel data was RLE8 and has been replaced with uncompressed pixels.
    Decoded,
    /// The bitmap was not an RLE8 candidate and has not been touched.
    Unchanged,
}

/// Decodes an RLE8 compressed bitmap in place.
///
/// The compressed stream is taken to be the last `image_size` bytes of `bitmap`. On success:
///
/// - the compression field is set to `BI_RGB` (0),
/// - the image size field is set to the decoded pixel count (`width × height`),
/// - the compressed stream is replaced with the decoded pixels.
///
/// Everything else (the first 16 header bytes, the rest of the header and the palette) is
/// preserved byte for byte. On error `bitmap` is left untouched.
///
/// Bitmaps whose header size is not 40, whose compression is already `BI_RGB`, or that are too
/// short to hold a header are returned as [`DecodeStatus::Unchanged`].
pub fn decode_bitmap_in_place(bitmap: &mut Vec<u8>) -> Result<DecodeStatus, Rle8Error> {
    let Some(plan) = plan_decode(bitmap)? else {
        return Ok(DecodeStatus::Unchanged);
    };

    let pixels = decode_rle8_pixels(
        &bitmap[plan.stream_start..],
        plan.dimensions.width,
        plan.dimensions.height,
    )?;

    bitmap.truncate(plan.stream_start);
    write_uncompressed_fields(bitmap, pixels.len());
    bitmap.extend_from_slice(&pixels);
    Ok(DecodeStatus::Decoded)
}

/// Decodes an RLE8 compressed bitmap into a new buffer.
///
/// # Return
///
/// `Ok(None)` when the bitmap is not an RLE8 candidate, otherwise the uncompressed bitmap laid
/// out as described in [`decode_bitmap_in_place`].
pub fn decode_bitmap(bitmap: &[u8]) -> Result<Option<Vec<u8>>, Rle8Error> {
    let Some(plan) = plan_decode(bitmap)? else {
        return Ok(None);
    };

    let pixels = decode_rle8_pixels(
        &bitmap[plan.stream_start..],
        plan.dimensions.width,
        plan.dimensions.height,
    )?;

    let mut decoded = Vec::with_capacity(plan.stream_start + pixels.len());
    decoded.extend_from_slice(&bitmap[..plan.stream_start]);
    write_uncompressed_fields(&mut decoded, pixels.len());
    decoded.extend_from_slice(&pixels);
    Ok(Some(decoded))
}

struct DecodePlan {
    dimensions: BitmapDimensions,
    /// Offset of the compressed stream, which runs to the end of the buffer.
    stream_start: usize,
}

fn plan_decode(bitmap: &[u8]) -> Result<Option<DecodePlan>, Rle8Error> {
    let Some(header) = parse_bitmap_header(bitmap) else {
        return Ok(None);
    };
    if !header.is_rle_candidate() {
        return Ok(None);
    }

    let dimensions = header.validate_rle8()?;
    let stream_len = header.image_size as usize;
    let required = (BITMAP_INFO_HEADER_SIZE + PALETTE_SIZE).saturating_add(stream_len);
    if bitmap.len() < required {
        return Err(Rle8Error::BufferTooShort {
            required,
            actual: bitmap.len(),
        });
    }

    Ok(Some(DecodePlan {
        dimensions,
        stream_start: bitmap.len() - stream_len,
    }))
}

/// `header` must hold at least [`BITMAP_INFO_HEADER_SIZE`] bytes; `decoded_len` must fit a u32.
fn write_uncompressed_fields(header: &mut [u8], decoded_len: usize) {
    debug_assert!(header.len() >= BITMAP_INFO_HEADER_SIZE);

    // SAFETY: The plan checked the buffer holds header + palette, and the header region is never
    // truncated. IMAGE_SIZE_OFFSET (20) + 4 is within the 40 byte header.
    unsafe {
        let mut writer = LittleEndianWriter::new(header.as_mut_ptr());
        writer.write_u32_at(BI_RGB, COMPRESSION_OFFSET as isize);
        writer.write_u32_at(decoded_len as u32, IMAGE_SIZE_OFFSET as isize);
    }
}
