use super::constants::*;
use alloc::vec::Vec;
use endian_writer::{EndianReader, EndianWriter, LittleEndianReader, LittleEndianWriter};
use legacy_asset_transform_file_formats_api::FormatHandlerError;
use legacy_asset_transform_rle8::bitmap::{parse_bitmap_header, BITMAP_INFO_HEADER_SIZE};

/// Prepends a `BITMAPFILEHEADER` to a bare DIB, producing the contents of a `.bmp` file.
///
/// The pixel data offset is computed from the header size and the palette size given by the
/// colours-used field (or, if that is 0, the bit count).
///
/// # Errors
///
/// - [`FormatHandlerError::InputTooShort`] if `dib` cannot hold a `BITMAPINFOHEADER`.
/// - [`FormatHandlerError::InvalidInputFileHeader`] if the file would be 4GiB or larger.
pub fn wrap_in_bitmap_file(dib: &[u8]) -> Result<Vec<u8>, FormatHandlerError> {
    let header = parse_bitmap_header(dib).ok_or(FormatHandlerError::InputTooShort {
        required: BITMAP_INFO_HEADER_SIZE,
        actual: dib.len(),
    })?;

    let palette_entries = match header.colors_used {
        0 if header.bit_count <= 8 => 1u64 << header.bit_count,
        0 => 0,
        colors_used => colors_used as u64,
    };
    let pixel_offset = BITMAP_FILE_HEADER_SIZE as u64 + header.header_size as u64 + palette_entries * 4;
    let file_size = (BITMAP_FILE_HEADER_SIZE + dib.len()) as u64;
    if file_size > u32::MAX as u64 || pixel_offset > u32::MAX as u64 {
        return Err(FormatHandlerError::InvalidInputFileHeader);
    }

    let mut file = Vec::with_capacity(file_size as usize);
    file.extend_from_slice(&[0; BITMAP_FILE_HEADER_SIZE]);
    file[..2].copy_from_slice(&BITMAP_FILE_MAGIC);

    // SAFETY: file holds BITMAP_FILE_HEADER_SIZE (14) bytes; the last field ends at 10 + 4.
    unsafe {
        let mut writer = LittleEndianWriter::new(file.as_mut_ptr());
        writer.write_u32_at(file_size as u32, FILE_SIZE_OFFSET as isize);
        writer.write_u32_at(0, RESERVED_OFFSET as isize);
        writer.write_u32_at(pixel_offset as u32, PIXEL_OFFSET_OFFSET as isize);
    }

    file.extend_from_slice(dib);
    Ok(file)
}

/// Returns the DIB inside a `.bmp` file, or `None` if `data` does not start with a
/// `BITMAPFILEHEADER` followed by a `BITMAPINFOHEADER`.
pub fn strip_bitmap_file_header(data: &[u8]) -> Option<&[u8]> {
    if data.len() < BITMAP_FILE_HEADER_SIZE + BITMAP_INFO_HEADER_SIZE
        || data[..2] != BITMAP_FILE_MAGIC
    {
        return None;
    }

    // SAFETY: length checked above; the info header size field is at 14 + 0..4.
    let info_header_size =
        unsafe { LittleEndianReader::new(data.as_ptr()).read_u32_at(BITMAP_FILE_HEADER_SIZE as isize) };
    if info_header_size as usize != BITMAP_INFO_HEADER_SIZE {
        return None;
    }

    Some(&data[BITMAP_FILE_HEADER_SIZE..])
}
