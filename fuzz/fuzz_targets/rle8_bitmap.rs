#![no_main]

// Runs whole-bitmap decoding on arbitrary buffers. A decoded bitmap must no longer be an RLE8
// candidate, must record its pixel count, and the in-place decoder must agree.

use legacy_asset_transform_rle8::bitmap::{
    decode_bitmap, decode_bitmap_in_place, parse_bitmap_header, DecodeStatus, BI_RGB,
};
use libfuzzer_sys::fuzz_target;

/// Larger bitmaps only slow the fuzzer down with allocations.
const MAX_PIXELS: u64 = 1 << 20;

fuzz_target!(|data: &[u8]| {
    if let Some(header) = parse_bitmap_header(data) {
        let pixels = header.width.unsigned_abs() as u64 * header.height.unsigned_abs() as u64;
        if pixels > MAX_PIXELS {
            return;
        }
    }

    let mut in_place = data.to_vec();
    let status = decode_bitmap_in_place(&mut in_place);

    match decode_bitmap(data) {
        Ok(Some(decoded)) => {
            assert_eq!(status, Ok(DecodeStatus::Decoded));
            assert_eq!(decoded, in_place);

            let header = parse_bitmap_header(&decoded).unwrap();
            assert_eq!(header.compression, BI_RGB);
            assert_eq!(
                header.image_size as usize,
                header.width as usize * header.height as usize
            );
            assert_eq!(decode_bitmap(&decoded), Ok(None));
        }
        Ok(None) => {
            assert_eq!(status, Ok(DecodeStatus::Unchanged));
            assert_eq!(in_place, data);
        }
        Err(e) => {
            assert_eq!(status, Err(e));
            assert_eq!(in_place, data);
        }
    }
});
