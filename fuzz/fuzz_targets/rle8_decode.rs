#![no_main]

// Decodes arbitrary streams into small pixel arrays. Any stream must either fail cleanly or
// produce exactly width × height pixels, and both entry points must agree.

use legacy_asset_transform_rle8::{decode_rle8_into, decode_rle8_pixels};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Rle8Input {
    pub width: u8,
    pub height: u8,
    pub stream: Vec<u8>,
}

fuzz_target!(|input: Rle8Input| {
    let width = input.width as usize;
    let height = input.height as usize;

    let allocated = decode_rle8_pixels(&input.stream, width, height);
    let mut output = vec![0u8; width * height];
    let into = decode_rle8_into(&input.stream, width, height, &mut output);

    match allocated {
        Ok(pixels) => {
            assert_eq!(pixels.len(), width * height);
            assert_eq!(into, Ok(()));
            assert_eq!(pixels, output);
        }
        Err(e) => assert_eq!(into, Err(e)),
    }
});
