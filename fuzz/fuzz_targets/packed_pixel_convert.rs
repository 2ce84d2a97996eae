#![no_main]

// Converts arbitrary packed regions and checks every pixel against a straightforward
// shift-and-saturate model of the RGB565 expansion.

use legacy_asset_transform_packed_pixel::{convert_packed_region_to_pixmap, PackedPixelError};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct PackedInput {
    pub width: u8,
    pub region: Vec<u8>,
}

fn expand(code: u16, bits: u32) -> u8 {
    if code == (1 << bits) - 1 {
        255
    } else {
        (code << (8 - bits)) as u8
    }
}

fuzz_target!(|input: PackedInput| {
    let width = input.width as usize;
    let result = convert_packed_region_to_pixmap(&input.region, width);

    if width == 0 {
        assert_eq!(result, Err(PackedPixelError::ZeroWidth));
        return;
    }
    if input.region.len() % 2 != 0 {
        assert_eq!(
            result,
            Err(PackedPixelError::OddRegionLength(input.region.len()))
        );
        return;
    }

    let pixmap = result.unwrap();
    let height = input.region.len() / 2 / width;
    let header = format!("P6 {width} {height} 255 ");
    assert_eq!(&pixmap[..header.len()], header.as_bytes());

    let rgb = &pixmap[header.len()..];
    assert_eq!(rgb.len(), width * height * 3);

    for (packed, pixel) in input.region.chunks_exact(2).zip(rgb.chunks_exact(3)) {
        let value = u16::from_be_bytes([packed[0], packed[1]]);
        assert_eq!(pixel[0], expand(value >> 11, 5));
        assert_eq!(pixel[1], expand((value >> 5) & 0x3F, 6));
        assert_eq!(pixel[2], expand(value & 0x1F, 5));
    }
});
