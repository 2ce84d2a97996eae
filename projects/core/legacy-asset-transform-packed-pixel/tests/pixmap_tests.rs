//! Integration tests converting tile map sized regions.

use legacy_asset_transform_common::color_565::Color565;
use legacy_asset_transform_packed_pixel::{
    convert_packed_region_to_pixmap, PixmapHeader, DEFAULT_PACKED_PIXEL_WIDTH,
};

/// Splits a pixmap into its header fields and pixel bytes.
fn parse_pixmap(pixmap: &[u8]) -> (usize, usize, u8, &[u8]) {
    let mut fields = Vec::new();
    let mut start = 0;
    for (index, &byte) in pixmap.iter().enumerate() {
        if byte == b' ' {
            fields.push(std::str::from_utf8(&pixmap[start..index]).unwrap());
            start = index + 1;
            if fields.len() == 4 {
                break;
            }
        }
    }

    assert_eq!(fields[0], "P6");
    (
        fields[1].parse().unwrap(),
        fields[2].parse().unwrap(),
        fields[3].parse().unwrap(),
        &pixmap[start..],
    )
}

#[test]
fn gradient_tile_map_converts_row_by_row() {
    let height = 16;
    let mut region = Vec::new();
    for y in 0..height {
        for x in 0..DEFAULT_PACKED_PIXEL_WIDTH {
            let color = Color565::from_rgb((x * 2) as u8, (y * 16) as u8, 0);
            region.extend_from_slice(&color.to_be_bytes());
        }
    }

    let pixmap = convert_packed_region_to_pixmap(&region, DEFAULT_PACKED_PIXEL_WIDTH).unwrap();
    let (width, parsed_height, max_value, pixels) = parse_pixmap(&pixmap);

    assert_eq!(width, DEFAULT_PACKED_PIXEL_WIDTH);
    assert_eq!(parsed_height, height);
    assert_eq!(max_value, PixmapHeader::MAX_VALUE);
    assert_eq!(pixels.len(), width * height * 3);

    for y in 0..height {
        for x in 0..width {
            let offset = (y * width + x) * 3;
            let expected = Color565::from_rgb((x * 2) as u8, (y * 16) as u8, 0).to_color_888();
            assert_eq!(
                &pixels[offset..offset + 3],
                &expected.to_bytes(),
                "pixel ({x}, {y})"
            );
        }
    }
}

#[test]
fn custom_width_changes_layout_only() {
    let region: Vec<u8> = (0..64u16).flat_map(|value| value.to_be_bytes()).collect();

    let narrow = convert_packed_region_to_pixmap(&region, 8).unwrap();
    let wide = convert_packed_region_to_pixmap(&region, 32).unwrap();

    let (_, narrow_height, _, narrow_pixels) = parse_pixmap(&narrow);
    let (_, wide_height, _, wide_pixels) = parse_pixmap(&wide);

    assert_eq!(narrow_height, 8);
    assert_eq!(wide_height, 2);
    assert_eq!(narrow_pixels, wide_pixels);
}
