//! Packed 16-bit RGB565 colours.

use crate::color_888::Color888;

/// Promoted 5-bit channels at or above this value saturate to 255.
pub const FIVE_BIT_SATURATION_THRESHOLD: u8 = 248;

/// Promoted 6-bit channels at or above this value saturate to 255.
pub const SIX_BIT_SATURATION_THRESHOLD: u8 = 252;

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue).
///
/// Bits 15-11 hold red, bits 10-5 hold green and bits 4-0 hold blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from two bytes stored most significant byte first.
    #[inline]
    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self {
            value: u16::from_be_bytes(bytes),
        }
    }

    /// Creates a new [`Color565`] from separate 8-bit RGB components.
    ///
    /// The low bits of each component are discarded.
    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            value: ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3),
        }
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub fn raw_value(&self) -> u16 {
        self.value
    }

    /// Returns the colour as two bytes, most significant byte first.
    #[inline]
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.value.to_be_bytes()
    }

    /// Extracts the 8-bit red component.
    ///
    /// The 5-bit code is moved to the top of the byte; `31` becomes `255`.
    #[inline]
    pub fn red(&self) -> u8 {
        saturate_5_bit(((self.value & 0xF800) >> 8) as u8)
    }

    /// Extracts the 8-bit green component.
    ///
    /// The 6-bit code is moved to the top of the byte; `63` becomes `255`.
    #[inline]
    pub fn green(&self) -> u8 {
        saturate_6_bit(((self.value & 0x07E0) >> 3) as u8)
    }

    /// Extracts the 8-bit blue component.
    ///
    /// The 5-bit code is moved to the top of the byte; `31` becomes `255`.
    #[inline]
    pub fn blue(&self) -> u8 {
        saturate_5_bit(((self.value & 0x001F) << 3) as u8)
    }

    /// Converts this [`Color565`] to a [`Color888`].
    ///
    /// # Examples
    ///
    /// ```
    /// use legacy_asset_transform_common::color_565::Color565;
    ///
    /// let rgb565 = Color565::from_raw(0x07E0);
    /// let rgb888 = rgb565.to_color_888();
    /// assert_eq!(rgb888.r, 0);
    /// assert_eq!(rgb888.g, 255);
    /// assert_eq!(rgb888.b, 0);
    /// ```
    #[inline]
    pub fn to_color_888(&self) -> Color888 {
        Color888::new(self.red(), self.green(), self.blue())
    }
}

impl From<u16> for Color565 {
    #[inline]
    fn from(value: u16) -> Self {
        Self::from_raw(value)
    }
}

#[inline(always)]
fn saturate_5_bit(shifted: u8) -> u8 {
    if shifted < FIVE_BIT_SATURATION_THRESHOLD {
        shifted
    } else {
        255
    }
}

#[inline(always)]
fn saturate_6_bit(shifted: u8) -> u8 {
    if shifted < SIX_BIT_SATURATION_THRESHOLD {
        shifted
    } else {
        255
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[rstest]
    #[case(31, 255)]
    #[case(30, 240)]
    #[case(1, 8)]
    #[case(0, 0)]
    fn red_and_blue_saturate_only_at_top_code(#[case] code: u16, #[case] expected: u8) {
        assert_eq!(color_from_codes(code, 0, 0).red(), expected);
        assert_eq!(color_from_codes(0, 0, code).blue(), expected);
    }

    #[rstest]
    #[case(63, 255)]
    #[case(62, 248)]
    #[case(1, 4)]
    #[case(0, 0)]
    fn green_saturates_only_at_top_code(#[case] code: u16, #[case] expected: u8) {
        assert_eq!(color_from_codes(0, code, 0).green(), expected);
    }

    #[test]
    fn channels_do_not_bleed_into_each_other() {
        let color = color_from_codes(31, 0, 31);
        assert_eq!(color.to_color_888(), Color888::new(255, 0, 255));

        let color = color_from_codes(0, 63, 0);
        assert_eq!(color.to_color_888(), Color888::new(0, 255, 0));
    }

    #[test]
    fn from_be_bytes_reads_most_significant_byte_first() {
        let color = Color565::from_be_bytes([0xF8, 0x00]);
        assert_eq!(color.raw_value(), 0xF800);
        assert_eq!(color.red(), 255);
        assert_eq!(color.to_be_bytes(), [0xF8, 0x00]);
    }

    #[rstest]
    #[case(255, 255, 255, 0xFFFF)]
    #[case(255, 0, 0, 0xF800)]
    #[case(0, 255, 0, 0x07E0)]
    #[case(0, 0, 255, 0x001F)]
    fn from_rgb_packs_top_bits(#[case] r: u8, #[case] g: u8, #[case] b: u8, #[case] raw: u16) {
        assert_eq!(Color565::from_rgb(r, g, b).raw_value(), raw);
    }
}
