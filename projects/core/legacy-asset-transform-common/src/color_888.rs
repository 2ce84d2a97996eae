//! 24-bit RGB colours.

/// Represents a 24-bit RGB color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(C)]
pub struct Color888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Color888 {
    /// Creates a new [`Color888`] from its components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the colour in `r, g, b` byte order.
    #[inline]
    pub const fn to_bytes(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
