//! Decoding of raw RLE8 streams into palette index arrays.

use crate::error::{FormatError, Rle8Error};
use crate::token::{Rle8Token, Rle8TokenReader};
use alloc::vec;
use alloc::vec::Vec;

/// Decodes an RLE8 stream into a freshly allocated `width × height` pixel array.
///
/// Pixels not written by the stream stay `0`.
///
/// # Errors
///
/// - [`FormatError::DimensionsOverflow`] if `width × height` overflows.
/// - [`Rle8Error::TruncatedInput`] if a token runs past the end of `stream`.
/// - [`Rle8Error::PixelOutOfBounds`] if a token writes outside the pixel array.
pub fn decode_rle8_pixels(stream: &[u8], width: usize, height: usize) -> Result<Vec<u8>, Rle8Error> {
    let pixel_count = pixel_count(width, height)?;
    let mut pixels = vec![0u8; pixel_count];
    decode_rle8_into(stream, width, height, &mut pixels)?;
    Ok(pixels)
}

/// Decodes an RLE8 stream into a caller-provided pixel array.
///
/// Only the first `width × height` bytes of `output` are addressed; bytes the stream does not
/// write keep their previous value.
///
/// # Errors
///
/// Same as [`decode_rle8_pixels`], plus [`Rle8Error::OutputBufferTooSmall`] if `output`
/// holds fewer than `width × height` bytes.
pub fn decode_rle8_into(
    stream: &[u8],
    width: usize,
    height: usize,
    output: &mut [u8],
) -> Result<(), Rle8Error> {
    let pixel_count = pixel_count(width, height)?;
    let actual = output.len();
    let pixels = output
        .get_mut(..pixel_count)
        .ok_or(Rle8Error::OutputBufferTooSmall {
            required: pixel_count,
            actual,
        })?;

    let mut cursor = Cursor {
        x: 0,
        y: 0,
        width,
        height,
    };

    for token in Rle8TokenReader::new(stream) {
        match token? {
            Rle8Token::Run { count, value } => {
                cursor.target(pixels, count as usize)?.fill(value);
                cursor.x += count as usize;
            }
            Rle8Token::Absolute { pixels: literal } => {
                cursor
                    .target(pixels, literal.len())?
                    .copy_from_slice(literal);
                cursor.x += literal.len();
            }
            Rle8Token::EndOfLine => {
                cursor.x = 0;
                cursor.y += 1;
            }
            Rle8Token::Delta { dx, dy } => {
                cursor.x += dx as usize;
                cursor.y += dy as usize;
            }
            Rle8Token::EndOfBitmap => break,
        }
    }

    Ok(())
}

#[inline]
fn pixel_count(width: usize, height: usize) -> Result<usize, Rle8Error> {
    width
        .checked_mul(height)
        .ok_or(FormatError::DimensionsOverflow { width, height }.into())
}

/// Write position inside a flat `width × height` array.
struct Cursor {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

impl Cursor {
    /// Returns the `len` pixels starting at the cursor, or the first one that falls outside.
    #[inline]
    fn target<'p>(&self, pixels: &'p mut [u8], len: usize) -> Result<&'p mut [u8], Rle8Error> {
        let start = self
            .y
            .checked_mul(self.width)
            .and_then(|row| row.checked_add(self.x));

        match start {
            Some(start) if start <= pixels.len() && len <= pixels.len() - start => {
                Ok(&mut pixels[start..start + len])
            }
            Some(start) if start < pixels.len() => {
                Err(self.out_of_bounds(self.x + (pixels.len() - start)))
            }
            _ => Err(self.out_of_bounds(self.x)),
        }
    }

    #[inline]
    fn out_of_bounds(&self, x: usize) -> Rle8Error {
        Rle8Error::PixelOutOfBounds {
            x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}
