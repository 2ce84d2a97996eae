//! Tokenizer for RLE8 compressed pixel streams.
//!
//! Every token starts with a count byte. A non-zero count is a run; a zero count is an escape
//! whose next byte selects the escape kind:
//!
//! | Bytes              | Token                                       |
//! |--------------------|---------------------------------------------|
//! | `c v` (c > 0)      | [`Rle8Token::Run`]: `v` repeated `c` times  |
//! | `0 0`              | [`Rle8Token::EndOfLine`]                    |
//! | `0 1`              | [`Rle8Token::EndOfBitmap`]                  |
//! | `0 2 dx dy`        | [`Rle8Token::Delta`]                        |
//! | `0 n p₀..pₙ [pad]` | [`Rle8Token::Absolute`], n ≥ 3, padded to even length |

use crate::error::Rle8Error;

/// Count byte value that introduces an escape.
pub const ESCAPE: u8 = 0;
/// Escape selector for end of line.
pub const ESCAPE_END_OF_LINE: u8 = 0;
/// Escape selector for end of bitmap.
pub const ESCAPE_END_OF_BITMAP: u8 = 1;
/// Escape selector for a cursor delta.
pub const ESCAPE_DELTA: u8 = 2;

/// A single decoded instruction from an RLE8 stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rle8Token<'a> {
    /// Write `value` `count` times at the cursor.
    Run { count: u8, value: u8 },
    /// Move the cursor to the start of the next row.
    EndOfLine,
    /// Stop decoding. Anything after this token is ignored.
    EndOfBitmap,
    /// Move the cursor right by `dx` and down by `dy` without writing.
    Delta { dx: u8, dy: u8 },
    /// Copy `pixels` verbatim at the cursor.
    Absolute { pixels: &'a [u8] },
}

impl Rle8Token<'_> {
    /// Number of pixels this token writes.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        match self {
            Rle8Token::Run { count, .. } => *count as usize,
            Rle8Token::Absolute { pixels } => pixels.len(),
            Rle8Token::EndOfLine | Rle8Token::EndOfBitmap | Rle8Token::Delta { .. } => 0,
        }
    }
}

/// Reads [`Rle8Token`]s from a compressed stream, consuming exactly the bytes each token owns.
///
/// The reader stops after the first error; iterating further yields `None`.
#[derive(Debug, Clone)]
pub struct Rle8TokenReader<'a> {
    stream: &'a [u8],
    offset: usize,
}

impl<'a> Rle8TokenReader<'a> {
    /// Creates a reader positioned at the start of `stream`.
    #[inline]
    pub fn new(stream: &'a [u8]) -> Self {
        Self { stream, offset: 0 }
    }

    /// Current position in the stream, in bytes.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` once every byte of the stream has been consumed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.offset >= self.stream.len()
    }

    /// Reads the next token.
    ///
    /// Returns `Ok(None)` when the stream is exhausted, and [`Rle8Error::TruncatedInput`] when a
    /// token starts inside the stream but needs bytes past its end.
    pub fn next_token(&mut self) -> Result<Option<Rle8Token<'a>>, Rle8Error> {
        if self.is_finished() {
            return Ok(None);
        }

        let token_start = self.offset;
        let token = self.read_token(token_start);
        if token.is_err() {
            self.offset = self.stream.len();
        }

        token.map(Some)
    }

    fn read_token(&mut self, token_start: usize) -> Result<Rle8Token<'a>, Rle8Error> {
        let count = self.read_u8(token_start)?;
        if count != ESCAPE {
            let value = self.read_u8(token_start)?;
            return Ok(Rle8Token::Run { count, value });
        }

        match self.read_u8(token_start)? {
            ESCAPE_END_OF_LINE => Ok(Rle8Token::EndOfLine),
            ESCAPE_END_OF_BITMAP => Ok(Rle8Token::EndOfBitmap),
            ESCAPE_DELTA => {
                let dx = self.read_u8(token_start)?;
                let dy = self.read_u8(token_start)?;
                Ok(Rle8Token::Delta { dx, dy })
            }
            length => {
                let pixels = self.read_slice(length as usize, token_start)?;

                // Absolute runs are padded to a 16-bit boundary. A stream that ends right
                // before the padding byte is still accepted.
                if length % 2 == 1 && !self.is_finished() {
                    self.offset += 1;
                }

                Ok(Rle8Token::Absolute { pixels })
            }
        }
    }

    #[inline]
    fn read_u8(&mut self, token_start: usize) -> Result<u8, Rle8Error> {
        let byte = *self
            .stream
            .get(self.offset)
            .ok_or_else(|| self.truncated(token_start))?;
        self.offset += 1;
        Ok(byte)
    }

    #[inline]
    fn read_slice(&mut self, len: usize, token_start: usize) -> Result<&'a [u8], Rle8Error> {
        let stream = self.stream;
        let slice = stream
            .get(self.offset..self.offset + len)
            .ok_or_else(|| self.truncated(token_start))?;
        self.offset += len;
        Ok(slice)
    }

    #[inline]
    fn truncated(&self, token_start: usize) -> Rle8Error {
        Rle8Error::TruncatedInput {
            offset: token_start,
            stream_len: self.stream.len(),
        }
    }
}

impl<'a> Iterator for Rle8TokenReader<'a> {
    type Item = Result<Rle8Token<'a>, Rle8Error>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
