/// IFF container magic at offset 0.
pub const FORM_MAGIC: [u8; 4] = *b"FORM";

/// Form type of a Mappy map, at offset 8.
pub const FMAP_MAGIC: [u8; 4] = *b"FMAP";

/// Offset of the form type, after the `FORM` magic and the big endian form length.
pub const FORM_TYPE_OFFSET: usize = 8;

/// Marker of the chunk holding the tile graphics.
pub const BGFX_MARKER: [u8; 4] = *b"BGFX";

/// Marker of the first layer chunk, which follows the tile graphics.
pub const LYR1_MARKER: [u8; 4] = *b"LYR1";

/// Chunk id and length before the `BGFX` chunk data.
pub const CHUNK_HEADER_SIZE: usize = 8;

/// Bytes at the start of the `BGFX` data that precede the level pixels.
pub const BGFX_LEADING_PAYLOAD_SIZE: usize = 32768;
