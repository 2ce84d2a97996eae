//! Handler for resources that are already in a standard file format.

use crate::error::TransformResult;
use crate::handlers::{FileFormatDetection, FileFormatHandler, TransformOutput};

/// Magic at the start of a RIFF WAVE file.
pub const RIFF_MAGIC: &[u8] = b"RIFF";

/// Magic at the start of a Standard MIDI File.
pub const MIDI_MAGIC: &[u8] = b"MThd";

/// SOI marker followed by the first marker prefix of a JPEG file.
pub const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];

/// Writes its input back out unchanged under a fixed extension.
///
/// Sound effects, music and splash screens are stored in the executable as complete files and
/// only need renaming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassthroughHandler {
    extension: &'static str,
    accepted_extensions: &'static [&'static str],
    magic: &'static [u8],
}

impl PassthroughHandler {
    /// Creates a handler writing files with `extension`.
    ///
    /// During detection, files are accepted if they have no extension or one of
    /// `accepted_extensions`, and their contents start with `magic`. An empty `magic` accepts
    /// any contents.
    pub const fn new(
        extension: &'static str,
        accepted_extensions: &'static [&'static str],
        magic: &'static [u8],
    ) -> Self {
        Self {
            extension,
            accepted_extensions,
            magic,
        }
    }

    /// RIFF WAVE sound effects.
    pub const fn wave() -> Self {
        Self::new("wav", &["wav"], RIFF_MAGIC)
    }

    /// Standard MIDI music.
    pub const fn midi() -> Self {
        Self::new("mid", &["mid", "midi"], MIDI_MAGIC)
    }

    /// JPEG splash screens.
    pub const fn jpeg() -> Self {
        Self::new("jpg", &["jpg", "jpeg"], JPEG_MAGIC)
    }
}

impl FileFormatHandler for PassthroughHandler {
    #[inline]
    fn transform(&self, _input: &[u8]) -> TransformResult<TransformOutput> {
        Ok(TransformOutput::Unchanged)
    }

    #[inline]
    fn output_extension(&self) -> &str {
        self.extension
    }
}

impl FileFormatDetection for PassthroughHandler {
    fn can_handle(&self, input: &[u8], file_extension: Option<&str>) -> bool {
        if let Some(ext) = file_extension {
            if !self.accepted_extensions.iter().any(|accepted| *accepted == ext) {
                return false;
            }
        }

        input.starts_with(self.magic)
    }
}
