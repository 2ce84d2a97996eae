use legacy_asset_transform_dib::DibHandler;
use legacy_asset_transform_file_formats_api::catalog::ResourceKind;
use legacy_asset_transform_file_formats_api::{
    FileFormatDetection, FileFormatHandler, PassthroughHandler, TransformOutput, TransformResult,
};
use legacy_asset_transform_mappy::MappyHandler;

/// File extensions claimed by at least one handler.
///
/// Extractors name resources `<executable>_<resource key>`, so a name like
/// `santa.scr_WAV_8009_0` has the meaningless extension `scr_wav_8009_0`.
pub const KNOWN_EXTENSIONS: &[&str] = &[
    "bmp", "dib", "fmp", "fmap", "wav", "mid", "midi", "jpg", "jpeg",
];

/// Returns `file_extension` if a handler claims it, so other extensions fall back to content
/// detection.
#[inline]
fn known_extension(file_extension: Option<&str>) -> Option<&str> {
    file_extension.filter(|ext| KNOWN_EXTENSIONS.contains(ext))
}

/// Every handler the CLI can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetHandler {
    Dib(DibHandler),
    Mappy(MappyHandler),
    Passthrough(PassthroughHandler),
}

/// Handler settings taken from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerOptions {
    /// Pixels per row of the tile map's graphics block.
    pub level_width: usize,
    /// Write decoded bitmaps without a `BITMAPFILEHEADER`.
    pub raw_dib: bool,
}

impl HandlerOptions {
    fn dib(&self) -> DibHandler {
        DibHandler::new(!self.raw_dib)
    }

    fn mappy(&self) -> MappyHandler {
        MappyHandler::new(self.level_width)
    }
}

impl AssetHandler {
    /// The handler converting resources of `kind`.
    pub fn for_kind(kind: ResourceKind, options: &HandlerOptions) -> Self {
        match kind {
            ResourceKind::Bitmap => Self::Dib(options.dib()),
            ResourceKind::TileMap => Self::Mappy(options.mappy()),
            ResourceKind::Wave => Self::Passthrough(PassthroughHandler::wave()),
            ResourceKind::Midi => Self::Passthrough(PassthroughHandler::midi()),
            ResourceKind::Jpeg => Self::Passthrough(PassthroughHandler::jpeg()),
        }
    }
}

impl FileFormatHandler for AssetHandler {
    fn transform(&self, input: &[u8]) -> TransformResult<TransformOutput> {
        match self {
            Self::Dib(handler) => handler.transform(input),
            Self::Mappy(handler) => handler.transform(input),
            Self::Passthrough(handler) => handler.transform(input),
        }
    }

    fn output_extension(&self) -> &str {
        match self {
            Self::Dib(handler) => handler.output_extension(),
            Self::Mappy(handler) => handler.output_extension(),
            Self::Passthrough(handler) => handler.output_extension(),
        }
    }
}

impl FileFormatDetection for AssetHandler {
    fn can_handle(&self, input: &[u8], file_extension: Option<&str>) -> bool {
        let file_extension = known_extension(file_extension);
        match self {
            Self::Dib(handler) => handler.can_handle(input, file_extension),
            Self::Mappy(handler) => handler.can_handle(input, file_extension),
            Self::Passthrough(handler) => handler.can_handle(input, file_extension),
        }
    }
}

/// Returns all supported handlers in detection order.
///
/// Bitmaps are tried first, then tile maps, then the formats that are copied unchanged.
pub fn all_handlers(options: &HandlerOptions) -> [AssetHandler; 5] {
    [
        AssetHandler::Dib(options.dib()),
        AssetHandler::Mappy(options.mappy()),
        AssetHandler::Passthrough(PassthroughHandler::wave()),
        AssetHandler::Passthrough(PassthroughHandler::midi()),
        AssetHandler::Passthrough(PassthroughHandler::jpeg()),
    ]
}
