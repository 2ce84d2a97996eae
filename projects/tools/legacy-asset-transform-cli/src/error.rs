use legacy_asset_transform_file_formats_api::file_io::FileOperationError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{}: {source}", .path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: FileOperationError,
    },
    #[error("{} is outside of the input directory", .0.display())]
    OutsideInput(PathBuf),
}

impl CliError {
    /// Attaches the path of the resource that failed to process.
    pub fn for_resource(path: PathBuf, source: FileOperationError) -> Self {
        Self::Resource { path, source }
    }
}
