use crate::error::CliError;
use crate::util::{
    all_handlers, canonicalize_cli_path, canonicalize_existing_cli_path, find_all_files,
    for_each_entry, handle_process_entry_error, HandlerOptions, Throughput,
};
use argh::FromArgs;
use bytesize::ByteSize;
use legacy_asset_transform_file_formats_api::file_io::{self, FileOperationError};
use legacy_asset_transform_file_formats_api::TransformError;
use legacy_asset_transform_packed_pixel::DEFAULT_PACKED_PIXEL_WIDTH;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

#[derive(FromArgs, Debug)]
/// Convert every recognised asset in a directory tree, detecting formats by content
#[argh(subcommand, name = "convert")]
pub struct ConvertCmd {
    /// input directory path
    #[argh(option, from_str_fn(canonicalize_existing_cli_path))]
    pub input: PathBuf,

    /// output directory path
    #[argh(option, from_str_fn(canonicalize_cli_path))]
    pub output: PathBuf,

    /// pixels per row of tile map images [default: 128]
    #[argh(option, default = "DEFAULT_PACKED_PIXEL_WIDTH")]
    pub level_width: usize,

    /// write bitmaps without a BMP file header
    #[argh(switch)]
    pub raw_dib: bool,
}

pub fn handle_convert_command(cmd: ConvertCmd) -> Result<(), CliError> {
    let options = HandlerOptions {
        level_width: cmd.level_width,
        raw_dib: cmd.raw_dib,
    };

    let mut entries = Vec::new();
    find_all_files(&cmd.input, &mut entries)?;

    if entries.is_empty() {
        println!("No files found in input directory.");
        return Ok(());
    }

    println!("Found {} files to process\n", entries.len());

    let start = Instant::now();
    let bytes_processed = AtomicU64::new(0);
    let unsupported = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    for_each_entry(&entries, |entry| {
        match convert_file(&entry.path(), &cmd.input, &cmd.output, &options) {
            Ok(Some(input_size)) => {
                bytes_processed.fetch_add(input_size, Ordering::Relaxed);
            }
            Ok(None) => {
                unsupported.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                handle_process_entry_error(Err(e));
                failed.fetch_add(1, Ordering::Relaxed);
            }
        }
    });

    let elapsed = start.elapsed();
    let total_bytes = bytes_processed.load(Ordering::Relaxed);

    println!("\n=== Conversion Complete ===");
    println!("Unsupported: {}", unsupported.load(Ordering::Relaxed));
    println!("Failed: {}", failed.load(Ordering::Relaxed));
    println!("Time taken: {elapsed:.2?}");
    println!("Data processed: {}", ByteSize(total_bytes));
    println!(
        "Throughput: {}",
        Throughput::from_elapsed(total_bytes, elapsed)
    );

    Ok(())
}

/// Converts one file into the mirrored location under `output_dir`.
///
/// # Returns
///
/// The input size, or `None` if no handler recognised the file.
fn convert_file(
    path: &Path,
    input_dir: &Path,
    output_dir: &Path,
    options: &HandlerOptions,
) -> Result<Option<u64>, CliError> {
    let relative = path
        .strip_prefix(input_dir)
        .map_err(|_| CliError::OutsideInput(path.to_path_buf()))?;
    let target_dir = match relative.parent() {
        Some(parent) => output_dir.join(parent),
        None => output_dir.to_path_buf(),
    };
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    fs::create_dir_all(&target_dir)?;

    match file_io::transform_file_with_multiple_handlers(
        all_handlers(options),
        path,
        &target_dir,
        &stem,
    ) {
        Ok(stats) => {
            tracing::info!(
                input = %path.display(),
                output = %stats.output_path.display(),
                converted = stats.converted,
                "converted"
            );
            Ok(Some(stats.input_size as u64))
        }
        Err(FileOperationError::Transform(TransformError::NoSupportedHandler)) => {
            tracing::debug!(input = %path.display(), "no handler for file");
            Ok(None)
        }
        Err(e) => Err(CliError::for_resource(path.to_path_buf(), e)),
    }
}
