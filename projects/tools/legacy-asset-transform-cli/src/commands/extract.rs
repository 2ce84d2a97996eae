use crate::error::CliError;
use crate::util::{
    canonicalize_cli_path, canonicalize_existing_cli_path, find_all_files, for_each_entry,
    handle_process_entry_error, AssetHandler, HandlerOptions, Throughput,
};
use argh::FromArgs;
use bytesize::ByteSize;
use legacy_asset_transform_file_formats_api::catalog::{
    AssetCategory, CatalogEntry, ResourceCatalog,
};
use legacy_asset_transform_file_formats_api::file_io;
use legacy_asset_transform_file_formats_api::FileFormatHandler;
use legacy_asset_transform_packed_pixel::DEFAULT_PACKED_PIXEL_WIDTH;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

#[derive(FromArgs, Debug)]
/// Convert the resources extracted from the game executable into asset files
#[argh(subcommand, name = "extract")]
pub struct ExtractCmd {
    /// directory holding the extracted resources
    #[argh(option, from_str_fn(canonicalize_existing_cli_path))]
    pub input: PathBuf,

    /// directory the images, sounds and songs directories are written to
    #[argh(option, from_str_fn(canonicalize_cli_path))]
    pub output: PathBuf,

    /// pixels per row of the level map image [default: 128]
    #[argh(option, default = "DEFAULT_PACKED_PIXEL_WIDTH")]
    pub level_width: usize,

    /// write bitmaps without a BMP file header
    #[argh(switch)]
    pub raw_dib: bool,
}

/// An input file and the catalog entry it was matched to.
struct MatchedResource<'a> {
    path: PathBuf,
    entry: &'a CatalogEntry,
}

/// Counters shared between the worker threads.
#[derive(Default)]
struct ExtractCounters {
    bytes_processed: AtomicU64,
    converted: AtomicUsize,
    copied: AtomicUsize,
    failed: AtomicUsize,
}

pub fn handle_extract_command(cmd: ExtractCmd) -> Result<(), CliError> {
    let catalog = ResourceCatalog::builtin();
    let options = HandlerOptions {
        level_width: cmd.level_width,
        raw_dib: cmd.raw_dib,
    };

    let mut entries = Vec::new();
    find_all_files(&cmd.input, &mut entries)?;

    let resources = match_resources(&catalog, &entries);
    println!(
        "Found {} of {} catalogued resources ({} files scanned)\n",
        resources.len(),
        catalog.len(),
        entries.len()
    );

    let missing = report_missing(&catalog, &resources);

    for &category in AssetCategory::all_values() {
        fs::create_dir_all(cmd.output.join(category.dir_name()))?;
    }

    let start = Instant::now();
    let counters = ExtractCounters::default();

    for_each_entry(&resources, |resource| {
        let result = extract_resource(resource, &cmd.output, &options, &counters);
        if !handle_process_entry_error(result) {
            counters.failed.fetch_add(1, Ordering::Relaxed);
        }
    });

    let elapsed = start.elapsed();
    let total_bytes = counters.bytes_processed.load(Ordering::Relaxed);
    let throughput = Throughput::from_elapsed(total_bytes, elapsed);

    println!("\n=== Extraction Complete ===");
    println!("Converted: {}", counters.converted.load(Ordering::Relaxed));
    println!("Copied: {}", counters.copied.load(Ordering::Relaxed));
    println!("Failed: {}", counters.failed.load(Ordering::Relaxed));
    println!("Missing: {missing}");
    println!("Time taken: {elapsed:.2?}");
    println!("Data processed: {}", ByteSize(total_bytes));
    println!("Throughput: {throughput}");

    Ok(())
}

/// Pairs every input file named after a resource with its catalog entry.
///
/// Files are taken in path order; when several files carry the same resource key only the
/// first is kept.
fn match_resources<'a>(
    catalog: &'a ResourceCatalog,
    entries: &[fs::DirEntry],
) -> Vec<MatchedResource<'a>> {
    let mut paths: Vec<PathBuf> = entries.iter().map(fs::DirEntry::path).collect();
    paths.sort();

    let mut seen = BTreeSet::new();
    let mut resources = Vec::new();
    for path in paths {
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let Some(entry) = catalog.find_by_file_name(file_name) else {
            tracing::debug!(file = %path.display(), "not a catalogued resource");
            continue;
        };

        if !seen.insert(entry.resource_key.as_str()) {
            tracing::warn!(
                file = %path.display(),
                resource = %entry.resource_key,
                "duplicate resource file ignored"
            );
            continue;
        }
        resources.push(MatchedResource { path, entry });
    }
    resources
}

/// Warns about each catalog entry with no input file; returns how many there were.
fn report_missing(catalog: &ResourceCatalog, resources: &[MatchedResource<'_>]) -> usize {
    let found: BTreeSet<&str> = resources
        .iter()
        .map(|resource| resource.entry.resource_key.as_str())
        .collect();

    let mut missing = 0;
    for entry in catalog
        .iter()
        .filter(|entry| !found.contains(entry.resource_key.as_str()))
    {
        tracing::warn!(
            resource = %entry.resource_key,
            asset = %entry.logical_name,
            "resource not found in input directory"
        );
        missing += 1;
    }
    missing
}

fn extract_resource(
    resource: &MatchedResource<'_>,
    output_dir: &Path,
    options: &HandlerOptions,
    counters: &ExtractCounters,
) -> Result<(), CliError> {
    let entry = resource.entry;
    let handler = AssetHandler::for_kind(entry.kind, options);
    let output_path = output_dir.join(entry.category.dir_name()).join(format!(
        "{}.{}",
        entry.logical_name,
        handler.output_extension()
    ));

    let stats = file_io::transform_file_with_handler(&handler, &resource.path, &output_path)
        .map_err(|e| CliError::for_resource(resource.path.clone(), e))?;

    counters
        .bytes_processed
        .fetch_add(stats.input_size as u64, Ordering::Relaxed);
    if stats.converted {
        counters.converted.fetch_add(1, Ordering::Relaxed);
    } else {
        counters.copied.fetch_add(1, Ordering::Relaxed);
    }

    tracing::info!(
        resource = %entry.resource_key,
        output = %stats.output_path.display(),
        converted = stats.converted,
        "extracted"
    );
    Ok(())
}
