use crate::error::CliError;
use std::fs;
use std::path::*;

/// Recursively visits directories and collects file entries.
///
/// Directories or entries that cannot be read (e.g. lacking access) are skipped.
pub fn find_all_files(dir: &Path, entries: &mut Vec<fs::DirEntry>) -> std::io::Result<()> {
    let dir_entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(()),
    };

    for entry in dir_entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };

        let path = entry.path();
        if path.is_dir() {
            find_all_files(&path, entries)?;
        } else {
            entries.push(entry);
        }
    }
    Ok(())
}

/// Logs the error of a failed resource.
///
/// # Returns
///
/// `true` if the resource was processed.
pub fn handle_process_entry_error(result: Result<(), CliError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("{e}");
            false
        }
    }
}

/// Canonicalizes an output directory argument, creating the directory if it doesn't exist.
pub fn canonicalize_cli_path(value: &str) -> Result<PathBuf, String> {
    let path = Path::new(value);

    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| format!("Failed to create directory: {e}"))?;
    }

    fs::canonicalize(path).map_err(|e| format!("Invalid path: {e}"))
}

/// Canonicalizes a CLI path argument that must name an existing directory.
pub fn canonicalize_existing_cli_path(value: &str) -> Result<PathBuf, String> {
    let path = fs::canonicalize(value).map_err(|e| format!("Invalid path '{value}': {e}"))?;
    if !path.is_dir() {
        return Err(format!("Not a directory: {value}"));
    }
    Ok(path)
}

/// Runs `f` over every item, in parallel with the `multithreaded` feature.
pub fn for_each_entry<T, F>(items: &[T], f: F)
where
    T: Sync,
    F: Fn(&T) + Sync + Send,
{
    #[cfg(feature = "multithreaded")]
    {
        use rayon::prelude::*;
        items.par_iter().for_each(f);
    }

    #[cfg(not(feature = "multithreaded"))]
    items.iter().for_each(f);
}
