use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::DirectoryEntry;

/// Substring that marks a file as a JSON data asset
pub const JSON_MARKER: &str = ".json";

/// Returns true if a file name should be considered by the indexer
pub fn is_json_candidate(file_name: &str) -> bool {
    file_name.contains(JSON_MARKER)
}

/// List the JSON candidates directly inside `dir`
///
/// Entries come back in directory-listing order, which depends on the platform and
/// filesystem and is not sorted. The file named `exclude` (the index file itself) is
/// left out. Subdirectories are kept and flagged with `is_dir`. Entries whose names
/// are not valid UTF-8 are logged and skipped.
///
/// # Errors
///
/// Returns an error if the directory or one of its entries cannot be read.
pub fn scan_json_entries(dir: &Path, exclude: &str) -> Result<Vec<DirectoryEntry>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read data directory: {}", dir.display()))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        let file_name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                eprintln!("Warning: Skipping file with non UTF-8 name: {:?}", raw);
                continue;
            }
        };

        if !is_json_candidate(&file_name) || file_name == exclude {
            continue;
        }

        let is_dir = path.is_dir();
        candidates.push(DirectoryEntry { file_name, path, is_dir });
    }

    Ok(candidates)
}
