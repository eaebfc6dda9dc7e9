use std::path::Path;

use anyhow::Result;

use crate::models::IndexRecord;
use crate::scanner::{JSON_MARKER, scan_json_entries};

/// Remove every occurrence of `.json` from a file name
///
/// `a.json` becomes `a` and `my.json.bak` becomes `my.bak`.
pub fn strip_json_marker(file_name: &str) -> String {
    file_name.replace(JSON_MARKER, "")
}

/// Build the index from file names alone
///
/// Each candidate contributes one record whose id and name are both the file name with
/// `.json` removed. Records keep directory-listing order. The index file named
/// `index_name` is never listed, so re-running on an unchanged directory produces
/// the same index.
///
/// # Errors
///
/// Returns an error if the data directory cannot be read.
pub fn build_filename_index(data_dir: &Path, index_name: &str) -> Result<Vec<IndexRecord>> {
    let entries = scan_json_entries(data_dir, index_name)?;

    let records: Vec<IndexRecord> = entries
        .iter()
        .map(|entry| {
            let stem = strip_json_marker(&entry.file_name);
            IndexRecord::new(stem.clone(), stem)
        })
        .collect();

    eprintln!("Indexed {} files by name", records.len());

    Ok(records)
}
