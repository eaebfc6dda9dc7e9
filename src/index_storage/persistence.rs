//! Index persistence: load/save with atomic writes

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::IndexRecord;
use crate::scanner::JSON_MARKER;

pub const DEFAULT_INDEX_FILENAME: &str = "dataList.json";

/// Render records exactly as they are written to disk
pub fn render_index(records: &[IndexRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("Failed to serialize index")
}

/// Write the index into `data_dir/index_name` atomically (temp file + rename)
///
/// Any existing index is replaced. Returns the path of the written file.
pub fn write_index(data_dir: &Path, index_name: &str, records: &[IndexRecord]) -> Result<PathBuf> {
    let index_path = data_dir.join(index_name);
    let index_temp = temp_path(data_dir, index_name);

    let json = render_index(records)?;
    fs::write(&index_temp, json)
        .with_context(|| format!("Failed to write index temp file: {}", index_temp.display()))?;
    fs::rename(&index_temp, &index_path)
        .with_context(|| format!("Failed to rename index temp file: {}", index_temp.display()))?;

    Ok(index_path)
}

/// Temp file for the index; its name never contains `.json`, so a leftover from an
/// interrupted write is not scanned as a data file
fn temp_path(data_dir: &Path, index_name: &str) -> PathBuf {
    data_dir.join(format!(".{}.tmp", index_name.replace(JSON_MARKER, "")))
}

/// Load a previously written index from `data_dir/index_name`
pub fn load_index(data_dir: &Path, index_name: &str) -> Result<Vec<IndexRecord>> {
    let index_path = data_dir.join(index_name);

    let json = fs::read_to_string(&index_path)
        .with_context(|| format!("Failed to read index file: {}", index_path.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse index file: {}", index_path.display()))
}
