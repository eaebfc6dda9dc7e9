use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;

use crate::index_storage::load_index;

/// Consistency report for an existing index file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub total: usize,
    /// Ids listed more than once, in first-seen order
    pub duplicate_ids: Vec<String>,
    /// Ids with no `<id>.json` file next to the index
    pub missing_files: Vec<String>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_ids.is_empty() && self.missing_files.is_empty()
    }
}

/// Check that every id in the index is unique and resolves to `<id>.json`
///
/// The viewer requests `<id>.json` for each listed id, so an id without that file is
/// broken even if some other file carries the same perspective.
///
/// # Errors
///
/// Returns an error if the index file cannot be read or parsed.
pub fn check_index(data_dir: &Path, index_name: &str) -> Result<CheckReport> {
    let records = load_index(data_dir, index_name)?;

    let mut seen = HashSet::new();
    let mut report = CheckReport { total: records.len(), ..Default::default() };

    for record in &records {
        if !seen.insert(record.id.as_str()) {
            if !report.duplicate_ids.contains(&record.id) {
                report.duplicate_ids.push(record.id.clone());
            }
            continue;
        }

        if !data_dir.join(format!("{}.json", record.id)).is_file() {
            report.missing_files.push(record.id.clone());
        }
    }

    Ok(report)
}
