use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::ValueEnum;

use crate::index_storage::write_index;
use crate::models::{DirectoryEntry, IndexRecord, SourceRecord};
use crate::normalizer::{RenamePlan, apply_renames, plan_renames};
use crate::parsers::{SourceError, parse_source_file};
use crate::scanner::scan_json_entries;

/// What to do when a single perspective file cannot be read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ErrorPolicy {
    /// Stop at the first bad file; nothing is renamed and no index is written
    #[default]
    Abort,
    /// Report bad files, leave them untouched and index the rest
    Skip,
}

/// Result of reading a folder of perspective files, before anything is mutated
#[derive(Debug, Default)]
pub struct PerspectiveIndex {
    /// Index records sorted by name
    pub records: Vec<IndexRecord>,
    pub plan: RenamePlan,
    /// Files left out under [`ErrorPolicy::Skip`]
    pub failures: Vec<SourceError>,
}

/// Read every perspective file in `data_dir` and prepare the index and rename plan
///
/// Each candidate is parsed for `perspectiveId` and `name`. The returned records are
/// sorted ascending by name (byte-wise, case-sensitive; ties keep listing order) and
/// the plan renames each file to `<perspectiveId>.json`. Nothing on disk is touched,
/// which makes this the dry-run half of [`apply_perspective_index`].
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be read
/// - A file fails to parse under [`ErrorPolicy::Abort`]
/// - More than 50% of files fail to parse under [`ErrorPolicy::Skip`]
pub fn build_perspective_index(
    data_dir: &Path,
    index_name: &str,
    policy: ErrorPolicy,
) -> Result<PerspectiveIndex> {
    // Folders named like data files can't be parsed or renamed
    let entries: Vec<DirectoryEntry> =
        scan_json_entries(data_dir, index_name)?.into_iter().filter(|e| !e.is_dir).collect();
    let total = entries.len();

    let mut sources: Vec<(DirectoryEntry, SourceRecord)> = Vec::with_capacity(total);
    let mut failures = Vec::new();

    for entry in entries {
        let parsed = parse_source_file(&entry.path).and_then(|record| {
            if record.target_file_name() == index_name {
                return Err(SourceError::ReservedId {
                    path: entry.path.clone(),
                    id: record.perspective_id,
                });
            }
            Ok(record)
        });

        match parsed {
            Ok(record) => sources.push((entry, record)),
            Err(e) => match policy {
                ErrorPolicy::Abort => {
                    return Err(e)
                        .context("Aborting: no files were renamed and no index was written");
                }
                ErrorPolicy::Skip => {
                    eprintln!("Warning: Skipping {}: {}", entry.file_name, e);
                    failures.push(e);
                }
            },
        }
    }

    // Check error rate and fail if >50% of files failed
    if total > 0 {
        let failure_rate = failures.len() as f64 / total as f64;
        if failure_rate > 0.5 {
            bail!(
                "Index building failed: {}/{} perspective files failed to parse ({}% failure rate)",
                failures.len(),
                total,
                (failure_rate * 100.0) as u32
            );
        }
    }

    // Skipped files and the index itself stay where they are
    let skipped_names: Vec<String> = failures
        .iter()
        .filter_map(|e| e.path().file_name())
        .map(|name| name.to_string_lossy().to_string())
        .collect();
    let mut occupied: Vec<&str> = skipped_names.iter().map(String::as_str).collect();
    occupied.push(index_name);

    let plan = plan_renames(data_dir, &sources, &occupied);

    let mut records: Vec<IndexRecord> =
        sources.into_iter().map(|(_, record)| IndexRecord::from(record)).collect();
    records.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(PerspectiveIndex { records, plan, failures })
}

/// Rename files according to the plan, then write the index
///
/// Returns the path of the written index file.
///
/// # Errors
///
/// Returns an error if a rename or the index write fails. Renames that already
/// happened are not rolled back.
pub fn apply_perspective_index(
    data_dir: &Path,
    index_name: &str,
    index: &PerspectiveIndex,
) -> Result<PathBuf> {
    let renamed = apply_renames(&index.plan)?;
    let index_path = write_index(data_dir, index_name, &index.records)?;

    eprintln!(
        "Indexed {} perspectives ({} renamed, {} already named, {} skipped)",
        index.records.len(),
        renamed,
        index.plan.unchanged.len(),
        index.failures.len()
    );

    Ok(index_path)
}
