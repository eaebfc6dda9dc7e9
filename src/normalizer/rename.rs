use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::{DirectoryEntry, SourceRecord};
use crate::scanner::JSON_MARKER;

const STAGING_SUFFIX: &str = "renaming";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub from: PathBuf,
    pub to: PathBuf,
    pub from_name: String,
    pub to_name: String,
}

/// A target file name claimed by more than one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameCollision {
    pub target: String,
    /// Every file that ends up at `target`, in processing order
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    pub moves: Vec<PlannedRename>,
    /// Files already named after their perspective id
    pub unchanged: Vec<String>,
    pub collisions: Vec<RenameCollision>,
}

impl RenamePlan {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn has_collisions(&self) -> bool {
        !self.collisions.is_empty()
    }
}

/// Plan renaming each source file to `<perspectiveId>.json`
///
/// `occupied` lists names in the directory that stay where they are regardless of the
/// plan (skipped files, the index file). Landing on one of them counts as a collision.
pub fn plan_renames(
    data_dir: &Path,
    sources: &[(DirectoryEntry, SourceRecord)],
    occupied: &[&str],
) -> RenamePlan {
    let mut plan = RenamePlan::default();
    let mut claims: HashMap<String, Vec<String>> = HashMap::new();
    let mut claim_order: Vec<String> = Vec::new();

    for name in occupied {
        claims.entry(name.to_string()).or_default().push(name.to_string());
    }

    for (entry, record) in sources {
        let target = record.target_file_name();

        let claimants = claims.entry(target.clone()).or_default();
        if !claim_order.contains(&target) {
            claim_order.push(target.clone());
        }
        claimants.push(entry.file_name.clone());

        if entry.file_name == target {
            plan.unchanged.push(target);
            continue;
        }

        plan.moves.push(PlannedRename {
            from: entry.path.clone(),
            to: data_dir.join(&target),
            from_name: entry.file_name.clone(),
            to_name: target,
        });
    }

    for target in claim_order {
        if let Some(sources) = claims.remove(&target)
            && sources.len() > 1
        {
            plan.collisions.push(RenameCollision { target, sources });
        }
    }

    plan
}

/// Apply a rename plan, returning the number of files moved
///
/// Every file is first moved to a staging name and only then to its target, so a file
/// whose current name is another file's target is never overwritten before it has
/// moved. Colliding targets are overwritten without confirmation.
///
/// # Errors
///
/// Returns an error if any rename fails. Files already moved stay moved.
pub fn apply_renames(plan: &RenamePlan) -> Result<usize> {
    for collision in &plan.collisions {
        eprintln!(
            "Warning: {} files resolve to {}, all but one will be overwritten: {}",
            collision.sources.len(),
            collision.target,
            collision.sources.join(", ")
        );
    }

    let mut staged = Vec::with_capacity(plan.moves.len());
    for (i, planned) in plan.moves.iter().enumerate() {
        let staging = staging_path(planned, i);
        fs::rename(&planned.from, &staging).with_context(|| {
            format!("Failed to stage {} for rename", planned.from.display())
        })?;
        staged.push((staging, planned));
    }

    for (staging, planned) in &staged {
        fs::rename(staging, &planned.to).with_context(|| {
            format!(
                "Failed to rename {} to {} (staged as {})",
                planned.from_name,
                planned.to_name,
                staging.display()
            )
        })?;
    }

    Ok(staged.len())
}

/// Staging names never contain `.json`, so a leftover from an interrupted run is not
/// picked up by the next scan
fn staging_path(planned: &PlannedRename, index: usize) -> PathBuf {
    let dir = planned.from.parent().unwrap_or_else(|| Path::new("."));
    let stem = planned.from_name.replace(JSON_MARKER, "");
    dir.join(format!(".{}.{}.{}", stem, index, STAGING_SUFFIX))
}
