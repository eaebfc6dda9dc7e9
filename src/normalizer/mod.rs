//! File name normalization for perspective files
//!
//! Every perspective file is expected to live under `<perspectiveId>.json`, because that
//! is the path the viewer requests for each id listed in the index. Normalization is
//! split into planning ([`plan_renames`]) and applying ([`apply_renames`]) so a plan can
//! be inspected (dry run) before anything on disk changes.
//!
//! Two files that resolve to the same target are a known hazard: the plan flags the
//! collision, and applying it lets the later file overwrite the earlier one.

pub mod rename;

pub use rename::{PlannedRename, RenameCollision, RenamePlan, apply_renames, plan_renames};
