//! Index building for a folder of perspective files
//!
//! Two independent builders exist and are never merged:
//!
//! - [`build_filename_index`]: ids and names come from file names, nothing is mutated
//! - [`build_perspective_index`]: ids and names come from each file's content, and a
//!   rename plan normalizes file names to `<perspectiveId>.json`
//!
//! # Error Handling Strategy
//!
//! - **Directory failures**: a data directory that cannot be listed fails the run.
//! - **Per-file failures**: each file read yields a typed [`SourceError`]. The
//!   [`ErrorPolicy`] decides whether the first failure aborts the batch (the default)
//!   or whether failing files are reported on stderr and left out of the index.
//! - **Failure thresholds**: even when skipping, more than 50% failing files fails the
//!   run, since that points at the wrong directory rather than a few bad files.
//! - **No partial mutation**: every file is read before any rename happens, so a
//!   failed run leaves the directory exactly as it found it.
//!
//! [`SourceError`]: crate::parsers::SourceError

pub mod check;
pub mod filename;
pub mod perspective;

pub use check::{CheckReport, check_index};
pub use filename::{build_filename_index, strip_json_marker};
pub use perspective::{
    ErrorPolicy, PerspectiveIndex, apply_perspective_index, build_perspective_index,
};
