//! Readers for perspective source files
//!
//! # Error Handling Strategy
//!
//! Reading a single file never decides the fate of the whole run. Each read returns a
//! typed [`SourceError`] so the indexer can choose, at the orchestration level, whether
//! one bad file aborts the batch or is reported and skipped:
//!
//! - **Filesystem failures**: open/read errors, including directories named like data files
//! - **Malformed documents**: the file is not valid JSON, or not a JSON object
//! - **Shape failures**: `perspectiveId` or `name` is missing or has the wrong type
//! - **Reserved ids**: a `perspectiveId` that would rename the file onto the index file

pub mod deserializers;
pub mod source;

pub use source::{NAME_FIELD, PERSPECTIVE_ID_FIELD, SourceError, parse_source_file};
