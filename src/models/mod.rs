//! Data models for the perspective index.
//!
//! - [`DirectoryEntry`] - A candidate file found while scanning the data directory
//! - [`SourceRecord`] - The fields read from one perspective file
//! - [`IndexRecord`] - One `{id, name}` entry of `dataList.json`

pub mod entry;
pub mod index;
pub mod source;

pub use entry::DirectoryEntry;
pub use index::IndexRecord;
pub use source::SourceRecord;
