//! Data List Indexer - Build the `dataList.json` index for a folder of perspective files
//!
//! This library scans a directory of JSON data assets and produces the index file the
//! viewer loads before fetching individual perspectives. It supports:
//!
//! - Filename-derived indexing (the id and name are the file name minus `.json`)
//! - Content-derived indexing that reads `perspectiveId`/`name` from each file,
//!   normalizes file names to `<perspectiveId>.json` and sorts the index by name
//! - Checking an existing index against the files it references
//!
//! # Example
//!
//! ```no_run
//! use data_list_indexer::{build_filename_index, write_index};
//! use std::path::PathBuf;
//!
//! let data_dir = PathBuf::from("public/data");
//! let records = build_filename_index(&data_dir, "dataList.json")?;
//! write_index(&data_dir, "dataList.json", &records)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod index_storage;
pub mod indexer;
pub mod models;
pub mod normalizer;
pub mod parsers;
pub mod scanner;
pub mod utils;

// Re-export commonly used types
pub use index_storage::{DEFAULT_INDEX_FILENAME, load_index, write_index};
pub use indexer::{ErrorPolicy, build_filename_index, build_perspective_index, check_index};
pub use models::{IndexRecord, SourceRecord};
pub use parsers::{SourceError, parse_source_file};
pub use scanner::scan_json_entries;
